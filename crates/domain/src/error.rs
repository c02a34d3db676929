//! Common error types used across the workspace.
//!
//! Outcomes at the data-access boundary are expressed as one of three
//! kinds: a looked-up record is absent ([`NotFoundError`], a normal
//! outcome), the document store is unreachable
//! ([`WaresError::Unavailable`]), or the store failed in a way the
//! caller cannot act on ([`WaresError::Unexpected`]). Raw driver errors
//! never cross this boundary.

/// Top-level error enum shared by the application and adapter layers.
#[derive(Debug, thiserror::Error)]
pub enum WaresError {
    /// The requested record does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The document store is not connected or not reachable.
    #[error("document store unavailable: {0}")]
    Unavailable(String),

    /// Any other store failure, wrapped so the source stays inspectable.
    #[error("unexpected store error")]
    Unexpected(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A lookup that matched nothing.
#[derive(Debug, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Entity kind, e.g. `"record"`.
    pub entity: &'static str,
    /// Identifier that was looked up.
    pub id: String,
}
