//! Storage port — repository and connection-status traits for
//! persistence.

use std::future::Future;

use wares_domain::error::WaresError;
use wares_domain::id::RecordId;
use wares_domain::record::{NewRecord, Record, RecordUpdate};

/// CRUD operations over the record collection.
///
/// Not-found is a normal outcome and is signalled in-band (`None` from
/// lookups, `false` from [`delete`](RecordRepository::delete)); errors
/// are reserved for an unreachable or failing store.
pub trait RecordRepository {
    /// Insert a new record, assigning the next sequential id and
    /// stamping provenance. Returns the stored record.
    fn insert(&self, draft: NewRecord) -> impl Future<Output = Result<Record, WaresError>> + Send;

    /// Fetch one record by id.
    fn get_by_id(
        &self,
        id: RecordId,
    ) -> impl Future<Output = Result<Option<Record>, WaresError>> + Send;

    /// Fetch every record in the collection.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Record>, WaresError>> + Send;

    /// Set the mutable fields on the matching record. Returns the
    /// post-update record, or `None` when no record matched.
    fn update(
        &self,
        id: RecordId,
        update: RecordUpdate,
    ) -> impl Future<Output = Result<Option<Record>, WaresError>> + Send;

    /// Remove the matching record. Returns whether a record was removed.
    fn delete(&self, id: RecordId) -> impl Future<Output = Result<bool, WaresError>> + Send;
}

/// Connection-state reporting, consumed by the health endpoint.
///
/// The state is binary and fixed at process startup: either the store
/// answered the liveness ping or the process is running degraded.
pub trait StoreStatus {
    /// Whether the store connection was established.
    fn is_connected(&self) -> bool;
}
