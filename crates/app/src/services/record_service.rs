//! Record service — use-cases for managing records.

use wares_domain::error::{NotFoundError, WaresError};
use wares_domain::id::RecordId;
use wares_domain::record::{NewRecord, Record, RecordUpdate};

use crate::ports::RecordRepository;

fn not_found(id: RecordId) -> WaresError {
    NotFoundError {
        entity: "record",
        id: id.to_string(),
    }
    .into()
}

/// Application service for record CRUD operations.
pub struct RecordService<R> {
    repo: R,
}

impl<R: RecordRepository> RecordService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new record. The repository assigns the id and stamps
    /// provenance.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, draft), fields(product = %draft.product))]
    pub async fn create_record(&self, draft: NewRecord) -> Result<Record, WaresError> {
        self.repo.insert(draft).await
    }

    /// Look up a record by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`WaresError::NotFound`] when no record with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_record(&self, id: RecordId) -> Result<Record, WaresError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// List all records.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_records(&self) -> Result<Vec<Record>, WaresError> {
        self.repo.get_all().await
    }

    /// Update the mutable fields of an existing record.
    ///
    /// # Errors
    ///
    /// Returns [`WaresError::NotFound`] when no record with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self, update))]
    pub async fn update_record(
        &self,
        id: RecordId,
        update: RecordUpdate,
    ) -> Result<Record, WaresError> {
        self.repo
            .update(id, update)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Delete a record by id.
    ///
    /// # Errors
    ///
    /// Returns [`WaresError::NotFound`] when no record with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_record(&self, id: RecordId) -> Result<(), WaresError> {
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(not_found(id))
        }
    }
}
