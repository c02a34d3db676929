//! Shared application state for axum handlers.

use std::sync::Arc;

use wares_app::ports::{RecordRepository, StoreStatus};
use wares_app::services::record_service::RecordService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository and store-status types to avoid dynamic
/// dispatch. `Clone` is implemented manually so the underlying types
/// themselves do not need to be `Clone` — only the `Arc` wrappers are
/// cloned.
pub struct AppState<R, S> {
    /// Record CRUD service.
    pub record_service: Arc<RecordService<R>>,
    /// Store connection state for the health endpoint.
    pub store_status: Arc<S>,
}

impl<R, S> Clone for AppState<R, S> {
    fn clone(&self) -> Self {
        Self {
            record_service: Arc::clone(&self.record_service),
            store_status: Arc::clone(&self.store_status),
        }
    }
}

impl<R, S> AppState<R, S>
where
    R: RecordRepository + Send + Sync + 'static,
    S: StoreStatus + Send + Sync + 'static,
{
    /// Create a new application state from the service and status handle.
    pub fn new(record_service: RecordService<R>, store_status: S) -> Self {
        Self {
            record_service: Arc::new(record_service),
            store_status: Arc::new(store_status),
        }
    }
}
