//! # wares-adapter-storage-mongodb
//!
//! MongoDB persistence adapter using the official
//! [mongodb](https://docs.rs/mongodb) driver.
//!
//! ## Responsibilities
//! - Manage the client lifecycle: connect with bounded timeouts and a
//!   liveness ping, degrade to a disconnected handle instead of failing,
//!   shut down idempotently
//! - Implement the repository port traits defined in
//!   `wares-app::ports::storage`
//! - Bulk-load JSON files into the collection with per-file
//!   partial-failure semantics
//! - Map between domain types and BSON documents (the store's `_id`
//!   never crosses this boundary)
//!
//! ## Dependency rule
//! Depends on `wares-app` (for port traits) and `wares-domain` (for
//! domain types). The `app` and `domain` crates must never reference
//! this adapter.

pub mod error;
pub mod loader;
pub mod record_repo;
pub mod store;

pub use loader::{BulkLoader, LoadReport};
pub use record_repo::MongoRecordRepository;
pub use store::{Config, MongoStore};
