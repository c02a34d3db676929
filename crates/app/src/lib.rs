//! # wares-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound
//!   ports):
//!   - `RecordRepository` — CRUD for records
//!   - `StoreStatus` — connection-state reporting for health checks
//! - Define **driving/inbound ports** as use-case structs:
//!   - `RecordService` — create, get, list, update, delete
//! - Map the repository's `None`/`false` not-found signals into the
//!   domain error taxonomy so the HTTP facade only matches on errors
//!
//! ## Dependency rule
//! Depends on `wares-domain` only. Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
