//! # wares-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **REST JSON API** (`/api/users`, `/api/health`)
//! - Serve the static landing page at `/`
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map the domain error taxonomy into status codes and a stable
//!   error-kind body
//!
//! ## Dependency rule
//! Depends on `wares-app` (for port traits and services) and
//! `wares-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
