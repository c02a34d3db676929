//! # wares-domain
//!
//! Pure domain model for the wares record service.
//!
//! ## Responsibilities
//! - Foundational types: the sequential [`id::RecordId`], error
//!   conventions, timestamps
//! - Define the **Record** entity (product/price documents with
//!   provenance stamps)
//! - Define the **bulk-load payload** variants (object, array, scalar)
//!   resolved once at parse time
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO
//! crates. All IO boundaries are expressed as traits in the `app` crate
//! (ports).

pub mod error;
pub mod id;
pub mod payload;
pub mod record;
pub mod time;
