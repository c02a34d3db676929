//! Shared pieces of the `waresd` binaries: configuration loading used by
//! the server, the seed tool, and the connectivity probe.

pub mod config;
