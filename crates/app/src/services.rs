//! Use-case services orchestrating domain objects through ports.

pub mod record_service;
