//! # Lectern Core
//!
//! The domain layer of the Lectern blogging backend.
//! This crate contains pure business logic with zero infrastructure dependencies:
//! the `Post` entity and its validation/derivation pipeline, the error taxonomy,
//! the ports implemented by `lectern-infra`, and the `PostService` policy layer.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::{DomainError, StoreError};
pub use service::PostService;
