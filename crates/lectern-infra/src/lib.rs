//! # Lectern Infrastructure
//!
//! Concrete implementations of the ports defined in `lectern-core`:
//! the post stores, the key-value store backing the session, and the
//! password service.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL post store via SeaORM. Without it the
//!   server runs on the in-memory store only.

pub mod auth;
pub mod kv;
pub mod store;

pub use auth::Argon2PasswordService;
pub use kv::MemoryKeyValue;
pub use store::MemoryPostStore;

#[cfg(feature = "postgres")]
pub use store::{DatabaseConfig, PgPostStore, connect};
