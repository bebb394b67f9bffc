//! Post store implementations.

mod memory;
mod text;

#[cfg(feature = "postgres")]
pub mod entity;
#[cfg(feature = "postgres")]
mod postgres;

pub use memory::MemoryPostStore;

#[cfg(feature = "postgres")]
pub use postgres::{DatabaseConfig, PgPostStore, connect};
