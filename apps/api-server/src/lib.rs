//! # Lectern API Server
//!
//! REST backend for the Lectern blogging platform. The binary entry point
//! lives in `main.rs`; the modules are exposed here so the integration tests
//! can assemble the same application.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod state;
