//! Request-level plumbing: error mapping to the JSON envelope.

pub mod error;
