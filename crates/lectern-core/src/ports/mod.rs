//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod keyvalue;
mod store;

pub use auth::{AuthError, PasswordService};
pub use keyvalue::{KeyValue, KvError};
pub use store::PostStore;
