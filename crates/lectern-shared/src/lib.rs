//! # Lectern Shared
//!
//! Types shared between the server and any API client: the JSON response
//! envelope and the request/response DTOs.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorBody};
