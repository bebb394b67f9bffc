//! Error handling - maps every failure to the `{success:false, message,
//! errors?}` envelope.

use actix_web::{HttpRequest, HttpResponse, ResponseError, error, http::StatusCode};
use std::fmt;

use lectern_core::DomainError;
use lectern_shared::ErrorBody;

/// Application-level error type rendered as the JSON error envelope.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Unauthorized(String),
    Validation(Vec<String>),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::Validation(errors) => write!(f, "Validation errors: {:?}", errors),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::NotFound(msg) => ErrorBody::new(msg.clone()),
            AppError::BadRequest(msg) => ErrorBody::new(msg.clone()),
            AppError::Unauthorized(msg) => ErrorBody::new(msg.clone()),
            AppError::Validation(errors) => {
                ErrorBody::new("Invalid data").with_errors(errors.clone())
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                ErrorBody::new("Internal server error")
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound => AppError::NotFound("Post not found".to_string()),
            DomainError::Validation(errors) => AppError::Validation(errors),
            DomainError::Duplicate(key) => {
                AppError::BadRequest(format!("Duplicate resource: {}", key))
            }
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

/// Render malformed JSON bodies in the error envelope instead of the
/// framework default.
pub fn json_error_handler(
    err: error::JsonPayloadError,
    _req: &HttpRequest,
) -> actix_web::Error {
    let body = ErrorBody::new(format!("Invalid request body: {}", err));
    error::InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
}

/// Render malformed query strings in the error envelope.
pub fn query_error_handler(
    err: error::QueryPayloadError,
    _req: &HttpRequest,
) -> actix_web::Error {
    let body = ErrorBody::new(format!("Invalid query parameters: {}", err));
    error::InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
}
