//! Password hashing port for the login stub.

/// Password hashing service.
pub trait PasswordService: Send + Sync {
    /// Hash a plain text password.
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Verify a password against a hash.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}

/// Authentication errors. A wrong password is not an error; `verify`
/// reports it as `Ok(false)`.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("malformed password hash: {0}")]
    InvalidHash(String),

    #[error("hashing error: {0}")]
    Hashing(String),
}
