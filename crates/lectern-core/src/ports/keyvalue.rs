use async_trait::async_trait;

/// Small key-value persistence capability. Backs the session object; an
/// in-memory implementation lives in `lectern-infra`.
#[async_trait]
pub trait KeyValue: Send + Sync {
    /// Get a value, if present.
    async fn get(&self, key: &str) -> Option<String>;

    /// Set a value, replacing any previous one.
    async fn set(&self, key: &str, value: &str) -> Result<(), KvError>;

    /// Remove a key. Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> Result<(), KvError>;
}

/// Key-value store errors.
#[derive(Debug, thiserror::Error)]
pub enum KvError {
    #[error("connection failed: {0}")]
    Connection(String),

    #[error("operation failed: {0}")]
    Operation(String),
}
