//! Explicit session object backing the login stub.
//!
//! The session is passed through application state and persists the current
//! user in an injected key-value store, instead of living in a global. This
//! is still a stub: nothing downstream enforces authentication on mutating
//! routes.

use std::sync::Arc;

use crate::domain::User;
use crate::error::DomainError;
use crate::ports::KeyValue;

const SESSION_KEY: &str = "session:current-user";

/// Current-user session backed by a [`KeyValue`] persistence capability.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn KeyValue>,
}

impl Session {
    pub fn new(store: Arc<dyn KeyValue>) -> Self {
        Self { store }
    }

    /// Record `user` as logged in.
    pub async fn login(&self, user: &User) -> Result<(), DomainError> {
        let payload =
            serde_json::to_string(user).map_err(|e| DomainError::Internal(e.to_string()))?;
        self.store
            .set(SESSION_KEY, &payload)
            .await
            .map_err(|e| DomainError::Internal(e.to_string()))
    }

    /// Clear the recorded user. Logging out twice is a no-op.
    pub async fn logout(&self) -> Result<(), DomainError> {
        self.store
            .remove(SESSION_KEY)
            .await
            .map_err(|e| DomainError::Internal(e.to_string()))
    }

    /// The currently logged-in user, if any.
    pub async fn user(&self) -> Option<User> {
        let payload = self.store.get(SESSION_KEY).await?;
        serde_json::from_str(&payload).ok()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.user().await.is_some()
    }
}
