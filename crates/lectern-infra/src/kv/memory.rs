//! In-memory key-value store backing the session object.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use lectern_core::ports::{KeyValue, KvError};

/// HashMap behind an async RwLock. Data is lost on process restart, which
/// matches the throwaway nature of the session stub.
pub struct MemoryKeyValue {
    store: RwLock<HashMap<String, String>>,
}

impl MemoryKeyValue {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryKeyValue {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyValue for MemoryKeyValue {
    async fn get(&self, key: &str) -> Option<String> {
        let store = self.store.read().await;
        store.get(key).cloned()
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), KvError> {
        let mut store = self.store.write().await;
        store.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), KvError> {
        let mut store = self.store.write().await;
        store.remove(key);
        Ok(())
    }
}
