//! Process-local storage backend

use super::KeyValueStore;
use crate::error::CartResult;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-memory key-value store. Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with a single entry
    pub fn with_item(key: &str, value: impl Into<String>) -> Self {
        let mut data = HashMap::new();
        data.insert(key.to_string(), value.into());
        Self {
            data: RwLock::new(data),
        }
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get_item(&self, key: &str) -> CartResult<Option<String>> {
        Ok(self.data.read().await.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> CartResult<()> {
        self.data
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
