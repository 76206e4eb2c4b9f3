//! Local key-value storage backends
//!
//! The cart mirrors its collection into a single string value under a fixed
//! key. Backends only move strings; serialization is the caller's concern.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::config::schema::{StorageBackend, StorageConfig};
use crate::config::ConfigManager;
use crate::error::CartResult;
use async_trait::async_trait;
use std::sync::Arc;

/// Abstract durable key-value store
///
/// Modeled on device-local storage: string keys, string values, and an
/// absent value for keys that were never written.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, or `None` if it was never written
    async fn get_item(&self, key: &str) -> CartResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    async fn set_item(&self, key: &str, value: &str) -> CartResult<()>;

    /// Human-readable backend name for display
    fn backend_name(&self) -> &'static str;
}

/// Create the storage backend selected by configuration
pub fn create_store(config: &StorageConfig) -> Arc<dyn KeyValueStore> {
    match config.backend {
        StorageBackend::File => {
            let dir = config
                .data_dir
                .clone()
                .unwrap_or_else(ConfigManager::data_dir);
            Arc::new(FileStore::new(dir))
        }
        StorageBackend::Memory => Arc::new(MemoryStore::new()),
    }
}
