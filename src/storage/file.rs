//! Directory-backed storage
//!
//! Each key lives in its own file under the data directory. Keys such as
//! `@GoMarketplace:products` contain characters that are not portable in
//! file names, so the file name is the hex-encoded key.

use super::KeyValueStore;
use crate::error::{CartError, CartResult};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;
use tracing::debug;

/// Key-value store persisted as one JSON file per key
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Get the file path for a key
    pub fn item_path(&self, key: &str) -> CartResult<PathBuf> {
        if key.is_empty() {
            return Err(CartError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{}.json", hex::encode(key))))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get_item(&self, key: &str) -> CartResult<Option<String>> {
        let path = self.item_path(key)?;

        match fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No stored value for {} at {}", key, path.display());
                Ok(None)
            }
            Err(e) => Err(CartError::io(
                format!("reading stored value {}", path.display()),
                e,
            )),
        }
    }

    async fn set_item(&self, key: &str, value: &str) -> CartResult<()> {
        let path = self.item_path(key)?;

        fs::create_dir_all(&self.dir).await.map_err(|e| {
            CartError::io(format!("creating data directory {}", self.dir.display()), e)
        })?;

        fs::write(&path, value)
            .await
            .map_err(|e| CartError::io(format!("writing stored value {}", path.display()), e))?;

        debug!("Stored {} bytes for {}", value.len(), key);
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}
