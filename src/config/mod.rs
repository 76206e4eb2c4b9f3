//! Configuration for cartstore
//!
//! A single TOML file selects where the cart is persisted: the storage
//! backend, the data directory for file storage, and the key the cart is
//! stored under. Every field has a default, so a missing or partial file
//! still yields a usable configuration.

pub mod schema;

pub use schema::Config;

use crate::error::{CartError, CartResult};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Reads and writes the configuration file at a fixed path
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Manager for the per-user config file
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
        }
    }

    /// Manager for an explicit config file (`--config` / `CARTSTORE_CONFIG`)
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// `<config dir>/cartstore/config.toml`
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cartstore")
            .join("config.toml")
    }

    /// Where the file backend keeps carts unless `storage.data_dir` is set
    pub fn data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cartstore")
    }

    /// Read the cart configuration
    ///
    /// No file means the defaults: file storage in [`Self::data_dir`] under
    /// the default cart key. A file that fails to parse is an error naming
    /// the path, never a silent fallback.
    pub async fn load(&self) -> CartResult<Config> {
        let path = &self.config_path;
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .await
            .map_err(|e| CartError::io(format!("reading config from {}", path.display()), e))?;

        toml::from_str(&content).map_err(|e| CartError::ConfigInvalid {
            path: path.clone(),
            reason: e.to_string(),
        })
    }

    /// Write `config` as TOML, creating the parent directory if needed
    pub async fn save(&self, config: &Config) -> CartResult<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| CartError::ConfigDirCreate {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
        }

        let content = toml::to_string_pretty(config)?;
        fs::write(&self.config_path, content).await.map_err(|e| {
            CartError::io(
                format!("writing config to {}", self.config_path.display()),
                e,
            )
        })?;

        info!("Cart configuration saved to {}", self.config_path.display());
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::StorageBackend;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_default_when_missing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nonexistent.toml");
        let manager = ConfigManager::with_path(path);

        let config = manager.load().await.unwrap();
        assert_eq!(config.storage.backend, StorageBackend::File);
    }

    #[tokio::test]
    async fn save_and_load_roundtrip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.toml");
        let manager = ConfigManager::with_path(path);

        let mut config = Config::default();
        config.storage.key = "test-cart".to_string();
        config.storage.data_dir = Some(temp.path().join("data"));

        manager.save(&config).await.unwrap();
        let loaded = manager.load().await.unwrap();

        assert_eq!(loaded.storage.key, "test-cart");
        assert_eq!(loaded.storage.data_dir, Some(temp.path().join("data")));
    }

    #[tokio::test]
    async fn partial_file_keeps_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[storage]\nkey = \"guest-cart\"\n").await.unwrap();

        let config = ConfigManager::with_path(path).load().await.unwrap();

        assert_eq!(config.storage.key, "guest-cart");
        assert_eq!(config.storage.backend, StorageBackend::File);
        assert!(config.storage.data_dir.is_none());
    }

    #[tokio::test]
    async fn invalid_file_reports_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[storage]\nbackend = 42\n").await.unwrap();

        let err = ConfigManager::with_path(path.clone())
            .load()
            .await
            .unwrap_err();
        match err {
            CartError::ConfigInvalid { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other}"),
        }
    }
}
