//! Configuration schema for cartstore
//!
//! Configuration is stored at `~/.config/cartstore/config.toml`

use crate::cart::DEFAULT_STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Where and how the cart is persisted
    pub storage: StorageConfig,
}

/// General application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log at info level even without -v
    pub verbose: bool,
}

/// Storage backend kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// One file per key in the data directory
    #[default]
    File,
    /// Process memory only, nothing survives exit
    Memory,
}

/// Storage settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Backend to persist the cart with
    pub backend: StorageBackend,

    /// Data directory for the file backend (defaults to the platform data dir)
    pub data_dir: Option<PathBuf>,

    /// Key the cart collection is stored under
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::File,
            data_dir: None,
            key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}
