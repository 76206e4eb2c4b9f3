//! Error types for cartstore
//!
//! All modules use `CartResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for cart operations
pub type CartResult<T> = Result<T, CartError>;

/// All errors that can occur in cartstore
#[derive(Error, Debug)]
pub enum CartError {
    // Usage errors
    #[error("useCart must be used within a CartProvider")]
    OutsideProvider,

    // Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("{0}")]
    User(String),
}

impl CartError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::OutsideProvider => {
                Some("Mount a CartProvider and pass its context to the consumer")
            }
            Self::ConfigInvalid { .. } => Some("Fix or remove the configuration file"),
            _ => None,
        }
    }
}
