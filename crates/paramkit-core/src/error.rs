//! Error handling for the paramkit library.
//!
//! Deriving parameters and paths from a descriptor never fails; the values
//! degrade instead. Errors only come from loading things: configuration files
//! and descriptor documents. This module defines the `Error` type for those
//! paths along with a convenient `Result` alias.
//!
//! # Examples
//!
//! ```
//! use paramkit_core::error::{Error, Result};
//!
//! fn require_path(path: Option<&str>) -> Result<&str> {
//!     path.ok_or_else(|| Error::descriptor("missing `path`"))
//! }
//!
//! assert!(require_path(None).is_err());
//! ```

use thiserror::Error;

/// Result type for paramkit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for paramkit operations
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlDe(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// Malformed endpoint descriptor
    #[error("Descriptor error: {0}")]
    Descriptor(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new descriptor error
    pub fn descriptor<S: Into<String>>(msg: S) -> Self {
        Self::Descriptor(msg.into())
    }
}
