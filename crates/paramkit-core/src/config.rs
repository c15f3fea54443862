//! Configuration for parameter and path derivation.
//!
//! The only tunable is the set of known keys: field names that describe the
//! endpoint itself and must never leak into parameters or path substitution.
//! A configuration can be created programmatically or loaded from a YAML or
//! TOML file (chosen by extension).
//!
//! # Examples
//!
//! ```no_run
//! use paramkit_core::config::Config;
//! use paramkit_core::keys::KnownKeys;
//!
//! # #[tokio::main]
//! # async fn main() -> paramkit_core::Result<()> {
//! let config = Config::from_file("paramkit.yaml").await?;
//!
//! // Or build one directly
//! let custom = Config::new(KnownKeys::new(["path", "method", "headers"]));
//! assert!(custom.known_keys.contains("headers"));
//! # Ok(())
//! # }
//! ```

// Internal imports (std, crate)
use std::collections::HashSet;
use std::path::Path;

use crate::keys::KnownKeys;
use crate::Error;

// External imports (alphabetized)
use serde::{Deserialize, Serialize};
use tokio::fs;

/// Configuration for paramkit conversions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Field names excluded from parameters and path substitution
    #[serde(default)]
    pub known_keys: KnownKeys,
}

impl Config {
    /// Create a new Config with the given known keys
    pub fn new(known_keys: KnownKeys) -> Self {
        Self { known_keys }
    }

    /// Load configuration from a file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).await?;
        let config: Self = if is_toml(path) {
            toml::from_str(&content)?
        } else {
            serde_yaml::from_str(&content)?
        };
        config.validate()?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Check that every known key is a non-empty, unique field name
    pub fn validate(&self) -> crate::Result<()> {
        let mut seen = HashSet::new();
        for key in self.known_keys.iter() {
            if key.is_empty() {
                return Err(Error::config("known_keys must not contain an empty name"));
            }
            if !seen.insert(key) {
                return Err(Error::config(format!("duplicate known key '{key}'")));
            }
        }
        Ok(())
    }

    /// Save configuration to a file
    pub async fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let path = path.as_ref();
        let content = if is_toml(path) {
            toml::to_string(self)?
        } else {
            serde_yaml::to_string(self)?
        };
        fs::write(path, content).await?;
        Ok(())
    }
}

fn is_toml(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some("toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_config_roundtrip_yaml() -> crate::Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("config.yaml");

        let config = Config::new(KnownKeys::new(["path", "method", "headers"]));
        config.save(&file_path).await?;

        let loaded = Config::from_file(&file_path).await?;
        assert_eq!(loaded, config);
        assert!(loaded.known_keys.contains("headers"));
        assert!(!loaded.known_keys.contains("sampleData"));

        Ok(())
    }

    #[tokio::test]
    async fn test_config_roundtrip_toml() -> crate::Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("config.toml");

        let config = Config::default();
        config.save(&file_path).await?;

        let loaded = Config::from_file(&file_path).await?;
        assert_eq!(loaded.known_keys, KnownKeys::default());

        Ok(())
    }

    #[tokio::test]
    async fn test_rejects_duplicate_known_keys() -> crate::Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("dup.yaml");
        tokio::fs::write(&file_path, "known_keys: [path, method, path]\n").await?;

        let result = Config::from_file(&file_path).await;
        assert!(matches!(result, Err(Error::Config(_))));

        Ok(())
    }

    #[tokio::test]
    async fn test_rejects_empty_known_key() -> crate::Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("blank.toml");
        tokio::fs::write(&file_path, "known_keys = [\"path\", \"\"]\n").await?;

        let result = Config::from_file(&file_path).await;
        assert!(matches!(result, Err(Error::Config(_))));

        Ok(())
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(Config::default().validate().is_ok());
    }

    #[tokio::test]
    async fn test_missing_known_keys_uses_defaults() -> crate::Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("empty.yaml");
        tokio::fs::write(&file_path, "{}\n").await?;

        let loaded = Config::from_file(&file_path).await?;
        assert_eq!(loaded.known_keys, KnownKeys::default());

        Ok(())
    }
}
