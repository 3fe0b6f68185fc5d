//! Configuration for the cellars binary

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_STORAGE_PATH: &str = "creatures.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Where creature records live
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StorageConfig {
    /// Gone when the process exits
    Memory,
    /// One JSON document on disk
    File { path: PathBuf },
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig::File {
            path: PathBuf::from(DEFAULT_STORAGE_PATH),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdGeneratorKind {
    /// Pseudo-UUIDs from a seeded PRNG
    #[default]
    Pseudo,
    /// v4 UUIDs from the uuid crate
    Uuid,
}

/// Application configuration (`--config` file, camelCase JSON keys)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub storage: StorageConfig,

    pub id_generator: IdGeneratorKind,

    /// Fixed PRNG seed for reproducible ids; entropy when absent
    pub seed: Option<u64>,

    /// Used when RUST_LOG is not set
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            id_generator: IdGeneratorKind::default(),
            seed: None,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from `path` when given, defaults otherwise
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_parse() {
        let json = r#"{
            "storage": { "kind": "file", "path": "/var/lib/cellars/creatures.json" },
            "idGenerator": "uuid",
            "seed": 42,
            "logFilter": "debug"
        }"#;

        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(
            config.storage,
            StorageConfig::File {
                path: PathBuf::from("/var/lib/cellars/creatures.json")
            }
        );
        assert_eq!(config.id_generator, IdGeneratorKind::Uuid);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{ "storage": { "kind": "memory" } }"#).unwrap();
        assert_eq!(config.storage, StorageConfig::Memory);
        assert_eq!(config.id_generator, IdGeneratorKind::Pseudo);
        assert_eq!(config.seed, None);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_load_without_path() {
        let config = AppConfig::load(None).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(
            config.storage,
            StorageConfig::File {
                path: PathBuf::from("creatures.json")
            }
        );
    }

    #[test]
    fn test_from_file_errors() {
        let dir = tempfile::TempDir::new().unwrap();

        let missing = dir.path().join("missing.json");
        assert!(matches!(
            AppConfig::from_file(&missing),
            Err(ConfigError::Io { .. })
        ));

        let broken = dir.path().join("broken.json");
        std::fs::write(&broken, "{ storage: ").unwrap();
        assert!(matches!(
            AppConfig::from_file(&broken),
            Err(ConfigError::Parse { .. })
        ));
    }
}
