//! Application configuration loaded from environment variables.
//!
//! Variables use the `QUICKCHAT_` prefix and `__` between sections, e.g.
//! `QUICKCHAT_STORAGE__USERS_PATH=/var/lib/quickchat/users.json`.

use anyhow::{Context, Result};
use serde::Deserialize;
use snapshot_store::Store;
use std::path::{Path, PathBuf};

/// Application configuration.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Persistence configuration
    #[serde(default)]
    pub storage: StorageConfig,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Registered users file
    #[serde(default = "default_users_path")]
    pub users_path: PathBuf,

    /// Stored messages file
    #[serde(default = "default_stored_messages_path")]
    pub stored_messages_path: PathBuf,

    /// Enable persistence (if false, nothing is written to disk)
    #[serde(default = "default_true")]
    pub persist: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Log level, overridden by RUST_LOG
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON log lines
    #[serde(default)]
    pub json: bool,
}

impl StorageConfig {
    /// Store for the registered users file.
    pub fn users_store(&self) -> Store {
        self.store_for(&self.users_path)
    }

    /// Store for the stored messages file.
    pub fn stored_messages_store(&self) -> Store {
        self.store_for(&self.stored_messages_path)
    }

    fn store_for(&self, path: &Path) -> Store {
        if self.persist {
            Store::file(path)
        } else {
            Store::memory()
        }
    }
}

// Default implementations
impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            users_path: default_users_path(),
            stored_messages_path: default_stored_messages_path(),
            persist: default_true(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

// Default value functions
fn default_users_path() -> PathBuf {
    PathBuf::from("data/users.json")
}

fn default_stored_messages_path() -> PathBuf {
    PathBuf::from("data/stored_messages.json")
}

fn default_true() -> bool {
    true
}

// Prompts share the terminal with the logs
fn default_log_level() -> String {
    "warn".into()
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::with_prefix("QUICKCHAT")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(false),
            )
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(config.storage.users_path, PathBuf::from("data/users.json"));
        assert_eq!(
            config.storage.stored_messages_path,
            PathBuf::from("data/stored_messages.json")
        );
        assert!(config.storage.persist);
        assert_eq!(config.log.level, "warn");
        assert!(!config.log.json);
    }

    #[test]
    fn test_persist_selects_store() {
        let mut storage = StorageConfig::default();
        assert_eq!(
            storage.users_store().path(),
            Some(PathBuf::from("data/users.json").as_path())
        );

        storage.persist = false;
        assert!(storage.users_store().path().is_none());
        assert!(storage.stored_messages_store().path().is_none());
    }

    #[test]
    fn test_partial_sections_fill_defaults() {
        let config: Config = serde_json::from_str(
            r#"{"storage": {"users_path": "/tmp/u.json"}, "log": {"json": true}}"#,
        )
        .unwrap();

        assert_eq!(config.storage.users_path, PathBuf::from("/tmp/u.json"));
        assert_eq!(
            config.storage.stored_messages_path,
            PathBuf::from("data/stored_messages.json")
        );
        assert!(config.log.json);
        assert_eq!(config.log.level, "warn");
    }
}
