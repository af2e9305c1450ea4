//! Configuration management for the preview host
//!
//! Chooses where widget state lives and how the preview is printed.

use anyhow::Result;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::state::{FileStore, MemoryStore, StateStore};

const APP_DIR: &str = "date-widget";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Where synced state is kept
    pub storage: StorageConfig,
    /// Preview output settings
    pub preview: PreviewConfig,
}

impl Config {
    /// Get the configuration file path
    pub fn config_path() -> PathBuf {
        config_dir().join("config.toml")
    }

    /// Load configuration from file or create default
    pub fn load_or_default() -> Result<Self> {
        Self::load_or_default_from(&Self::config_path())
    }

    /// Load configuration from `config_path`, writing defaults there if it is missing
    pub fn load_or_default_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            info!("Loading configuration from: {:?}", config_path);
            let content = std::fs::read_to_string(config_path)?;
            match toml::from_str(&content) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    warn!("Failed to parse config, using defaults: {}", e);
                }
            }
        }

        let config = Self::default();
        config.save_to(config_path)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        info!("Configuration saved to: {:?}", config_path);
        Ok(())
    }
}

fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Storage backend for widget state
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// State is dropped when the process exits
    Memory,
    #[default]
    File,
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// State file used by the file backend
    pub state_file: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::File,
            state_file: config_dir().join("state.toml"),
        }
    }
}

impl StorageConfig {
    /// Open the configured store
    pub fn open(&self) -> Box<dyn StateStore> {
        match self.backend {
            StorageBackend::Memory => {
                info!("Using in-memory widget state");
                Box::new(MemoryStore::new())
            }
            StorageBackend::File => {
                let store = FileStore::open(&self.state_file);
                info!("Using widget state file {:?}", store.path());
                Box::new(store)
            }
        }
    }
}

/// Preview output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// List click targets after the outline
    pub show_click_targets: bool,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            show_click_targets: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn toml_roundtrip_default() {
        let cfg = Config::default();
        let s = toml::to_string_pretty(&cfg).expect("serialize");
        let parsed: Config = toml::from_str(&s).expect("parse");
        assert_eq!(cfg.storage.backend, parsed.storage.backend);
        assert_eq!(cfg.storage.state_file, parsed.storage.state_file);
        assert_eq!(cfg.preview.show_click_targets, parsed.preview.show_click_targets);
    }

    #[test]
    fn backend_is_lowercase_in_toml() {
        let parsed: Config = toml::from_str(
            "[storage]\nbackend = \"memory\"\nstate_file = \"state.toml\"\n\n[preview]\nshow_click_targets = false\n",
        )
        .expect("parse");
        assert_eq!(parsed.storage.backend, StorageBackend::Memory);
        assert!(!parsed.preview.show_click_targets);
    }

    #[test]
    fn load_or_default_writes_defaults_when_missing() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("config.toml");

        let loaded = Config::load_or_default_from(&path).expect("load");
        assert!(path.exists());
        assert_eq!(loaded.storage.backend, StorageBackend::File);

        std::fs::write(&path, "storage = 5").unwrap();
        let fallback = Config::load_or_default_from(&path).expect("fallback");
        assert!(fallback.preview.show_click_targets);
    }

    #[test]
    fn config_path_ends_with_app_dir() {
        let p = Config::config_path();
        let s = p.to_string_lossy();
        assert!(
            s.ends_with("date-widget/config.toml") || s.ends_with("date-widget\\config.toml"),
            "config path does not end with date-widget/config.toml: {}",
            s
        );
    }

    #[test]
    fn file_backend_opens_configured_path() {
        let dir = tempdir().unwrap();
        let storage = StorageConfig {
            backend: StorageBackend::File,
            state_file: dir.path().join("state.toml"),
        };

        let mut store = storage.open();
        store.set("isMenuOpen", json!(true));
        assert!(storage.state_file.exists());

        let reopened = storage.open();
        assert_eq!(reopened.get("isMenuOpen"), Some(json!(true)));
    }

    #[test]
    fn save_and_load_or_default_reads_file() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("date-widget").join("config.toml");

        let mut cfg = Config::default();
        cfg.preview.show_click_targets = false;
        cfg.storage.backend = StorageBackend::Memory;
        cfg.save_to(&path).expect("save");

        let loaded = Config::load_or_default_from(&path).expect("load");
        assert!(!loaded.preview.show_click_targets);
        assert_eq!(loaded.storage.backend, StorageBackend::Memory);
    }
}
