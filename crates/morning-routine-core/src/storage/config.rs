//! TOML-based application configuration.
//!
//! Stores:
//! - Where the checklist file lives
//! - The tasks a fresh checklist starts with
//! - The web server bind address
//!
//! Configuration is stored at `~/.config/morning-routine/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::{data_dir, JsonFileStore};
use crate::error::ConfigError;
use crate::model::ChecklistDocument;

const CONFIG_FILE: &str = "config.toml";
const CHECKLIST_FILE: &str = "checklist.json";
const VIEW_FILE: &str = "checklist.html";

/// Web server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/morning-routine/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Checklist file; defaults to `checklist.json` in the data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
    /// Tasks for a brand-new checklist. The first one tracks the wake time.
    #[serde(default = "default_seed_tasks")]
    pub seed_tasks: Vec<String>,
    #[serde(default)]
    pub server: ServerConfig,
}

fn default_bind() -> String {
    "127.0.0.1:5000".into()
}

fn default_seed_tasks() -> Vec<String> {
    [
        "Wake up at 6:00 AM",
        "Drink a glass of water",
        "Make the bed",
        "Stretch for 10 minutes",
        "Review today's plan",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: None,
            seed_tasks: default_seed_tasks(),
            server: ServerConfig::default(),
        }
    }
}

impl Config {
    /// Default location of `config.toml`.
    pub fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join(CONFIG_FILE))
    }

    /// Load from the default location, writing defaults there if missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// Load from `path`, writing defaults there if the file is missing.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(toml::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(e) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
        }
    }

    /// Persist to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| save_failed(e.to_string()))?;
        }
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    /// Checklist file path, resolving the data directory when unset.
    pub fn checklist_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.data_file {
            Some(path) => Ok(path.clone()),
            None => Ok(data_dir()?.join(CHECKLIST_FILE)),
        }
    }

    /// Where the rendered HTML view is written: next to the checklist file.
    pub fn view_path(&self) -> Result<PathBuf, ConfigError> {
        let checklist = self.checklist_path()?;
        Ok(checklist
            .parent()
            .map(|dir| dir.join(VIEW_FILE))
            .unwrap_or_else(|| PathBuf::from(VIEW_FILE)))
    }

    /// Document a brand-new checklist starts from.
    pub fn seed_document(&self) -> ChecklistDocument {
        ChecklistDocument::seeded(self.seed_tasks.iter().cloned())
    }

    /// File store at [`Config::checklist_path`] seeded from `seed_tasks`.
    pub fn open_store(&self) -> Result<JsonFileStore, ConfigError> {
        Ok(JsonFileStore::new(self.checklist_path()?).with_seed(self.seed_document()))
    }
}
