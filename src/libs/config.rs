//! Configuration management for the attrition application.
//!
//! The configuration is a small JSON file stored next to the default
//! database in the platform-specific data directory. Today it only records
//! where the employee database lives.
//!
//! ## Database Location
//!
//! The database path is resolved in this order:
//! 1. the `--db <PATH>` command-line flag
//! 2. the `ATTRITION_DB` environment variable (also read from `.env`)
//! 3. `database.path` in `config.json`
//! 4. `attrition.db` inside the data directory
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use attrition::libs::config::Config;
//! use attrition::libs::data_storage::DataStorage;
//!
//! let config = Config::read()?;
//! let db_path = config.resolve_db_path(None, &DataStorage::new())?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default database file name inside the data directory.
pub const DB_FILE_NAME: &str = "attrition.db";

/// Environment variable overriding the configured database path.
pub const DB_PATH_ENV: &str = "ATTRITION_DB";

/// Where the employee database is stored.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DatabaseConfig {
    pub path: PathBuf,
}

/// Root configuration object persisted as `config.json`.
///
/// Every section is optional; a missing section means the built-in default
/// applies.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseConfig>,
}

impl Config {
    /// Reads the configuration from the data directory.
    ///
    /// A missing file is not an error: the default configuration is returned
    /// so the application works without any setup.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Runs the interactive setup wizard, pre-filled with the current values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let current = match &config.database {
            Some(database) => database.path.clone(),
            None => DataStorage::new().get_path(DB_FILE_NAME)?,
        };

        let path: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDatabasePath.to_string())
            .default(current.to_string_lossy().into_owned())
            .interact_text()?;

        config.database = Some(DatabaseConfig { path: PathBuf::from(path) });
        Ok(config)
    }

    /// Resolves the database path, honouring the `ATTRITION_DB` variable.
    pub fn resolve_db_path(&self, cli_path: Option<PathBuf>, storage: &DataStorage) -> Result<PathBuf> {
        self.resolve_db_path_with(cli_path, env::var(DB_PATH_ENV).ok(), storage)
    }

    pub fn resolve_db_path_with(&self, cli_path: Option<PathBuf>, env_path: Option<String>, storage: &DataStorage) -> Result<PathBuf> {
        if let Some(path) = cli_path {
            return Ok(path);
        }
        if let Some(path) = env_path.filter(|p| !p.trim().is_empty()) {
            return Ok(PathBuf::from(path));
        }
        if let Some(database) = &self.database {
            return Ok(database.path.clone());
        }
        storage.get_path(DB_FILE_NAME)
    }
}
