//! Configuration for the tasked application.
//!
//! Settings live in `config.json` inside the per-user data directory
//! (`~/.todo/config.json`). Every field is optional and a missing file is the
//! same as an empty one.
//!
//! ## Database Path Resolution
//!
//! The database file is chosen in this order:
//!
//! 1. The `--db` command-line option
//! 2. The `TASKED_DB` environment variable (a `.env` file is honoured)
//! 3. `db_path` from the config file
//! 4. `~/.todo/todo.json`
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use tasked::libs::config::Config;
//!
//! let config = Config::read()?;
//! let db_path = config.resolve_db_path(None);
//! println!("Using {}", db_path.display());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::formatter::DEFAULT_DATE_FORMAT;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::ffi::OsString;
use std::fs::{self, File};
use std::path::PathBuf;

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable overriding the database location.
pub const DB_ENV_VAR: &str = "TASKED_DB";

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Database file used when neither `--db` nor `TASKED_DB` is given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_path: Option<PathBuf>,

    /// strftime pattern for the date columns of `list`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_format: Option<String>,
}

impl Config {
    /// Reads the config file, falling back to defaults when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME);

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(&config_file_path)
            .with_context(|| format!("Failed to read {}", config_file_path.display()))?;
        let config: Config =
            serde_json::from_str(&config_str).with_context(|| format!("Failed to parse {}", config_file_path.display()))?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON, creating the data directory if needed.
    ///
    /// Returns the path of the written file.
    pub fn save(&self) -> Result<PathBuf> {
        let storage = DataStorage::new();
        fs::create_dir_all(storage.base_path())
            .with_context(|| format!("Failed to create {}", storage.base_path().display()))?;

        let config_file_path = storage.get_path(CONFIG_FILE_NAME);
        let config_file = File::create(&config_file_path)
            .with_context(|| format!("Failed to write {}", config_file_path.display()))?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(config_file_path)
    }

    /// Picks the database file for this invocation.
    pub fn resolve_db_path(&self, cli_path: Option<PathBuf>) -> PathBuf {
        self.resolve_db_path_with(cli_path, env::var_os(DB_ENV_VAR))
    }

    fn resolve_db_path_with(&self, cli_path: Option<PathBuf>, env_path: Option<OsString>) -> PathBuf {
        cli_path
            .or_else(|| env_path.filter(|value| !value.is_empty()).map(PathBuf::from))
            .or_else(|| self.db_path.clone())
            .unwrap_or_else(|| DataStorage::new().default_db_path())
    }

    pub fn date_format(&self) -> &str {
        self.date_format.as_deref().unwrap_or(DEFAULT_DATE_FORMAT)
    }
}
