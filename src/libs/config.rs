//! Configuration management for tasktime.
//!
//! The configuration is a small JSON document stored next to the database in
//! the platform data directory. Its main job is to pin the reference time zone
//! used when parsing user input, walking working days and rendering instants.
//!
//! ## File Location
//!
//! - **Windows**: `%LOCALAPPDATA%\tasktime\config.json`
//! - **macOS**: `~/Library/Application Support/tasktime/config.json`
//! - **Linux**: `~/.local/share/tasktime/config.json`
//!
//! ## Example
//!
//! ```json
//! {
//!   "timezone": "Europe/Berlin"
//! }
//! ```
//!
//! When `timezone` is absent the process-local zone is used.

use super::data_storage::DataStorage;
use crate::libs::error::ConfigError;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Main configuration container.
///
/// Every field is optional so that a missing or partial file still loads.
/// Unset fields are omitted when saving to keep the file readable.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// IANA name of the reference time zone (e.g. `Europe/Berlin`).
    ///
    /// All date input is interpreted in this zone, working days are walked in
    /// it and instants are displayed in it. `None` means the system zone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

impl Config {
    /// Reads configuration from the data directory.
    ///
    /// A missing file is not an error: the default configuration is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config =
            serde_json::from_str(&config_str).map_err(|e| msg_error_anyhow!(Message::ConfigParseError(e.to_string())))?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Resolves the configured zone.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when no zone is configured and the system zone applies.
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnknownTimeZone`] when the name is not an IANA zone.
    pub fn zone(&self) -> Result<Option<Tz>, ConfigError> {
        self.timezone.as_deref().map(parse_zone).transpose()
    }
}

/// Parses an IANA zone name.
pub fn parse_zone(name: &str) -> Result<Tz, ConfigError> {
    name.parse::<Tz>()
        .map_err(|_| ConfigError::UnknownTimeZone(name.to_string()))
}
