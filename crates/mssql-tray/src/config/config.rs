//! Configuration management for mssql-tray.
//!
//! Handles loading and saving TOML configuration files with cross-platform
//! paths and atomic write operations. One explicit struct, constructed at
//! startup and passed into the monitor — no ambient environment lookups.

use crate::{
    AppError, AppResult,
    config::{ContainerConfig, ControlConfig, DEFAULT_CONTROL_SCRIPT, PollingConfig},
};

use std::{fs, io::Write, panic::Location, path::PathBuf, time::Duration};

use directories::ProjectDirs;
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Main configuration struct.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Monitored container settings.
    #[serde(default)]
    pub container: ContainerConfig,
    /// Control script settings.
    #[serde(default)]
    pub control: ControlConfig,
    /// Status polling cadence and probe timeout.
    #[serde(default)]
    pub polling: PollingConfig,
}

impl Config {
    /// Load configuration from disk, creating the default file if not found.
    ///
    /// Note: This does NOT check that the control script exists. Actions are
    /// dispatched lazily and report their own launch faults, so the app can
    /// start and show status even before the script is in place.
    #[track_caller]
    #[instrument]
    pub fn load() -> AppResult<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let contents = fs::read_to_string(&config_path).map_err(|e| AppError::ConfigError {
                reason: format!("Failed to read config: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

            let config: Config = toml::from_str(&contents).map_err(|e| AppError::ConfigError {
                reason: format!("Failed to parse config: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

            info!(config_path = ?config_path, "Configuration loaded");

            Ok(config)
        } else {
            info!("No config found, creating default");
            let config = Config::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Save configuration to disk using atomic write pattern.
    ///
    /// Writes to a temporary file first, then renames to prevent corruption
    /// if the process crashes during the write.
    #[track_caller]
    #[instrument]
    pub fn save(&self) -> AppResult<()> {
        let config_path = Self::config_path()?;

        let contents = toml::to_string_pretty(self).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to serialize config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        // Atomic write: write to temp file then rename
        let temp_path = config_path.with_extension("toml.tmp");

        let mut temp_file = fs::File::create(&temp_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to create temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        temp_file
            .write_all(contents.as_bytes())
            .map_err(|e| AppError::ConfigError {
                reason: format!("Failed to write temp config file: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        temp_file.sync_all().map_err(|e| AppError::ConfigError {
            reason: format!("Failed to sync temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        fs::rename(&temp_path, &config_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to rename temp config to final: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!(config_path = ?config_path, "Configuration saved (atomic write)");

        Ok(())
    }

    /// Resolve the control script path.
    ///
    /// Uses the configured path when set, otherwise `mssql.sh` next to the
    /// executable.
    #[track_caller]
    pub fn control_script(&self) -> AppResult<PathBuf> {
        if let Some(path) = &self.control.script_path {
            return Ok(path.clone());
        }

        let exe = std::env::current_exe()?;
        Ok(match exe.parent() {
            Some(dir) => dir.join(DEFAULT_CONTROL_SCRIPT),
            None => PathBuf::from(DEFAULT_CONTROL_SCRIPT),
        })
    }

    /// Interval between status polls.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.polling.interval_ms)
    }

    /// Hard timeout for a single engine query.
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.polling.probe_timeout_secs)
    }

    #[track_caller]
    fn config_path() -> AppResult<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "mssql-tray", "MSSQL Tray").ok_or_else(|| {
            AppError::ConfigError {
                reason: "Failed to get config directory".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        let config_dir = proj_dirs.config_dir();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
            debug!(config_dir = ?config_dir, "Created config directory");
        }

        Ok(config_dir.join("config.toml"))
    }
}
