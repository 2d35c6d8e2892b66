use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use thiserror::Error;

use crate::models::settings::GridSettings;

const CONFIG_FILE: &str = "config.toml";

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Loads grid settings from a TOML file.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service reading `config.toml` from the platform config directory
    pub fn from_project_dirs() -> Option<Self> {
        ProjectDirs::from("com", "KenBoyle", "CalendarGrid")
            .map(|dirs| Self::new(dirs.config_dir().join(CONFIG_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the settings; a missing file yields the defaults
    pub fn load(&self) -> Result<GridSettings, ConfigError> {
        if !self.path.exists() {
            log::debug!(
                "no config at {}, using default settings",
                self.path.display()
            );
            return Ok(GridSettings::default());
        }

        let data = fs::read_to_string(&self.path).map_err(|source| ConfigError::ReadFile {
            path: self.path.clone(),
            source,
        })?;
        let settings = Self::parse(&data)?;

        log::info!("loaded settings from {}", self.path.display());
        Ok(settings)
    }

    /// Parse and validate TOML settings
    pub fn parse(data: &str) -> Result<GridSettings, ConfigError> {
        let settings: GridSettings = toml::from_str(data)?;
        settings.validate().map_err(ConfigError::Invalid)?;
        Ok(settings)
    }
}
