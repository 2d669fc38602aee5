//! TOML configuration file parsing and loading
//!
//! An explicitly named config file must exist. Without one, the default file
//! under the user's config directory is loaded when present.

use crate::core::error_handling::ContextualError;
use crate::core::validation::{validate_log_format, validate_log_level, validate_slot_text};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Directory name under the platform config dir
pub const CONFIG_DIR_NAME: &str = "Buildversion";

/// Default config file name
pub const CONFIG_FILE_NAME: &str = "buildversion.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("The specified configuration file does not exist: {}", path.display())]
    Missing { path: PathBuf },

    #[error("Error reading configuration file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error parsing configuration file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Error in configuration file {}: {message}", path.display())]
    Invalid { path: PathBuf, message: String },
}

impl ContextualError for ConfigError {
    fn is_user_actionable(&self) -> bool {
        !matches!(self, ConfigError::Read { .. })
    }

    fn user_message(&self) -> Option<String> {
        self.is_user_actionable().then(|| self.to_string())
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// `[logging]` table
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: Option<String>,
    pub file: Option<PathBuf>,
    pub color: Option<bool>,
}

/// `[inject]` table
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InjectConfig {
    /// Value the slot is expected to hold before injection
    pub from: Option<String>,
    /// File holding the build number to inject
    pub value_file: Option<PathBuf>,
}

/// Whole configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub logging: LoggingConfig,
    pub inject: InjectConfig,
}

impl Config {
    /// Parse and validate config text; `origin` is only used in error messages
    pub fn parse(contents: &str, origin: &Path) -> ConfigResult<Self> {
        let mut config: Config = toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        config.normalize().map_err(|message| ConfigError::Invalid {
            path: origin.to_path_buf(),
            message,
        })?;
        Ok(config)
    }

    /// Load a config file that must exist
    pub fn load(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::Missing {
                path: path.to_path_buf(),
            });
        }
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&contents, path)?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load `explicit` if given, else the default file if it exists, else defaults
    pub fn discover(explicit: Option<&Path>) -> ConfigResult<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => match default_config_path() {
                Some(path) if path.exists() => Self::load(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    fn normalize(&mut self) -> Result<(), String> {
        if let Some(level) = &self.logging.level {
            self.logging.level = Some(validate_log_level(level)?);
        }
        if let Some(format) = &self.logging.format {
            validate_log_format(format)?;
        }
        if let Some(from) = &self.inject.from {
            validate_slot_text(from).map_err(|e| format!("inject.from: {}", e))?;
        }
        Ok(())
    }
}

/// `<config dir>/Buildversion/buildversion.toml`, when the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
