//! # survey-config
//!
//! Layered configuration loading for the survey platform using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SURVEY_*` prefix, `__` as separator)
//! 2. Project-level `survey.toml` in the working directory
//! 3. User-level `~/.config/survey-platform/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SURVEY_SERVER__PORT` -> `server.port`,
//! `SURVEY_STORAGE__DATA_FILE` -> `storage.data_file`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use survey_config::SurveyConfig;
//!
//! let config = SurveyConfig::load_with_dotenv().expect("config");
//! println!("listening on {}", config.server.bind_addr());
//! ```

mod error;
mod rules;
mod server;
mod storage;

pub use error::ConfigError;
pub use rules::RulesConfig;
pub use server::ServerConfig;
pub use storage::StorageConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Name of the project-local config file.
pub const LOCAL_CONFIG_FILE: &str = "survey.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SurveyConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub survey: RulesConfig,
}

impl SurveyConfig {
    /// Load configuration from all sources and validate it.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load `.env` from the working directory, then [`Self::load`].
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`]. A missing `.env` is not an error.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("SURVEY_").split("__"))
    }

    /// Reject values the service cannot run with.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.survey.max_questions == 0 {
            return Err(ConfigError::InvalidValue {
                field: "survey.max_questions".into(),
                reason: "must be at least 1".into(),
            });
        }
        if self.storage.data_file.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "storage.data_file".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("survey-platform").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = SurveyConfig::default();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.storage.data_file, PathBuf::from("survey_app.json"));
        assert_eq!(config.survey.max_questions, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_max_questions_is_rejected() {
        let mut config = SurveyConfig::default();
        config.survey.max_questions = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("survey.max_questions"));
    }

    #[test]
    fn empty_data_file_is_rejected() {
        let mut config = SurveyConfig::default();
        config.storage.data_file = PathBuf::new();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "storage.data_file"
        ));
    }
}
