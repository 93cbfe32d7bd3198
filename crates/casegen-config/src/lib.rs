//! # casegen-config
//!
//! Layered configuration loading for casegen using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CASEGEN_*` prefix, `__` as separator)
//! 2. Legacy environment variables `DEFAULT_AI_PROVIDER` and `OPENAI_API_KEY`
//! 3. Project-level `.casegen/config.toml`
//! 4. User-level `~/.config/casegen/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `CASEGEN_OPENAI__MODEL` -> `openai.model`,
//! `CASEGEN_GENERAL__DEFAULT_PROVIDER` -> `general.default_provider`, etc.
//! `DEFAULT_AI_PROVIDER` maps to `general.default_provider` and
//! `OPENAI_API_KEY` to `openai.api_key`.
//!
//! # Usage
//!
//! ```no_run
//! use casegen_config::CaseGenConfig;
//!
//! let config = CaseGenConfig::load_with_dotenv().expect("config");
//! if config.openai.is_configured() {
//!     println!("remote model: {}", config.openai.model);
//! }
//! ```

mod error;
mod general;
mod openai;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use openai::OpenAiConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Variable that selects the default provider when `--provider` is absent.
pub const PROVIDER_ENV_VAR: &str = "DEFAULT_AI_PROVIDER";

/// Variable that supplies the remote provider credential.
pub const API_KEY_ENV_VAR: &str = "OPENAI_API_KEY";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CaseGenConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub openai: OpenAiConfig,
}

impl CaseGenConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does not read `.env`; see [`load_with_dotenv`](Self::load_with_dotenv).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or a value is
    /// out of range.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load `.env` (searched from the working directory upwards), then
    /// [`load`](Self::load). A missing `.env` is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Dotenv`] if a `.env` file exists but cannot be
    /// read or parsed, and anything [`load`](Self::load) returns.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(error) if error.not_found() => {}
            Err(error) => return Err(ConfigError::Dotenv(error)),
        }
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or layer extra
    /// providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".casegen/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment
            .merge(Self::legacy_env())
            .merge(Env::prefixed("CASEGEN_").split("__"))
    }

    /// Reject values no request could succeed with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.openai.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "openai.timeout_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        if !(0.0..=2.0).contains(&self.openai.temperature) {
            return Err(ConfigError::InvalidValue {
                field: "openai.temperature".into(),
                reason: format!("{} is outside 0.0..=2.0", self.openai.temperature),
            });
        }
        Ok(())
    }

    /// Unprefixed variables kept for compatibility with existing setups.
    fn legacy_env() -> Env {
        Env::raw()
            .only(&[PROVIDER_ENV_VAR, API_KEY_ENV_VAR])
            .map(|key| {
                if key.as_str().eq_ignore_ascii_case(API_KEY_ENV_VAR) {
                    "openai.api_key".into()
                } else {
                    "general.default_provider".into()
                }
            })
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("casegen").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = CaseGenConfig::default();
        assert!(!config.openai.is_configured());
        assert_eq!(config.general.default_provider, "local");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut config = CaseGenConfig::default();
        config.openai.timeout_secs = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("openai.timeout_secs"));
    }

    #[test]
    fn temperature_out_of_range_is_rejected() {
        let mut config = CaseGenConfig::default();
        config.openai.temperature = 3.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "openai.temperature"
        ));
    }
}
