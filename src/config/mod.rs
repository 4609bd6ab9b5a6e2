//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Values are read with the `VITALPAL`
//! prefix and `__` (double underscore) as the nesting separator.
//!
//! # Example
//!
//! ```no_run
//! use vitalpal_core::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod auth;
mod error;
mod features;
mod flow;
mod storage;
pub mod telemetry;

pub use auth::AuthConfig;
pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use flow::FlowConfig;
pub use storage::StorageConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Flag store configuration
    #[serde(default)]
    pub storage: StorageConfig,

    /// Flow controller tuning
    #[serde(default)]
    pub flow: FlowConfig,

    /// Identity provider settings
    #[serde(default)]
    pub auth: AuthConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads a `.env` file if present (development), then reads
    /// environment variables with the `VITALPAL` prefix:
    ///
    /// - `VITALPAL__STORAGE__DATA_DIR=/var/lib/vitalpal`
    /// - `VITALPAL__FLOW__RESOLVE_TIMEOUT_SECS=5`
    /// - `VITALPAL__FEATURES__ONBOARDING_SKIP=true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into the expected
    /// types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("VITALPAL")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Validate all configuration sections
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.storage.validate()?;
        self.flow.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn deserializes_nested_sections() {
        let json = r#"{
            "storage": { "data_dir": "/tmp/vitalpal" },
            "flow": { "resolve_timeout_secs": 5 },
            "features": { "onboarding_skip": true }
        }"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.flow.resolve_timeout_secs, 5);
        assert!(config.features.onboarding_skip);
        assert!(config.validate().is_ok());
    }
}
