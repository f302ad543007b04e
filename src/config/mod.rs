//! Application configuration module
//!
//! Configuration is loaded from environment variables (and an optional `.env`
//! file) using the `config` and `dotenvy` crates. Variables carry the
//! `USERS_API` prefix and nested values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use users_api::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Listening on {}", config.server.socket_addr());
//! ```

mod database;
mod error;
mod registration;
mod server;

pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use registration::RegistrationConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// PostgreSQL connection. When absent the in-memory store is used.
    #[serde(default)]
    pub database: Option<DatabaseConfig>,

    /// Registration rules (minimum age)
    #[serde(default)]
    pub registration: RegistrationConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Environment Variable Format
    ///
    /// - `USERS_API__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `USERS_API__DATABASE__URL=...` -> `database.url = ...`
    /// - `USERS_API__REGISTRATION__MIN_AGE=21` -> `registration.min_age = 21`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("USERS_API")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        if let Some(database) = &self.database {
            database.validate()?;
        }
        self.registration.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

/// Loads configuration with exactly `vars` set among the `USERS_API__*` variables.
///
/// Environment variables are process-global, so every config test goes through
/// this lock.
#[cfg(test)]
pub(crate) fn load_with_env(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
    use std::env;
    use std::sync::Mutex;

    static ENV_MUTEX: Mutex<()> = Mutex::new(());
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

    let clear = || {
        for (key, _) in env::vars().filter(|(key, _)| key.starts_with("USERS_API__")) {
            env::remove_var(key);
        }
    };

    clear();
    for (key, value) in vars {
        env::set_var(key, value);
    }
    let result = AppConfig::load();
    clear();
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_environment_runs_in_memory_with_defaults() {
        let config = load_with_env(&[]).unwrap();

        assert!(config.database.is_none());
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.registration.min_age, 18);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn database_section_is_validated_when_present() {
        let config = load_with_env(&[("USERS_API__DATABASE__URL", "redis://cache")]).unwrap();
        assert_eq!(config.validate(), Err(ValidationError::InvalidDatabaseUrl));
    }

    #[test]
    fn custom_min_age_is_loaded() {
        let config = load_with_env(&[("USERS_API__REGISTRATION__MIN_AGE", "21")]).unwrap();
        assert_eq!(config.registration.min_age, 21);
    }

    #[test]
    fn min_age_out_of_range_fails_validation() {
        let config = load_with_env(&[("USERS_API__REGISTRATION__MIN_AGE", "200")]).unwrap();
        assert_eq!(config.validate(), Err(ValidationError::MinAgeTooLarge));
    }

    #[test]
    fn production_environment_is_detected() {
        let config = load_with_env(&[("USERS_API__SERVER__ENVIRONMENT", "production")]).unwrap();
        assert!(config.is_production());
    }

    #[test]
    fn non_numeric_port_fails_to_load() {
        let result = load_with_env(&[("USERS_API__SERVER__PORT", "eighty")]);
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
