//! Application configuration schemas.
//!
//! Configuration is layered with the `config` crate: serde defaults,
//! optional TOML files, `CODETRACK__`-prefixed environment variables, and
//! finally the flat `DB_*` / `LOG_*` variables that deployments of this
//! service have always used.

pub mod app;
pub mod database;
pub mod logging;
pub mod snapshot;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::database::{DatabaseConfig, DatabaseProvider};
pub use self::logging::LoggingConfig;
pub use self::snapshot::SnapshotConfig;

use crate::error::AppError;

/// Flat environment variables and the config keys they override.
const LEGACY_ENV_OVERRIDES: &[(&str, &str)] = &[
    ("DB_HOST", "database.host"),
    ("DB_PORT", "database.port"),
    ("DB_DATABASE", "database.database"),
    ("DB_USERNAME", "database.username"),
    ("DB_PASSWORD", "database.password"),
    ("LOG_DIR", "logging.dir"),
    ("LOG_LEVEL", "logging.level"),
];

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Snapshot store settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Snapshot ingestion settings.
    #[serde(default)]
    pub snapshots: SnapshotConfig,
}

impl AppConfig {
    /// Load configuration for the named environment from files and the
    /// process environment.
    pub fn load(env: &str) -> Result<Self, AppError> {
        Self::load_with(env, |key| std::env::var(key).ok())
    }

    /// Like [`AppConfig::load`], but resolves the flat `DB_*` / `LOG_*`
    /// variables through `lookup`.
    pub fn load_with<F>(env: &str, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = ::config::Config::builder()
            .add_source(::config::File::with_name("config/default").required(false))
            .add_source(::config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                ::config::Environment::with_prefix("CODETRACK")
                    .separator("__")
                    .try_parsing(true),
            );

        for (var, key) in LEGACY_ENV_OVERRIDES {
            builder = builder.set_override_option(*key, lookup(var).filter(|v| !v.is_empty()))?;
        }

        let config = builder
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
