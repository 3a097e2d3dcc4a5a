//! Database configuration.

use serde::{Deserialize, Serialize};

/// Which snapshot store backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseProvider {
    /// PostgreSQL via sqlx.
    #[default]
    Postgres,
    /// Process-local store; contents are lost on restart.
    Memory,
}

/// Database connection pool configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Store backend.
    #[serde(default)]
    pub provider: DatabaseProvider,
    /// Database host (`DB_HOST`).
    #[serde(default = "default_host")]
    pub host: String,
    /// Database port (`DB_PORT`).
    #[serde(default = "default_port")]
    pub port: u16,
    /// Database name (`DB_DATABASE`).
    #[serde(default = "default_database")]
    pub database: String,
    /// Login user (`DB_USERNAME`).
    #[serde(default = "default_username")]
    pub username: String,
    /// Login password (`DB_PASSWORD`).
    #[serde(default = "default_password")]
    pub password: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Connection acquire timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
    /// Idle connection timeout in seconds.
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_seconds: u64,
    /// How many times startup schema initialization is attempted.
    #[serde(default = "default_init_max_attempts")]
    pub init_max_attempts: u32,
    /// Fixed delay between schema initialization attempts, in seconds.
    #[serde(default = "default_init_retry_delay")]
    pub init_retry_delay_seconds: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            provider: DatabaseProvider::default(),
            host: default_host(),
            port: default_port(),
            database: default_database(),
            username: default_username(),
            password: default_password(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_seconds: default_connect_timeout(),
            idle_timeout_seconds: default_idle_timeout(),
            init_max_attempts: default_init_max_attempts(),
            init_retry_delay_seconds: default_init_retry_delay(),
        }
    }
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    6549
}

fn default_database() -> String {
    "code_tracker".to_string()
}

fn default_username() -> String {
    "root".to_string()
}

fn default_password() -> String {
    "root_password".to_string()
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_idle_timeout() -> u64 {
    300
}

fn default_init_max_attempts() -> u32 {
    10
}

fn default_init_retry_delay() -> u64 {
    3
}
