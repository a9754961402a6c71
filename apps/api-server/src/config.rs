//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

use buffer_infra::DatabaseConfig;

const IN_MEMORY_DATABASE: &str = "sqlite::memory:";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
    /// Apply pending schema migrations before serving.
    pub run_migrations: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let url = env::var("DATABASE_URL").unwrap_or_else(|_| {
            tracing::warn!("DATABASE_URL not set. Using an in-memory SQLite database.");
            IN_MEMORY_DATABASE.to_string()
        });

        let mut database = DatabaseConfig::new(url);
        database.max_connections = parse_var("DB_MAX_CONNECTIONS", database.max_connections);
        database.min_connections = parse_var("DB_MIN_CONNECTIONS", database.min_connections);

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_var("PORT", 8080),
            database,
            run_migrations: env::var("RUN_MIGRATIONS")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
        }
    }
}

fn parse_var<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}
