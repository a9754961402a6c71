use std::time::Duration;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbConn, DbErr};

/// Configuration for the application database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub idle_timeout: Duration,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 100,
            min_connections: 10,
            connect_timeout: Duration::from_secs(10),
            idle_timeout: Duration::from_secs(300),
        }
    }

    /// Each connection to an in-memory SQLite database opens a separate,
    /// empty database, so the pool must hold exactly one.
    pub fn is_in_memory(&self) -> bool {
        self.url.starts_with("sqlite::memory:") || self.url.contains("mode=memory")
    }

    fn connect_options(&self) -> ConnectOptions {
        let (max, min) = if self.is_in_memory() {
            (1, 1)
        } else {
            (self.max_connections, self.min_connections.min(self.max_connections))
        };

        ConnectOptions::new(&self.url)
            .max_connections(max)
            .min_connections(min)
            .connect_timeout(self.connect_timeout)
            .idle_timeout(self.idle_timeout)
            .sqlx_logging(false)
            .to_owned()
    }
}

/// Open the connection pool described by `config`.
pub async fn connect(config: &DatabaseConfig) -> Result<DbConn, DbErr> {
    tracing::info!("Initializing database connection...");

    let options = config.connect_options();
    let max = options.get_max_connections();
    let conn = Database::connect(options).await?;

    tracing::info!(pool = ?max, backend = ?conn.get_database_backend(), "Database connected");
    Ok(conn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_sqlite_uses_single_connection() {
        let config = DatabaseConfig::new("sqlite::memory:");
        let options = config.connect_options();

        assert!(config.is_in_memory());
        assert_eq!(options.get_max_connections(), Some(1));
        assert_eq!(options.get_min_connections(), Some(1));
    }

    #[test]
    fn min_connections_never_exceed_max() {
        let mut config = DatabaseConfig::new("postgres://localhost/buffer");
        config.max_connections = 5;
        config.min_connections = 20;

        let options = config.connect_options();

        assert!(!config.is_in_memory());
        assert_eq!(options.get_max_connections(), Some(5));
        assert_eq!(options.get_min_connections(), Some(5));
    }
}
