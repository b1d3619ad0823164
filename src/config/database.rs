//! Grade store connection configuration.

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

const DEFAULT_MAX_CONNECTIONS: u32 = 10;
// Bounded selection timeout for the startup connect and ping.
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;

/// PostgreSQL connection settings for the grade store.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Connection URL, `postgres://` or `postgresql://`.
    pub url: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,

    /// Apply pending migrations at startup.
    #[serde(default)]
    pub run_migrations: bool,
}

impl DatabaseConfig {
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.url.is_empty() {
            return Err(ValidationError::MissingRequired("DATABASE_URL"));
        }
        if !self.url.starts_with("postgres://") && !self.url.starts_with("postgresql://") {
            return Err(ValidationError::InvalidDatabaseUrl);
        }
        if self.max_connections == 0 {
            return Err(ValidationError::InvalidPoolSize);
        }
        Ok(())
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            acquire_timeout_secs: default_acquire_timeout(),
            run_migrations: false,
        }
    }
}

fn default_max_connections() -> u32 {
    DEFAULT_MAX_CONNECTIONS
}

fn default_acquire_timeout() -> u64 {
    DEFAULT_ACQUIRE_TIMEOUT_SECS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_url(url: &str) -> DatabaseConfig {
        DatabaseConfig {
            url: url.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn default_timeout_is_five_seconds() {
        let config = DatabaseConfig::default();
        assert_eq!(config.acquire_timeout(), Duration::from_secs(5));
        assert_eq!(config.max_connections, 10);
        assert!(!config.run_migrations);
    }

    #[test]
    fn url_is_required_and_must_be_postgres() {
        assert!(matches!(
            with_url("").validate(),
            Err(ValidationError::MissingRequired("DATABASE_URL"))
        ));
        assert!(matches!(
            with_url("mysql://localhost/students").validate(),
            Err(ValidationError::InvalidDatabaseUrl)
        ));
        assert!(with_url("postgresql://localhost/students").validate().is_ok());
    }

    #[test]
    fn zero_pool_size_is_rejected() {
        let config = DatabaseConfig {
            max_connections: 0,
            ..with_url("postgres://localhost/students")
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidPoolSize)
        ));
    }
}
