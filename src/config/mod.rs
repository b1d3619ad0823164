//! Environment-driven application configuration.
//!
//! Settings come from environment variables with the `STUDY_MENTOR` prefix
//! and `__` as the nesting separator, with a `.env` file honored in
//! development. Every section carries its own defaults and `validate()`.
//!
//! ```no_run
//! use study_mentor::config::AppConfig;
//!
//! let config = AppConfig::load().expect("failed to load configuration");
//! config.validate().expect("invalid configuration");
//! println!("listening on {}", config.server.socket_addr());
//! ```

mod ai;
mod database;
mod error;
mod server;

pub use ai::AiConfig;
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use server::ServerConfig;

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    pub database: DatabaseConfig,

    #[serde(default)]
    pub ai: AiConfig,
}

impl AppConfig {
    /// Loads configuration from the environment.
    ///
    /// - `STUDY_MENTOR__SERVER__PORT=8080` -> `server.port`
    /// - `STUDY_MENTOR__DATABASE__URL=postgres://...` -> `database.url`
    /// - `STUDY_MENTOR__AI__GROQ_API_KEY=gsk-...` -> `ai.groq_api_key`
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("STUDY_MENTOR")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validates every section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.ai.validate()?;
        Ok(())
    }
}
