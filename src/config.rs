// SPDX-License-Identifier: MIT

//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the SQLite database file
    pub database_path: PathBuf,
    /// Frontend URL allowed for CORS
    pub frontend_url: String,
    /// Server port
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every variable has a local-development default, so a bare
    /// `cargo run` works without a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            Err(_) => 8080,
        };

        Ok(Self {
            database_path: env::var("DATABASE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data/teamfit.sqlite")),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            port,
        })
    }

    /// Default config for tests.
    pub fn test_default() -> Self {
        Self {
            database_path: PathBuf::from(":memory:"),
            frontend_url: "http://localhost:5173".to_string(),
            port: 8080,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test: the PORT variable is process-global state.
    #[test]
    fn test_config_from_env() {
        env::remove_var("DATABASE_PATH");
        env::remove_var("FRONTEND_URL");

        env::set_var("PORT", "not-a-port");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid("PORT")));

        env::set_var("PORT", "9090");
        let config = Config::from_env().expect("Config should load");
        assert_eq!(config.port, 9090);
        assert_eq!(config.database_path, PathBuf::from("data/teamfit.sqlite"));

        env::remove_var("PORT");
        let config = Config::from_env().expect("Config should load");
        assert_eq!(config.port, 8080);
    }
}
