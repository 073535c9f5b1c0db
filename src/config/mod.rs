use crate::error::AppError;
use dotenvy::dotenv;
use secrecy::Secret;
use serde::Deserialize;
use std::env;

#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub service_name: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Deserialize, Clone, Debug)]
pub struct DatabaseConfig {
    /// Connection string. `None` leaves the store unconfigured: the process
    /// still serves requests and `/test` reports the missing configuration.
    pub url: Option<Secret<String>>,
    pub db_name: Option<String>,
}

impl DatabaseConfig {
    /// Database name, falling back to the default when `DATABASE_NAME` is unset.
    pub fn db_name_or_default(&self) -> &str {
        self.db_name.as_deref().unwrap_or("communityday")
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenv().ok();

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse()
            .map_err(|e| AppError::ConfigError(anyhow::anyhow!("invalid PORT value: {}", e)))?;

        let db_url = env::var("DATABASE_URL").ok();
        let db_name = env::var("DATABASE_NAME").ok();

        Ok(Self {
            server: ServerConfig { host, port },
            database: DatabaseConfig {
                url: db_url.map(Secret::new),
                db_name,
            },
            service_name: "conference-service".to_string(),
        })
    }
}
