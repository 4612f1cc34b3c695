/// Configuration management for Company Ranking Service
///
/// Loads configuration from environment variables.
use anyhow::{anyhow, Result};
use db_pool::env_utils::{parse_env_flag, parse_env_with_default};
use db_pool::DbConfig;

pub const SERVICE_NAME: &str = "company-ranking-service";

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// CORS configuration
    pub cors: CorsConfig,
    /// Database pool configuration
    pub database: DbConfig,
}

/// Application settings
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Application environment (development, staging, production)
    pub env: String,
    /// Server host to bind to
    pub host: String,
    /// HTTP port
    pub port: u16,
    /// Actix worker threads
    pub workers: usize,
    /// Apply bundled migrations at startup
    pub run_migrations: bool,
}

/// CORS configuration
#[derive(Debug, Clone)]
pub struct CorsConfig {
    /// Comma-separated list of allowed origins, `*` for any
    pub allowed_origins: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let app = AppConfig {
            env: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            host: std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_env_with_default::<u16>("PORT", 8090),
            workers: parse_env_with_default::<usize>("HTTP_WORKERS", 4).max(1),
            run_migrations: parse_env_flag("RUN_MIGRATIONS", false),
        };

        let cors = CorsConfig {
            allowed_origins: std::env::var("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "*".to_string()),
        };

        let database = DbConfig::from_env(SERVICE_NAME).map_err(|e| anyhow!(e))?;

        Ok(Config { app, cors, database })
    }

    pub fn http_bind_address(&self) -> String {
        format!("{}:{}", self.app.host, self.app.port)
    }
}
