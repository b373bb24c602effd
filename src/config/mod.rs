//! Configuration module for the SkillBridge backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::errors::AppError;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Pause before the assistant replies
    pub chat_delay: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let db_path = env::var("SKILLBRIDGE_DB_PATH")
            .unwrap_or_else(|_| "./data/skillbridge.sqlite".to_string())
            .into();

        let bind_addr = env::var("SKILLBRIDGE_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .map_err(|e| AppError::BadRequest(format!("Invalid SKILLBRIDGE_BIND_ADDR: {}", e)))?;

        let log_level = env::var("SKILLBRIDGE_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let chat_delay_ms: u64 = env::var("SKILLBRIDGE_CHAT_DELAY_MS")
            .unwrap_or_else(|_| "1500".to_string())
            .parse()
            .map_err(|e| {
                AppError::BadRequest(format!("Invalid SKILLBRIDGE_CHAT_DELAY_MS: {}", e))
            })?;

        Ok(Self {
            db_path,
            bind_addr,
            log_level,
            chat_delay: Duration::from_millis(chat_delay_ms),
        })
    }
}
