//! Configuration module
//!
//! All settings are read from the environment with sensible defaults, so the
//! service runs out of the box and is tuned per deployment via env vars (or a
//! `.env` file loaded by the binary).

use std::env;
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_OUTPUT_DIR: &str = "outputs";
const DEFAULT_MAX_UPLOAD_MB: usize = 10;
const DEFAULT_CONVERSION_TIMEOUT_SECS: u64 = 60;
const DEFAULT_MAX_CONCURRENT_CONVERSIONS: usize = 4;
const DEFAULT_HTTP_CONCURRENCY_LIMIT: usize = 64;

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    /// Scratch directory for staged uploads.
    pub upload_dir: PathBuf,
    /// Scratch directory for conversion outputs in transit.
    pub output_dir: PathBuf,
    /// Maximum accepted request body size in bytes.
    pub max_upload_bytes: usize,
    /// Wall-clock budget for a single conversion call.
    pub conversion_timeout_secs: u64,
    /// Permits for concurrently running conversion calls.
    pub max_concurrent_conversions: usize,
    /// Upper bound on in-flight HTTP requests.
    pub http_concurrency_limit: usize,
    pub cors_origins: Vec<String>,
    pub environment: String,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let max_upload_mb = env::var("MAX_UPLOAD_SIZE_MB")
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(DEFAULT_MAX_UPLOAD_MB);

        let cors_origins_str = env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string());
        let cors_origins = cors_origins_str
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Config {
            server_port: env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            upload_dir: env::var("UPLOAD_DIR")
                .unwrap_or_else(|_| DEFAULT_UPLOAD_DIR.to_string())
                .into(),
            output_dir: env::var("OUTPUT_DIR")
                .unwrap_or_else(|_| DEFAULT_OUTPUT_DIR.to_string())
                .into(),
            max_upload_bytes: max_upload_mb * 1024 * 1024,
            conversion_timeout_secs: env::var("CONVERSION_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_CONVERSION_TIMEOUT_SECS),
            max_concurrent_conversions: env::var("MAX_CONCURRENT_CONVERSIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MAX_CONCURRENT_CONVERSIONS),
            http_concurrency_limit: env::var("HTTP_CONCURRENCY_LIMIT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_HTTP_CONCURRENCY_LIMIT),
            cors_origins,
            environment: env::var("ENVIRONMENT")
                .or_else(|_| env::var("APP_ENV"))
                .unwrap_or_else(|_| "development".to_string()),
        })
    }

    /// Fail fast on values that cannot produce a working service.
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.max_upload_bytes == 0 {
            anyhow::bail!("MAX_UPLOAD_SIZE_MB must be greater than zero");
        }
        if self.conversion_timeout_secs == 0 {
            anyhow::bail!("CONVERSION_TIMEOUT_SECS must be greater than zero");
        }
        if self.max_concurrent_conversions == 0 {
            anyhow::bail!("MAX_CONCURRENT_CONVERSIONS must be greater than zero");
        }
        if self.http_concurrency_limit == 0 {
            anyhow::bail!("HTTP_CONCURRENCY_LIMIT must be greater than zero");
        }
        if self.upload_dir == self.output_dir {
            anyhow::bail!("UPLOAD_DIR and OUTPUT_DIR must be distinct directories");
        }
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }
}
