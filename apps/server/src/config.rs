use std::{net::SocketAddr, time::Duration};

use anyhow::Context;

use crate::auth::decode_secret_key;

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:5000";
pub const DEFAULT_DB_PATH: &str = "./db/fintrack.db";

/// Settings for the outbound completion API.
#[derive(Clone, Debug)]
pub struct AiConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub jwt_secret: Vec<u8>,
    pub token_ttl: Duration,
    pub ai: AiConfig,
    pub dev_errors: bool,
}

impl Config {
    /// Loads `.env` (if present) and reads the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let listen_addr: SocketAddr = var("FT_LISTEN_ADDR")
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string())
            .parse()
            .context("Invalid FT_LISTEN_ADDR")?;
        let db_path = var("FT_DB_PATH").unwrap_or_else(|| DEFAULT_DB_PATH.into());
        let cors_allow = var("FT_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = var("FT_REQUEST_TIMEOUT_MS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(30_000);

        let raw_secret = var("FT_JWT_SECRET").context("FT_JWT_SECRET must be set")?;
        let jwt_secret = decode_secret_key(&raw_secret)?;
        let ttl_days: u64 = var("FT_TOKEN_TTL_DAYS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(7);

        let ai = AiConfig {
            api_key: var("FT_AI_API_KEY"),
            base_url: var("FT_AI_BASE_URL")
                .unwrap_or_else(|| fintrack_ai::DEFAULT_BASE_URL.to_string()),
            model: var("FT_AI_MODEL").unwrap_or_else(|| fintrack_ai::DEFAULT_MODEL.to_string()),
            timeout: Duration::from_millis(timeout_ms),
        };

        let dev_errors = var("FT_DEV_ERRORS")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            jwt_secret,
            token_ttl: Duration::from_secs(ttl_days * 24 * 60 * 60),
            ai,
            dev_errors,
        })
    }
}
