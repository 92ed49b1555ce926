//! Configuration loader

use config::{Config, Environment, File};
use std::path::Path;

use super::types::{AppConfig, BrokerConfig, TradingConfig};
use crate::common::errors::{Result, TradingError};

/// Load configuration from file and environment variables
///
/// Priority (highest to lowest):
/// 1. Environment variables (prefixed with APP_)
/// 2. Configuration file (TOML format)
/// 3. Default values
pub fn load_config(config_path: Option<&str>) -> Result<AppConfig> {
    let mut builder = Config::builder();

    if let Some(path) = config_path {
        if Path::new(path).exists() {
            builder = builder.add_source(File::with_name(path).required(false));
        }
    }

    builder = builder.add_source(
        Environment::with_prefix("APP")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder
        .build()
        .map_err(|e| TradingError::Configuration(e.to_string()))?;

    config
        .try_deserialize()
        .map_err(|e| TradingError::Configuration(e.to_string()))
}

/// Load configuration from the TRADEKING_* environment variables only.
///
/// Absence of any credential is a startup error, not a runtime branch.
pub fn load_from_env() -> Result<AppConfig> {
    // Try to load from .env file
    dotenvy::dotenv().ok();

    let broker = BrokerConfig {
        consumer_key: require_env("TRADEKING_CONSUMER_KEY")?,
        consumer_secret: require_env("TRADEKING_CONSUMER_SECRET")?,
        access_token: require_env("TRADEKING_ACCESS_TOKEN")?,
        access_token_secret: require_env("TRADEKING_ACCESS_TOKEN_SECRET")?,
        account: require_env("TRADEKING_ACCOUNT_NUMBER")?,
        api_url: std::env::var("TRADEKING_API_URL")
            .unwrap_or_else(|_| "https://api.tradeking.com/v1".to_string()),
    };

    // Real orders require explicit opt-in.
    let use_real_money = std::env::var("TRADEKING_USE_REAL_MONEY")
        .map(|v| v == "YES")
        .unwrap_or(false);

    Ok(AppConfig {
        broker,
        trading: TradingConfig {
            use_real_money,
            ..TradingConfig::default()
        },
    })
}

fn require_env(name: &str) -> Result<String> {
    std::env::var(name)
        .map_err(|_| TradingError::Configuration(format!("missing environment variable {}", name)))
}
