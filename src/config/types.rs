//! Configuration types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Brokerage connection and credentials
    pub broker: BrokerConfig,
    /// Trading policy (blacklist, cash hold, live flag)
    #[serde(default)]
    pub trading: TradingConfig,
}

/// TradeKing API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrokerConfig {
    /// OAuth consumer key
    pub consumer_key: String,
    /// OAuth consumer secret
    pub consumer_secret: String,
    /// OAuth access token
    pub access_token: String,
    /// OAuth access token secret
    pub access_token_secret: String,
    /// Brokerage account number
    pub account: String,
    /// Base URL for API requests
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

fn default_api_url() -> String {
    "https://api.tradeking.com/v1".to_string()
}

/// Trading policy configuration.
///
/// Passed into the orchestrator at construction so tests can substitute a
/// synthetic blacklist and a preview account without process-level state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradingConfig {
    /// Cash reserve never allocated to trading, in currency units
    #[serde(default = "default_cash_hold")]
    pub cash_hold: Decimal,
    /// Ticker symbols the operator must never trade, e.g. conflict-of-interest
    /// symbols
    #[serde(default = "default_blacklist")]
    pub blacklist: Vec<String>,
    /// When false, orders go to the preview endpoint and no money moves
    #[serde(default)]
    pub use_real_money: bool,
}

impl Default for TradingConfig {
    fn default() -> Self {
        Self {
            cash_hold: default_cash_hold(),
            blacklist: default_blacklist(),
            use_real_money: false,
        }
    }
}

fn default_cash_hold() -> Decimal {
    Decimal::from(1000)
}

fn default_blacklist() -> Vec<String> {
    vec!["GOOG".to_string(), "GOOGL".to_string()]
}

impl TradingConfig {
    /// Check whether a ticker is blacklisted
    pub fn is_blacklisted(&self, ticker: &str) -> bool {
        self.blacklist.iter().any(|t| t == ticker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn trading_defaults_match_policy() {
        let config = TradingConfig::default();
        assert_eq!(config.cash_hold, dec!(1000));
        assert!(config.is_blacklisted("GOOG"));
        assert!(config.is_blacklisted("GOOGL"));
        assert!(!config.is_blacklisted("GM"));
        assert!(!config.use_real_money);
    }
}
