//! Error types for the application

use thiserror::Error;

/// Result type alias using our TradingError
pub type Result<T> = std::result::Result<T, TradingError>;

/// Main error type for trading operations
///
/// Transport failures, malformed broker payloads, and business-rule
/// rejections are distinct variants so call sites can tell "the wire broke"
/// apart from "the broker said no".
#[derive(Error, Debug)]
pub enum TradingError {
    /// HTTP request errors
    #[error("HTTP request error: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// A response arrived but did not have the expected shape
    #[error("Malformed API response: {0}")]
    MalformedResponse(String),

    /// Market clock returned a status outside the known set
    #[error("Unknown market status: {0}")]
    UnknownMarketStatus(String),

    /// Quote endpoint had no usable last trade price for a ticker
    #[error("No price available for {ticker}: {reason}")]
    PriceUnavailable { ticker: String, reason: String },

    /// Order was submitted but the broker did not confirm it
    #[error("Order rejected by broker: {0}")]
    OrderRejected(String),

    /// Authentication/signing errors
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}
