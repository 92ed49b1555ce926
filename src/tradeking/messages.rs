//! TradeKing API response envelopes
//!
//! Every endpoint wraps its payload in a top-level `response` object. All
//! fields are optional here; the client decides per endpoint whether a
//! missing field is a hard error or a logged fallback.

use serde::Deserialize;

/// Market clock: `{"response": {"status": {"current": "open"}}}`
#[derive(Debug, Clone, Deserialize)]
pub struct ClockEnvelope {
    pub response: Option<ClockResponse>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClockResponse {
    pub status: Option<ClockStatus>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClockStatus {
    pub current: Option<String>,
}

/// Account balances; monetary amounts arrive as numeric strings
#[derive(Debug, Clone, Deserialize)]
pub struct BalancesEnvelope {
    pub response: Option<BalancesResponse>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BalancesResponse {
    pub accountbalance: Option<AccountBalance>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AccountBalance {
    pub money: Option<Money>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Money {
    pub cash: Option<String>,
    pub uncleareddeposits: Option<String>,
}

/// Quote lookup; only `last` matters to the trading core
#[derive(Debug, Clone, Deserialize)]
pub struct QuotesEnvelope {
    pub response: Option<QuotesResponse>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuotesResponse {
    pub quotes: Option<Quotes>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Quotes {
    pub quote: Option<Quote>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Quote {
    pub last: Option<String>,
}

/// Order submission result; `error == "Success"` is the only success signal
#[derive(Debug, Clone, Deserialize)]
pub struct OrderEnvelope {
    pub response: Option<OrderResponse>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderResponse {
    pub error: Option<String>,
}
