//! Core domain types shared across modules

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::common::errors::TradingError;

/// A company signal: a ticker symbol paired with a sentiment score.
///
/// The name is informational only and never affects the trading decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    /// Exchange ticker symbol, e.g. "GM"
    pub ticker: String,
    /// Human-readable company name
    #[serde(default)]
    pub name: String,
    /// Signed sentiment score; sign determines trade direction
    pub sentiment: f64,
}

/// Current session state of the exchange, as reported by the market clock.
///
/// Fetched once per orchestration run and discarded afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketStatus {
    Pre,
    Open,
    After,
    #[serde(rename = "close")]
    Closed,
}

impl MarketStatus {
    /// Whether new positions may be opened in this session state.
    ///
    /// Only pre-market and regular hours are tradable; there is no strategy
    /// for after-hours or closed markets.
    pub fn is_tradable(self) -> bool {
        matches!(self, MarketStatus::Pre | MarketStatus::Open)
    }
}

impl FromStr for MarketStatus {
    type Err = TradingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pre" => Ok(MarketStatus::Pre),
            "open" => Ok(MarketStatus::Open),
            "after" => Ok(MarketStatus::After),
            "close" => Ok(MarketStatus::Closed),
            other => Err(TradingError::UnknownMarketStatus(other.to_string())),
        }
    }
}

impl std::fmt::Display for MarketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MarketStatus::Pre => write!(f, "pre"),
            MarketStatus::Open => write!(f, "open"),
            MarketStatus::After => write!(f, "after"),
            MarketStatus::Closed => write!(f, "close"),
        }
    }
}

/// What to do with a company this run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeAction {
    /// Take no position
    Hold,
    /// Buy now, sell at market close
    Bull,
    /// Sell short now, buy to cover at market close
    Bear,
}

/// Machine-checkable reason backing a strategy decision.
///
/// Exactly one reason accompanies each action; for Hold the reason is the
/// whole audit trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionReason {
    Blacklisted,
    MarketClosed,
    NeutralSentiment,
    PositiveSentiment,
    NegativeSentiment,
}

impl std::fmt::Display for DecisionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecisionReason::Blacklisted => write!(f, "blacklist"),
            DecisionReason::MarketClosed => write!(f, "market closed"),
            DecisionReason::NeutralSentiment => write!(f, "neutral sentiment"),
            DecisionReason::PositiveSentiment => write!(f, "positive sentiment"),
            DecisionReason::NegativeSentiment => write!(f, "negative sentiment"),
        }
    }
}

/// Immutable output of the strategy selector for one company
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyDecision {
    pub ticker: String,
    pub action: TradeAction,
    pub reason: DecisionReason,
}

impl StrategyDecision {
    /// True when the decision opens a position (bull or bear)
    pub fn is_actionable(&self) -> bool {
        self.action != TradeAction::Hold
    }
}
