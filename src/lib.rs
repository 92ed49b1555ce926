//! sentiment-trader Library
//!
//! Decides directional intraday stock positions from per-company sentiment
//! scores and executes them through the TradeKing brokerage API as FIXML
//! market orders.

pub mod common;
pub mod config;
pub mod strategy;
pub mod tradeking;
pub mod trader;

// Re-export commonly used types
pub use common::errors::{Result, TradingError};
pub use common::traits::{BoxedBroker, Broker};
pub use common::types::{
    Company, DecisionReason, MarketStatus, StrategyDecision, TradeAction,
};
pub use config::types::{AppConfig, BrokerConfig, TradingConfig};
pub use tradeking::client::TradeKingClient;
pub use tradeking::fixml::{Order, OrderIntent, FIXML_NAMESPACE};
pub use trader::Trader;
