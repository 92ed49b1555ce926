//! Broker gateway contract
//!
//! The orchestrator talks to the brokerage exclusively through this trait so
//! tests can substitute a mock and never touch the network.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::common::errors::Result;
use crate::common::types::MarketStatus;
use crate::tradeking::fixml::Order;

/// Synchronous request/response surface the trading core needs from the
/// brokerage. Every call is a single blocking round trip; no retries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Broker: Send + Sync {
    /// Current market session status from the broker's clock endpoint
    async fn market_status(&self) -> Result<MarketStatus>;

    /// Cash available to spend: cash balance minus uncleared deposits.
    ///
    /// Malformed balance payloads yield 0.0 (logged by the implementation)
    /// rather than an error; transport failures propagate.
    async fn account_balance(&self) -> Result<Decimal>;

    /// Last traded price for a ticker; errors when the quote is missing,
    /// non-numeric, zero, or negative.
    async fn last_price(&self, ticker: &str) -> Result<Decimal>;

    /// Submit one order leg and verify the broker's execution result.
    ///
    /// Single attempt, never resubmitted: a duplicate market order risks
    /// duplicate execution.
    async fn submit_order(&self, order: &Order) -> Result<()>;
}

/// Boxed broker for dynamic dispatch
pub type BoxedBroker = Box<dyn Broker>;
