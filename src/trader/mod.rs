//! Trade orchestration: selector -> sizing -> order legs -> verification
//!
//! Everything here is strictly sequential. The shared budget needs a
//! consistent count of actionable strategies before any order is placed, and
//! a closing leg must never be submitted before its opening leg is accepted,
//! so there is no fan-out across companies or legs.

use rust_decimal::Decimal;
use tracing::{debug, error, warn};

use crate::common::errors::Result;
use crate::common::traits::Broker;
use crate::common::types::{Company, StrategyDecision, TradeAction};
use crate::config::types::TradingConfig;
use crate::strategy::{budget_per, select, shares_within};
use crate::tradeking::fixml::{Order, OrderIntent};

/// Drives one orchestration run over a set of company signals.
pub struct Trader<B: Broker> {
    broker: B,
    config: TradingConfig,
}

impl<B: Broker> Trader<B> {
    pub fn new(broker: B, config: TradingConfig) -> Self {
        Self { broker, config }
    }

    /// Execute trades for the given companies based on sentiment.
    ///
    /// Returns `Ok(true)` only when every actionable strategy executed both
    /// of its legs successfully. Run-level preconditions (no actionable
    /// strategies, zero budget) short-circuit with `Ok(false)`; transport
    /// failure fetching the market status or balance aborts with `Err`.
    pub async fn make_trades(&self, companies: &[Company]) -> Result<bool> {
        let market_status = match self.broker.market_status().await {
            Ok(status) => status,
            Err(e) => {
                error!(%e, "not trading without market status");
                return Err(e);
            }
        };

        // Filter for any strategies resulting in trades.
        let mut actionable: Vec<StrategyDecision> = Vec::new();
        for company in companies {
            let decision = select(company, market_status, &self.config);
            if decision.is_actionable() {
                actionable.push(decision);
            } else {
                warn!(ticker = %decision.ticker, reason = %decision.reason, "dropping strategy");
            }
        }

        if actionable.is_empty() {
            warn!("no actionable strategies for trading");
            return Ok(false);
        }

        let balance = self.broker.account_balance().await?;
        let budget = budget_per(balance, actionable.len(), self.config.cash_hold);

        if budget <= Decimal::ZERO {
            warn!(%balance, strategies = actionable.len(), "no budget for trading");
            return Ok(false);
        }

        debug!(strategies = actionable.len(), %budget, "using budget per strategy");

        // Partial-failure semantics: one bad symbol does not block the rest.
        let mut success = true;
        for decision in &actionable {
            success &= self.execute(decision, budget).await;
        }

        Ok(success)
    }

    /// Run the two legs of one strategy; false on any failure.
    async fn execute(&self, decision: &StrategyDecision, budget: Decimal) -> bool {
        let (open, close) = match decision.action {
            TradeAction::Bull => (OrderIntent::BuyNow, OrderIntent::SellAtClose),
            TradeAction::Bear => (OrderIntent::ShortNow, OrderIntent::CoverAtClose),
            TradeAction::Hold => {
                error!(ticker = %decision.ticker, "hold strategy reached execution");
                return false;
            }
        };

        debug!(ticker = %decision.ticker, action = ?decision.action, %budget, "executing strategy");

        let Some(quantity) = self.quantity_for(&decision.ticker, budget).await else {
            warn!(ticker = %decision.ticker, "not trading without quantity");
            return false;
        };

        // Hard stop on first-leg failure: the closing leg only makes sense
        // once the opening leg is accepted.
        if let Err(e) = self
            .broker
            .submit_order(&Order::new(open, &decision.ticker, quantity))
            .await
        {
            error!(ticker = %decision.ticker, %open, %e, "opening leg failed");
            return false;
        }

        if let Err(e) = self
            .broker
            .submit_order(&Order::new(close, &decision.ticker, quantity))
            .await
        {
            // The position stays open; accepted risk, no rollback.
            error!(ticker = %decision.ticker, %close, %e, "closing leg failed");
            return false;
        }

        true
    }

    /// Share quantity for a ticker within the budget, via a live price lookup
    async fn quantity_for(&self, ticker: &str, budget: Decimal) -> Option<u64> {
        let price = match self.broker.last_price(ticker).await {
            Ok(price) => price,
            Err(e) => {
                error!(%ticker, %e, "failed to determine price");
                return None;
            }
        };

        shares_within(budget, price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::errors::TradingError;
    use crate::common::traits::MockBroker;
    use crate::common::types::MarketStatus;
    use mockall::predicate::eq;
    use mockall::Sequence;
    use rust_decimal_macros::dec;

    fn company(ticker: &str, sentiment: f64) -> Company {
        Company {
            ticker: ticker.to_string(),
            name: String::new(),
            sentiment,
        }
    }

    fn trader(broker: MockBroker) -> Trader<MockBroker> {
        Trader::new(broker, TradingConfig::default())
    }

    #[tokio::test]
    async fn neutral_sentiment_aborts_before_any_balance_or_order_call() {
        let mut broker = MockBroker::new();
        broker
            .expect_market_status()
            .times(1)
            .returning(|| Ok(MarketStatus::Open));
        broker.expect_account_balance().times(0);
        broker.expect_last_price().times(0);
        broker.expect_submit_order().times(0);

        let result = trader(broker).make_trades(&[company("BA", 0.0)]).await;
        assert!(matches!(result, Ok(false)));
    }

    #[tokio::test]
    async fn missing_market_status_aborts_the_run() {
        let mut broker = MockBroker::new();
        broker
            .expect_market_status()
            .times(1)
            .returning(|| Err(TradingError::MalformedResponse("no clock".into())));
        broker.expect_account_balance().times(0);

        let result = trader(broker).make_trades(&[company("F", 0.5)]).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn balance_below_cash_hold_aborts_before_any_price_lookup() {
        let mut broker = MockBroker::new();
        broker
            .expect_market_status()
            .returning(|| Ok(MarketStatus::Open));
        broker
            .expect_account_balance()
            .times(1)
            .returning(|| Ok(dec!(500.0)));
        broker.expect_last_price().times(0);
        broker.expect_submit_order().times(0);

        let result = trader(broker).make_trades(&[company("F", 0.5)]).await;
        assert!(matches!(result, Ok(false)));
    }

    #[tokio::test]
    async fn bull_strategy_submits_buy_then_sell_at_close() {
        let mut broker = MockBroker::new();
        let mut seq = Sequence::new();
        broker
            .expect_market_status()
            .returning(|| Ok(MarketStatus::Open));
        broker
            .expect_account_balance()
            .returning(|| Ok(dec!(11000.0)));
        broker
            .expect_last_price()
            .with(eq("F"))
            .times(1)
            .returning(|_| Ok(dec!(100.0)));
        broker
            .expect_submit_order()
            .withf(|o| o.intent == OrderIntent::BuyNow && o.ticker == "F" && o.quantity == 100)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        broker
            .expect_submit_order()
            .withf(|o| o.intent == OrderIntent::SellAtClose && o.ticker == "F" && o.quantity == 100)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let result = trader(broker).make_trades(&[company("F", 0.5)]).await;
        assert!(matches!(result, Ok(true)));
    }

    #[tokio::test]
    async fn bear_strategy_submits_short_then_cover_at_close() {
        let mut broker = MockBroker::new();
        let mut seq = Sequence::new();
        broker
            .expect_market_status()
            .returning(|| Ok(MarketStatus::Pre));
        broker
            .expect_account_balance()
            .returning(|| Ok(dec!(11000.0)));
        broker
            .expect_last_price()
            .with(eq("FCAU"))
            .times(1)
            .returning(|_| Ok(dec!(34.50)));
        broker
            .expect_submit_order()
            .withf(|o| o.intent == OrderIntent::ShortNow && o.quantity == 289)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        broker
            .expect_submit_order()
            .withf(|o| o.intent == OrderIntent::CoverAtClose && o.quantity == 289)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let result = trader(broker).make_trades(&[company("FCAU", -0.5)]).await;
        assert!(matches!(result, Ok(true)));
    }

    #[tokio::test]
    async fn first_leg_failure_suppresses_the_closing_leg() {
        let mut broker = MockBroker::new();
        broker
            .expect_market_status()
            .returning(|| Ok(MarketStatus::Open));
        broker
            .expect_account_balance()
            .returning(|| Ok(dec!(11000.0)));
        broker
            .expect_last_price()
            .returning(|_| Ok(dec!(100.0)));
        broker
            .expect_submit_order()
            .withf(|o| o.intent == OrderIntent::BuyNow)
            .times(1)
            .returning(|_| Err(TradingError::OrderRejected("Insufficient funds".into())));
        // No SellAtClose expectation: a second submit_order call would panic.

        let result = trader(broker).make_trades(&[company("F", 0.5)]).await;
        assert!(matches!(result, Ok(false)));
    }

    #[tokio::test]
    async fn unpriceable_ticker_fails_but_does_not_block_others() {
        let mut broker = MockBroker::new();
        broker
            .expect_market_status()
            .returning(|| Ok(MarketStatus::Open));
        broker
            .expect_account_balance()
            .returning(|| Ok(dec!(21000.0)));
        broker
            .expect_last_price()
            .with(eq("LMT"))
            .times(1)
            .returning(|t| {
                Err(TradingError::PriceUnavailable {
                    ticker: t.to_string(),
                    reason: "quote missing last field".into(),
                })
            });
        broker
            .expect_last_price()
            .with(eq("BA"))
            .times(1)
            .returning(|_| Ok(dec!(200.0)));
        // The second company still trades both legs.
        broker
            .expect_submit_order()
            .withf(|o| o.ticker == "BA")
            .times(2)
            .returning(|_| Ok(()));

        let result = trader(broker)
            .make_trades(&[company("LMT", -0.1), company("BA", 0.1)])
            .await;
        assert!(matches!(result, Ok(false)));
    }

    #[tokio::test]
    async fn budget_too_small_for_one_share_skips_the_strategy() {
        let mut broker = MockBroker::new();
        broker
            .expect_market_status()
            .returning(|| Ok(MarketStatus::Open));
        broker
            .expect_account_balance()
            .returning(|| Ok(dec!(1050.0)));
        broker
            .expect_last_price()
            .returning(|_| Ok(dec!(100.0)));
        broker.expect_submit_order().times(0);

        let result = trader(broker).make_trades(&[company("F", 0.5)]).await;
        assert!(matches!(result, Ok(false)));
    }

    #[tokio::test]
    async fn blacklisted_and_closed_market_companies_are_all_dropped() {
        let mut broker = MockBroker::new();
        broker
            .expect_market_status()
            .returning(|| Ok(MarketStatus::Closed));
        broker.expect_account_balance().times(0);
        broker.expect_submit_order().times(0);

        let companies = [company("GOOG", 0.4), company("GM", 0.5)];
        let result = trader(broker).make_trades(&companies).await;
        assert!(matches!(result, Ok(false)));
    }
}
