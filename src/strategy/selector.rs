//! Strategy selection from sentiment and market status

use crate::common::types::{Company, DecisionReason, MarketStatus, StrategyDecision, TradeAction};
use crate::config::types::TradingConfig;

/// Decide what to do with one company.
///
/// Pure and deterministic: no network or clock access, every input path
/// yields a decision value. First match wins:
///
/// 1. blacklisted ticker        -> hold
/// 2. market not pre/open       -> hold
/// 3. sentiment == 0            -> hold
/// 4. sentiment > 0             -> bull
/// 5. sentiment < 0             -> bear
pub fn select(
    company: &Company,
    market_status: MarketStatus,
    config: &TradingConfig,
) -> StrategyDecision {
    let ticker = company.ticker.clone();

    if config.is_blacklisted(&company.ticker) {
        return StrategyDecision {
            ticker,
            action: TradeAction::Hold,
            reason: DecisionReason::Blacklisted,
        };
    }

    if !market_status.is_tradable() {
        return StrategyDecision {
            ticker,
            action: TradeAction::Hold,
            reason: DecisionReason::MarketClosed,
        };
    }

    if company.sentiment == 0.0 {
        return StrategyDecision {
            ticker,
            action: TradeAction::Hold,
            reason: DecisionReason::NeutralSentiment,
        };
    }

    if company.sentiment > 0.0 {
        StrategyDecision {
            ticker,
            action: TradeAction::Bull,
            reason: DecisionReason::PositiveSentiment,
        }
    } else {
        StrategyDecision {
            ticker,
            action: TradeAction::Bear,
            reason: DecisionReason::NegativeSentiment,
        }
    }
}
