//! Position sizing: per-strategy budget and per-ticker share quantity

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::debug;

/// Budget shared equally across all actionable strategies in one run.
///
/// The cash hold is subtracted first and never allocated to trading. Returns
/// zero (a warning condition upstream, not an error) when there are no
/// strategies to fund. Rounded to cent precision.
pub fn budget_per(balance: Decimal, strategy_count: usize, cash_hold: Decimal) -> Decimal {
    if strategy_count == 0 {
        return Decimal::ZERO;
    }

    let investable = (balance - cash_hold).max(Decimal::ZERO);
    (investable / Decimal::from(strategy_count)).round_dp(2)
}

/// Maximum whole number of shares purchasable within a budget.
///
/// Returns `None` when the price is unusable (zero or negative) or the
/// budget does not cover even one share; callers treat `None` as "skip this
/// strategy", never as a zero-share order.
pub fn shares_within(budget: Decimal, price: Decimal) -> Option<u64> {
    if price <= Decimal::ZERO {
        return None;
    }

    let quantity = (budget / price).floor().to_u64()?;
    debug!(%budget, %price, quantity, "computed share quantity");

    if quantity == 0 {
        None
    } else {
        Some(quantity)
    }
}
