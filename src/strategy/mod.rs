//! Strategy selection and position sizing
//!
//! Both halves of this module are pure: `selector` maps a company signal and
//! the current market status to a decision, and `sizing` turns balance and
//! price into budget and share quantity. All broker I/O happens in the
//! orchestrator, which composes these functions with gateway calls.

pub mod selector;
pub mod sizing;

pub use selector::select;
pub use sizing::{budget_per, shares_within};
