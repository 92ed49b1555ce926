//! Shared types, errors, and the broker gateway contract

pub mod errors;
pub mod traits;
pub mod types;
