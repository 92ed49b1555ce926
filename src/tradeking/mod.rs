//! TradeKing brokerage integration: OAuth signing, FIXML order messages,
//! response envelopes, and the REST client implementing [`Broker`].
//!
//! [`Broker`]: crate::common::traits::Broker

pub mod auth;
pub mod client;
pub mod fixml;
pub mod messages;

pub use auth::OAuthCredentials;
pub use client::TradeKingClient;
pub use fixml::{Order, OrderIntent, FIXML_NAMESPACE};
