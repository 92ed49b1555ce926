//! REST client for the TradeKing brokerage API

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, instrument};

use super::auth::{authorization_header, OAuthCredentials};
use super::fixml::{Order, FIXML_CONTENT_TYPE};
use super::messages::*;
use crate::common::errors::{Result, TradingError};
use crate::common::traits::Broker;
use crate::common::types::MarketStatus;
use crate::config::types::BrokerConfig;

/// REST client for the TradeKing API
#[derive(Debug, Clone)]
pub struct TradeKingClient {
    /// HTTP client
    client: Client,
    /// Base URL for API requests, no trailing slash
    base_url: String,
    /// OAuth 1.0a credentials used to sign every request
    credentials: OAuthCredentials,
    /// Brokerage account number
    account: String,
    /// When false, orders go to the preview endpoint
    use_real_money: bool,
}

impl TradeKingClient {
    /// Create a new client from broker configuration
    pub fn new(config: &BrokerConfig, use_real_money: bool) -> Result<Self> {
        Self::with_timeout(config, use_real_money, Duration::from_secs(30))
    }

    /// Create a new client with a custom request timeout
    pub fn with_timeout(
        config: &BrokerConfig,
        use_real_money: bool,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TradingError::Internal(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            credentials: OAuthCredentials::new(
                config.consumer_key.clone(),
                config.consumer_secret.clone(),
                config.access_token.clone(),
                config.access_token_secret.clone(),
            ),
            account: config.account.clone(),
            use_real_money,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}.json", self.base_url, path)
    }

    /// URL for placing orders; preview unless real money is enabled
    pub fn order_url(&self) -> String {
        let mut path = format!("accounts/{}/orders", self.account);
        if !self.use_real_money {
            path.push_str("/preview");
        }
        self.url(&path)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let auth = authorization_header(&self.credentials, "GET", url)?;
        debug!(%url, "TradeKing request");

        let response = self.client.get(url).header(AUTHORIZATION, auth).send().await?;
        let body = response.text().await?;
        debug!(%body, "TradeKing response");

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl Broker for TradeKingClient {
    #[instrument(skip(self))]
    async fn market_status(&self) -> Result<MarketStatus> {
        let url = self.url("market/clock");
        let envelope: ClockEnvelope = self.get_json(&url).await?;

        let current = envelope
            .response
            .and_then(|r| r.status)
            .and_then(|s| s.current)
            .ok_or_else(|| {
                TradingError::MalformedResponse("clock response missing status.current".into())
            })?;

        let status: MarketStatus = current.parse()?;
        debug!(%status, "current market status");
        Ok(status)
    }

    #[instrument(skip(self))]
    async fn account_balance(&self) -> Result<Decimal> {
        let url = self.url(&format!("accounts/{}", self.account));
        let envelope: BalancesEnvelope = self.get_json(&url).await?;

        // Available balance is cash minus uncleared deposits. A malformed
        // payload yields zero so the run aborts at the budget check instead
        // of tearing down the whole orchestration.
        let money = envelope
            .response
            .and_then(|r| r.accountbalance)
            .and_then(|b| b.money);

        let Some(money) = money else {
            error!("malformed balance response, treating balance as zero");
            return Ok(Decimal::ZERO);
        };

        let cash = money.cash.as_deref().and_then(|s| s.parse::<Decimal>().ok());
        let uncleared = money
            .uncleareddeposits
            .as_deref()
            .and_then(|s| s.parse::<Decimal>().ok());

        match (cash, uncleared) {
            (Some(cash), Some(uncleared)) => Ok(cash - uncleared),
            _ => {
                error!(?money, "non-numeric balance fields, treating balance as zero");
                Ok(Decimal::ZERO)
            }
        }
    }

    #[instrument(skip(self))]
    async fn last_price(&self, ticker: &str) -> Result<Decimal> {
        let url = format!(
            "{}?symbols={}&fids=last,date,symbol,exch_desc,name",
            self.url("market/ext/quotes"),
            ticker
        );
        let envelope: QuotesEnvelope = self.get_json(&url).await?;

        let last = envelope
            .response
            .and_then(|r| r.quotes)
            .and_then(|q| q.quote)
            .and_then(|q| q.last)
            .ok_or_else(|| TradingError::PriceUnavailable {
                ticker: ticker.to_string(),
                reason: "quote missing last field".into(),
            })?;

        let last: Decimal = last.parse().map_err(|_| TradingError::PriceUnavailable {
            ticker: ticker.to_string(),
            reason: format!("non-numeric last: {}", last),
        })?;

        if last > Decimal::ZERO {
            debug!(%ticker, %last, "last trade price");
            Ok(last)
        } else {
            Err(TradingError::PriceUnavailable {
                ticker: ticker.to_string(),
                reason: format!("zero or negative quote: {}", last),
            })
        }
    }

    #[instrument(skip(self, order), fields(ticker = %order.ticker, intent = %order.intent))]
    async fn submit_order(&self, order: &Order) -> Result<()> {
        let url = self.order_url();
        let fixml = order.to_fixml(&self.account);
        let auth = authorization_header(&self.credentials, "POST", &url)?;
        debug!(%url, %fixml, "submitting order");

        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, auth)
            .header(CONTENT_TYPE, FIXML_CONTENT_TYPE)
            .body(fixml)
            .send()
            .await?;
        let body = response.text().await?;
        debug!(%body, "order response");

        let envelope: OrderEnvelope = serde_json::from_str(&body)?;
        let order_error = envelope
            .response
            .and_then(|r| r.error)
            .ok_or_else(|| {
                TradingError::MalformedResponse(format!(
                    "order response missing error field: {}",
                    body
                ))
            })?;

        // The error field is the broker's verification result; anything but
        // the literal "Success" is a rejection.
        if order_error == "Success" {
            Ok(())
        } else {
            Err(TradingError::OrderRejected(order_error))
        }
    }
}
