//! Types for the `exchanges` resource family.

use std::collections::HashMap;

use serde::Deserialize;

use crate::api::coins::Ticker;
use crate::params::Params;

/// Request parameters for `exchanges`.
#[derive(Debug, Clone, Default)]
pub struct ExchangesRequest {
    /// Results per page, 1..=250.
    pub per_page: Option<u32>,
    /// Page number.
    pub page: Option<u32>,
    /// Extra query parameters, appended after the declared set.
    pub extra: Params,
}

impl ExchangesRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size.
    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Set the page number.
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// The declared parameter set of this request.
    pub fn params(&self) -> Params {
        Params::new()
            .set_opt("per_page", self.per_page)
            .set_opt("page", self.page)
            .extend(&self.extra)
    }
}

/// One row of `exchanges`.
#[derive(Debug, Clone, Deserialize)]
pub struct Exchange {
    pub id: String,
    pub name: String,
    pub year_established: Option<u32>,
    pub country: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub image: Option<String>,
    pub has_trading_incentive: Option<bool>,
    pub trust_score: Option<u32>,
    pub trust_score_rank: Option<u32>,
    pub trade_volume_24h_btc: Option<f64>,
    pub trade_volume_24h_btc_normalized: Option<f64>,
}

/// One row of `exchanges/list`.
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeIdName {
    pub id: String,
    pub name: String,
}

/// Full data for one exchange, from `exchanges/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeDetail {
    pub name: String,
    pub year_established: Option<u32>,
    pub country: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub image: Option<String>,
    pub facebook_url: Option<String>,
    pub reddit_url: Option<String>,
    pub twitter_handle: Option<String>,
    pub centralized: Option<bool>,
    pub has_trading_incentive: Option<bool>,
    pub trust_score: Option<u32>,
    pub trust_score_rank: Option<u32>,
    pub trade_volume_24h_btc: Option<f64>,
    pub trade_volume_24h_btc_normalized: Option<f64>,
    #[serde(default)]
    pub tickers: Vec<Ticker>,
}

/// Request parameters for `exchanges/{id}/tickers`.
#[derive(Debug, Clone, Default)]
pub struct ExchangeTickersRequest {
    /// Exchange id; embedded in the path.
    pub id: String,
    /// Restrict to specific coin ids.
    pub coin_ids: Vec<String>,
    /// Include the exchange logo URL.
    pub include_exchange_logo: Option<bool>,
    /// Page number.
    pub page: Option<u32>,
    /// Include 2% orderbook depth columns.
    pub depth: Option<bool>,
    /// Sort order (`trust_score_desc`, `volume_desc`, ...).
    pub order: Option<String>,
    /// Extra query parameters, appended after the declared set.
    pub extra: Params,
}

impl ExchangeTickersRequest {
    /// Create a new request for the given exchange.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Restrict to specific coin ids.
    pub fn coin_ids(mut self, ids: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.coin_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Set the page number.
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// The declared parameter set of this request.
    pub fn params(&self) -> Params {
        Params::new()
            .path("id", &self.id)
            .set("coin_ids", self.coin_ids.clone())
            .set_opt("include_exchange_logo", self.include_exchange_logo)
            .set_opt("page", self.page)
            .set_opt("depth", self.depth)
            .set_opt("order", self.order.clone())
            .extend(&self.extra)
    }
}

/// BTC-relative exchange rates, from `exchange_rates`.
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeRates {
    pub rates: HashMap<String, ExchangeRate>,
}

/// One exchange rate.
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeRate {
    pub name: String,
    pub unit: String,
    pub value: f64,
    /// Rate kind, `fiat`, `crypto` or `commodity`.
    #[serde(rename = "type")]
    pub kind: String,
}
