//! Types for the `ping` and `simple` endpoints.

use std::collections::HashMap;

use serde::Deserialize;

use crate::params::Params;

/// Ping response.
#[derive(Debug, Clone, Deserialize)]
pub struct Ping {
    pub gecko_says: String,
}

/// Prices keyed by coin id (or contract address), then by vs currency.
///
/// When an `include_*` flag is set, the inner map gains the corresponding
/// derived keys (`usd_market_cap`, `usd_24h_vol`, `last_updated_at`, ...).
pub type SimplePrice = HashMap<String, HashMap<String, f64>>;

/// Request parameters for `simple/price`.
///
/// The `include_*` flags are declared with a concrete default and always
/// surface in the query string; `precision` is omitted unless set.
#[derive(Debug, Clone, Default)]
pub struct PriceRequest {
    /// Coin ids (see `coins/list`).
    pub ids: Vec<String>,
    /// Target currencies (see `simple/supported_vs_currencies`).
    pub vs_currencies: Vec<String>,
    /// Include market cap in the response.
    pub include_market_cap: bool,
    /// Include 24h volume.
    pub include_24hr_vol: bool,
    /// Include 24h change.
    pub include_24hr_change: bool,
    /// Include the last-updated timestamp of the price.
    pub include_last_updated_at: bool,
    /// Decimal places for currency values (`"0"`..`"18"` or `"full"`).
    pub precision: Option<String>,
    /// Extra query parameters, appended after the declared set.
    pub extra: Params,
}

impl PriceRequest {
    /// Create a new request for the given coins and target currencies.
    pub fn new(
        ids: impl IntoIterator<Item = impl Into<String>>,
        vs_currencies: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
            vs_currencies: vs_currencies.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Include market cap.
    pub fn include_market_cap(mut self, include: bool) -> Self {
        self.include_market_cap = include;
        self
    }

    /// Include 24h volume.
    pub fn include_24hr_vol(mut self, include: bool) -> Self {
        self.include_24hr_vol = include;
        self
    }

    /// Include 24h change.
    pub fn include_24hr_change(mut self, include: bool) -> Self {
        self.include_24hr_change = include;
        self
    }

    /// Include the last-updated timestamp.
    pub fn include_last_updated_at(mut self, include: bool) -> Self {
        self.include_last_updated_at = include;
        self
    }

    /// Set the decimal precision of currency values.
    pub fn precision(mut self, precision: impl Into<String>) -> Self {
        self.precision = Some(precision.into());
        self
    }

    /// The declared parameter set of this request.
    pub fn params(&self) -> Params {
        Params::new()
            .set("ids", self.ids.clone())
            .set("vs_currencies", self.vs_currencies.clone())
            .set("include_market_cap", self.include_market_cap)
            .set("include_24hr_vol", self.include_24hr_vol)
            .set("include_24hr_change", self.include_24hr_change)
            .set("include_last_updated_at", self.include_last_updated_at)
            .set_opt("precision", self.precision.clone())
            .extend(&self.extra)
    }
}

/// Request parameters for `simple/token_price/{id}`.
#[derive(Debug, Clone, Default)]
pub struct TokenPriceRequest {
    /// Asset platform id (see `asset_platforms`); embedded in the path.
    pub id: String,
    /// Token contract addresses.
    pub contract_addresses: Vec<String>,
    /// Target currencies.
    pub vs_currencies: Vec<String>,
    /// Include market cap in the response.
    pub include_market_cap: bool,
    /// Include 24h volume.
    pub include_24hr_vol: bool,
    /// Include 24h change.
    pub include_24hr_change: bool,
    /// Include the last-updated timestamp of the price.
    pub include_last_updated_at: bool,
    /// Decimal places for currency values.
    pub precision: Option<String>,
    /// Extra query parameters, appended after the declared set.
    pub extra: Params,
}

impl TokenPriceRequest {
    /// Create a new request for tokens on the given platform.
    pub fn new(
        id: impl Into<String>,
        contract_addresses: impl IntoIterator<Item = impl Into<String>>,
        vs_currencies: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            id: id.into(),
            contract_addresses: contract_addresses.into_iter().map(Into::into).collect(),
            vs_currencies: vs_currencies.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Include market cap.
    pub fn include_market_cap(mut self, include: bool) -> Self {
        self.include_market_cap = include;
        self
    }

    /// Include 24h volume.
    pub fn include_24hr_vol(mut self, include: bool) -> Self {
        self.include_24hr_vol = include;
        self
    }

    /// Include 24h change.
    pub fn include_24hr_change(mut self, include: bool) -> Self {
        self.include_24hr_change = include;
        self
    }

    /// Include the last-updated timestamp.
    pub fn include_last_updated_at(mut self, include: bool) -> Self {
        self.include_last_updated_at = include;
        self
    }

    /// The declared parameter set of this request.
    pub fn params(&self) -> Params {
        Params::new()
            .path("id", &self.id)
            .set("contract_addresses", self.contract_addresses.clone())
            .set("vs_currencies", self.vs_currencies.clone())
            .set("include_market_cap", self.include_market_cap)
            .set("include_24hr_vol", self.include_24hr_vol)
            .set("include_24hr_change", self.include_24hr_change)
            .set("include_last_updated_at", self.include_last_updated_at)
            .set_opt("precision", self.precision.clone())
            .extend(&self.extra)
    }
}
