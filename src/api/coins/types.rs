//! Types for the `coins` resource family.

use std::collections::HashMap;

use serde::Deserialize;

use crate::params::Params;

/// One row of `coins/list`.
#[derive(Debug, Clone, Deserialize)]
pub struct CoinListItem {
    pub id: String,
    pub symbol: String,
    pub name: String,
    /// Contract addresses per platform; present when `include_platform` is set.
    #[serde(default)]
    pub platforms: Option<serde_json::Value>,
}

/// Request parameters for `coins/markets`.
#[derive(Debug, Clone)]
pub struct MarketsRequest {
    /// Target currency of market data.
    pub vs_currency: String,
    /// Restrict to specific coin ids; empty means all coins.
    pub ids: Vec<String>,
    /// Restrict to a category slug.
    pub category: Option<String>,
    /// Sort order, default `market_cap_desc`.
    pub order: String,
    /// Results per page, 1..=250, default 100.
    pub per_page: u32,
    /// Page number, default 1.
    pub page: u32,
    /// Include 7d sparkline data.
    pub sparkline: bool,
    /// Price-change windows to include (`1h`, `24h`, `7d`, ...).
    pub price_change_percentage: Vec<String>,
    /// Decimal places for currency values.
    pub precision: Option<String>,
    /// Extra query parameters, appended after the declared set.
    pub extra: Params,
}

impl MarketsRequest {
    /// Create a new request for the given target currency.
    pub fn new(vs_currency: impl Into<String>) -> Self {
        Self {
            vs_currency: vs_currency.into(),
            ..Default::default()
        }
    }

    /// Restrict to specific coin ids.
    pub fn ids(mut self, ids: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.ids = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Restrict to a category slug.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the sort order.
    pub fn order(mut self, order: impl Into<String>) -> Self {
        self.order = order.into();
        self
    }

    /// Set the page size.
    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    /// Set the page number.
    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Include 7d sparkline data.
    pub fn sparkline(mut self, sparkline: bool) -> Self {
        self.sparkline = sparkline;
        self
    }

    /// Request price-change columns for the given windows.
    pub fn price_change_percentage(
        mut self,
        windows: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.price_change_percentage = windows.into_iter().map(Into::into).collect();
        self
    }

    /// The declared parameter set of this request.
    pub fn params(&self) -> Params {
        Params::new()
            .set("vs_currency", &self.vs_currency)
            .set("ids", self.ids.clone())
            .set_opt("category", self.category.clone())
            .set("order", &self.order)
            .set("per_page", self.per_page)
            .set("page", self.page)
            .set("sparkline", self.sparkline)
            .set("price_change_percentage", self.price_change_percentage.clone())
            .set_opt("precision", self.precision.clone())
            .extend(&self.extra)
    }
}

impl Default for MarketsRequest {
    fn default() -> Self {
        Self {
            vs_currency: String::new(),
            ids: Vec::new(),
            category: None,
            order: "market_cap_desc".to_string(),
            per_page: 100,
            page: 1,
            sparkline: false,
            price_change_percentage: Vec::new(),
            precision: None,
            extra: Params::new(),
        }
    }
}

/// One row of `coins/markets`.
#[derive(Debug, Clone, Deserialize)]
pub struct CoinMarket {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub image: Option<String>,
    pub current_price: Option<f64>,
    pub market_cap: Option<f64>,
    pub market_cap_rank: Option<u32>,
    pub fully_diluted_valuation: Option<f64>,
    pub total_volume: Option<f64>,
    pub high_24h: Option<f64>,
    pub low_24h: Option<f64>,
    pub price_change_24h: Option<f64>,
    pub price_change_percentage_24h: Option<f64>,
    pub market_cap_change_24h: Option<f64>,
    pub market_cap_change_percentage_24h: Option<f64>,
    pub circulating_supply: Option<f64>,
    pub total_supply: Option<f64>,
    pub max_supply: Option<f64>,
    pub ath: Option<f64>,
    pub ath_change_percentage: Option<f64>,
    pub ath_date: Option<String>,
    pub atl: Option<f64>,
    pub atl_change_percentage: Option<f64>,
    pub atl_date: Option<String>,
    pub last_updated: Option<String>,
    pub sparkline_in_7d: Option<SparklineData>,
    pub price_change_percentage_1h_in_currency: Option<f64>,
    pub price_change_percentage_24h_in_currency: Option<f64>,
    pub price_change_percentage_7d_in_currency: Option<f64>,
    pub price_change_percentage_14d_in_currency: Option<f64>,
    pub price_change_percentage_30d_in_currency: Option<f64>,
    pub price_change_percentage_200d_in_currency: Option<f64>,
    pub price_change_percentage_1y_in_currency: Option<f64>,
}

/// 7d price sparkline.
#[derive(Debug, Clone, Deserialize)]
pub struct SparklineData {
    pub price: Vec<f64>,
}

/// Request parameters for `coins/{id}`.
///
/// The `localization`/`tickers`/`market_data`/`community_data`/
/// `developer_data` flags default to `true`, matching the remote defaults.
#[derive(Debug, Clone)]
pub struct CoinRequest {
    /// Coin id; embedded in the path.
    pub id: String,
    /// Include localized names.
    pub localization: bool,
    /// Include tickers data.
    pub tickers: bool,
    /// Include market data.
    pub market_data: bool,
    /// Include community data.
    pub community_data: bool,
    /// Include developer data.
    pub developer_data: bool,
    /// Include 7d sparkline data.
    pub sparkline: bool,
    /// Extra query parameters, appended after the declared set.
    pub extra: Params,
}

impl CoinRequest {
    /// Create a new request for the given coin.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Include localized names.
    pub fn localization(mut self, include: bool) -> Self {
        self.localization = include;
        self
    }

    /// Include tickers data.
    pub fn tickers(mut self, include: bool) -> Self {
        self.tickers = include;
        self
    }

    /// Include market data.
    pub fn market_data(mut self, include: bool) -> Self {
        self.market_data = include;
        self
    }

    /// Include community data.
    pub fn community_data(mut self, include: bool) -> Self {
        self.community_data = include;
        self
    }

    /// Include developer data.
    pub fn developer_data(mut self, include: bool) -> Self {
        self.developer_data = include;
        self
    }

    /// Include 7d sparkline data.
    pub fn sparkline(mut self, include: bool) -> Self {
        self.sparkline = include;
        self
    }

    /// The declared parameter set of this request.
    pub fn params(&self) -> Params {
        Params::new()
            .path("id", &self.id)
            .set("localization", self.localization)
            .set("tickers", self.tickers)
            .set("market_data", self.market_data)
            .set("community_data", self.community_data)
            .set("developer_data", self.developer_data)
            .set("sparkline", self.sparkline)
            .extend(&self.extra)
    }
}

impl Default for CoinRequest {
    fn default() -> Self {
        Self {
            id: String::new(),
            localization: true,
            tickers: true,
            market_data: true,
            community_data: true,
            developer_data: true,
            sparkline: false,
            extra: Params::new(),
        }
    }
}

/// Full data for one coin, from `coins/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct CoinDetail {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub web_slug: Option<String>,
    pub categories: Option<Vec<String>>,
    pub description: Option<serde_json::Value>,
    pub links: Option<serde_json::Value>,
    pub image: Option<serde_json::Value>,
    pub genesis_date: Option<String>,
    pub market_cap_rank: Option<u32>,
    pub market_data: Option<serde_json::Value>,
    pub community_data: Option<serde_json::Value>,
    pub developer_data: Option<serde_json::Value>,
    pub tickers: Option<Vec<Ticker>>,
    pub last_updated: Option<String>,
}

/// Request parameters for `coins/{id}/tickers`.
#[derive(Debug, Clone, Default)]
pub struct CoinTickersRequest {
    /// Coin id; embedded in the path.
    pub id: String,
    /// Restrict to specific exchange ids.
    pub exchange_ids: Vec<String>,
    /// Include the exchange logo URL.
    pub include_exchange_logo: Option<bool>,
    /// Page number.
    pub page: Option<u32>,
    /// Sort order (`trust_score_desc`, `volume_desc`, ...).
    pub order: Option<String>,
    /// Include 2% orderbook depth columns.
    pub depth: Option<bool>,
    /// Extra query parameters, appended after the declared set.
    pub extra: Params,
}

impl CoinTickersRequest {
    /// Create a new request for the given coin.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Restrict to specific exchange ids.
    pub fn exchange_ids(mut self, ids: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.exchange_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Set the page number.
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the sort order.
    pub fn order(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
        self
    }

    /// The declared parameter set of this request.
    pub fn params(&self) -> Params {
        Params::new()
            .path("id", &self.id)
            .set("exchange_ids", self.exchange_ids.clone())
            .set_opt("include_exchange_logo", self.include_exchange_logo)
            .set_opt("page", self.page)
            .set_opt("order", self.order.clone())
            .set_opt("depth", self.depth)
            .extend(&self.extra)
    }
}

/// Paginated tickers for a coin or exchange.
#[derive(Debug, Clone, Deserialize)]
pub struct TickersResponse {
    /// Coin or exchange name; absent on some exchange responses.
    #[serde(default)]
    pub name: Option<String>,
    pub tickers: Vec<Ticker>,
}

/// A single market ticker.
#[derive(Debug, Clone, Deserialize)]
pub struct Ticker {
    pub base: String,
    pub target: String,
    pub market: TickerMarket,
    pub last: Option<f64>,
    pub volume: Option<f64>,
    pub converted_last: Option<HashMap<String, f64>>,
    pub converted_volume: Option<HashMap<String, f64>>,
    pub trust_score: Option<String>,
    pub bid_ask_spread_percentage: Option<f64>,
    pub timestamp: Option<String>,
    pub last_traded_at: Option<String>,
    pub last_fetch_at: Option<String>,
    pub is_anomaly: Option<bool>,
    pub is_stale: Option<bool>,
    pub trade_url: Option<String>,
    pub coin_id: Option<String>,
    pub target_coin_id: Option<String>,
}

/// Venue a ticker was observed on.
#[derive(Debug, Clone, Deserialize)]
pub struct TickerMarket {
    pub name: String,
    pub identifier: String,
    pub has_trading_incentive: Option<bool>,
}

/// Request parameters for `coins/{id}/history`.
#[derive(Debug, Clone)]
pub struct CoinHistoryRequest {
    /// Coin id; embedded in the path.
    pub id: String,
    /// Snapshot date, `dd-mm-yyyy`.
    pub date: String,
    /// Include localized names.
    pub localization: bool,
    /// Extra query parameters, appended after the declared set.
    pub extra: Params,
}

impl CoinHistoryRequest {
    /// Create a new request for the given coin and date (`dd-mm-yyyy`).
    pub fn new(id: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            date: date.into(),
            localization: true,
            extra: Params::new(),
        }
    }

    /// Include localized names.
    pub fn localization(mut self, include: bool) -> Self {
        self.localization = include;
        self
    }

    /// The declared parameter set of this request.
    pub fn params(&self) -> Params {
        Params::new()
            .path("id", &self.id)
            .set("date", &self.date)
            .set("localization", self.localization)
            .extend(&self.extra)
    }
}

/// Historical snapshot of one coin, from `coins/{id}/history`.
#[derive(Debug, Clone, Deserialize)]
pub struct CoinHistory {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub localization: Option<serde_json::Value>,
    pub image: Option<serde_json::Value>,
    pub market_data: Option<serde_json::Value>,
    pub community_data: Option<serde_json::Value>,
    pub developer_data: Option<serde_json::Value>,
    pub public_interest_stats: Option<serde_json::Value>,
}

/// Request parameters for `coins/{id}/market_chart`.
#[derive(Debug, Clone, Default)]
pub struct MarketChartRequest {
    /// Coin id; embedded in the path.
    pub id: String,
    /// Target currency of market data.
    pub vs_currency: String,
    /// Days of data to return (a number, or `max`).
    pub days: String,
    /// Data granularity (`daily`); automatic when unset.
    pub interval: Option<String>,
    /// Decimal places for currency values.
    pub precision: Option<String>,
    /// Extra query parameters, appended after the declared set.
    pub extra: Params,
}

impl MarketChartRequest {
    /// Create a new request for the given coin, currency and window.
    pub fn new(
        id: impl Into<String>,
        vs_currency: impl Into<String>,
        days: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            vs_currency: vs_currency.into(),
            days: days.into(),
            ..Default::default()
        }
    }

    /// Set the data granularity.
    pub fn interval(mut self, interval: impl Into<String>) -> Self {
        self.interval = Some(interval.into());
        self
    }

    /// The declared parameter set of this request.
    pub fn params(&self) -> Params {
        Params::new()
            .path("id", &self.id)
            .set("vs_currency", &self.vs_currency)
            .set("days", &self.days)
            .set_opt("interval", self.interval.clone())
            .set_opt("precision", self.precision.clone())
            .extend(&self.extra)
    }
}

/// Request parameters for `coins/{id}/market_chart/range`.
///
/// `from`/`to` are UNIX epoch seconds.
#[derive(Debug, Clone, Default)]
pub struct MarketChartRangeRequest {
    /// Coin id; embedded in the path.
    pub id: String,
    /// Target currency of market data.
    pub vs_currency: String,
    /// Range start, epoch seconds.
    pub from: u64,
    /// Range end, epoch seconds.
    pub to: u64,
    /// Decimal places for currency values.
    pub precision: Option<String>,
    /// Extra query parameters, appended after the declared set.
    pub extra: Params,
}

impl MarketChartRangeRequest {
    /// Create a new request for the given coin, currency and range.
    pub fn new(id: impl Into<String>, vs_currency: impl Into<String>, from: u64, to: u64) -> Self {
        Self {
            id: id.into(),
            vs_currency: vs_currency.into(),
            from,
            to,
            ..Default::default()
        }
    }

    /// The declared parameter set of this request.
    pub fn params(&self) -> Params {
        Params::new()
            .path("id", &self.id)
            .set("vs_currency", &self.vs_currency)
            .set("from", self.from)
            .set("to", self.to)
            .set_opt("precision", self.precision.clone())
            .extend(&self.extra)
    }
}

/// Historical chart data: `[timestamp_ms, value]` pairs.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketChartData {
    pub prices: Vec<[f64; 2]>,
    pub market_caps: Vec<[f64; 2]>,
    pub total_volumes: Vec<[f64; 2]>,
}

/// Request parameters for `coins/{id}/ohlc`.
#[derive(Debug, Clone, Default)]
pub struct CoinOhlcRequest {
    /// Coin id; embedded in the path.
    pub id: String,
    /// Target currency of market data.
    pub vs_currency: String,
    /// Days of data to return (1, 7, 14, 30, 90, 180, 365 or `max`).
    pub days: String,
    /// Decimal places for currency values.
    pub precision: Option<String>,
    /// Extra query parameters, appended after the declared set.
    pub extra: Params,
}

impl CoinOhlcRequest {
    /// Create a new request for the given coin, currency and window.
    pub fn new(
        id: impl Into<String>,
        vs_currency: impl Into<String>,
        days: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            vs_currency: vs_currency.into(),
            days: days.into(),
            ..Default::default()
        }
    }

    /// The declared parameter set of this request.
    pub fn params(&self) -> Params {
        Params::new()
            .path("id", &self.id)
            .set("vs_currency", &self.vs_currency)
            .set("days", &self.days)
            .set_opt("precision", self.precision.clone())
            .extend(&self.extra)
    }
}

/// One OHLC candle: `[timestamp_ms, open, high, low, close]`.
pub type OhlcCandle = [f64; 5];

/// One row of `coins/categories/list`.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryListItem {
    pub category_id: String,
    pub name: String,
}

/// One row of `coins/categories`.
#[derive(Debug, Clone, Deserialize)]
pub struct CoinCategory {
    pub id: String,
    pub name: String,
    pub market_cap: Option<f64>,
    pub market_cap_change_24h: Option<f64>,
    pub content: Option<String>,
    pub top_3_coins: Option<Vec<String>>,
    pub volume_24h: Option<f64>,
    pub updated_at: Option<String>,
}

/// One row of `asset_platforms`.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetPlatform {
    pub id: String,
    pub chain_identifier: Option<i64>,
    pub name: String,
    pub shortname: Option<String>,
    pub native_coin_id: Option<String>,
}
