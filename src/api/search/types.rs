//! Types for the search and trending endpoints.

use serde::Deserialize;

/// Search results, from `search`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub coins: Vec<SearchCoin>,
    #[serde(default)]
    pub exchanges: Vec<SearchExchange>,
    #[serde(default)]
    pub categories: Vec<SearchCategory>,
    #[serde(default)]
    pub nfts: Vec<serde_json::Value>,
}

/// A coin search hit.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchCoin {
    pub id: String,
    pub name: String,
    pub api_symbol: Option<String>,
    pub symbol: String,
    pub market_cap_rank: Option<u32>,
    pub thumb: Option<String>,
    pub large: Option<String>,
}

/// An exchange search hit.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchExchange {
    pub id: String,
    pub name: String,
    pub market_type: Option<String>,
    pub thumb: Option<String>,
    pub large: Option<String>,
}

/// A category search hit.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchCategory {
    pub id: Option<serde_json::Value>,
    pub name: String,
}

/// Trending searches, from `search/trending`.
#[derive(Debug, Clone, Deserialize)]
pub struct TrendingResponse {
    #[serde(default)]
    pub coins: Vec<TrendingCoinItem>,
    #[serde(default)]
    pub nfts: Vec<serde_json::Value>,
    #[serde(default)]
    pub categories: Vec<serde_json::Value>,
}

/// Wrapper item of the trending coin list.
#[derive(Debug, Clone, Deserialize)]
pub struct TrendingCoinItem {
    pub item: TrendingCoin,
}

/// One trending coin.
#[derive(Debug, Clone, Deserialize)]
pub struct TrendingCoin {
    pub id: String,
    pub coin_id: Option<u64>,
    pub name: String,
    pub symbol: String,
    pub market_cap_rank: Option<u32>,
    pub thumb: Option<String>,
    pub small: Option<String>,
    pub large: Option<String>,
    pub slug: Option<String>,
    pub price_btc: Option<f64>,
    pub score: Option<u32>,
    pub data: Option<serde_json::Value>,
}
