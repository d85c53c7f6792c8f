//! Search and trending endpoints.

mod types;

pub use types::*;

use crate::client::CoinGeckoClient;
use crate::endpoints;
use crate::error::CoinGeckoError;
use crate::params::Params;

impl CoinGeckoClient {
    /// Search coins, categories and exchanges by name or symbol, ordered by
    /// market cap.
    pub async fn search(&self, query: &str) -> Result<SearchResponse, CoinGeckoError> {
        let params = Params::new().set("query", query);
        params.require("query")?;
        self.get(endpoints::SEARCH, &params).await
    }

    /// Get the trending search coins over the last 24 hours.
    pub async fn get_search_trending(&self) -> Result<TrendingResponse, CoinGeckoError> {
        self.get(endpoints::SEARCH_TRENDING, &Params::new()).await
    }
}
