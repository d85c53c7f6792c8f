//! `coins`, category and asset-platform endpoints.

mod types;

pub use types::*;

use crate::client::CoinGeckoClient;
use crate::endpoints;
use crate::error::CoinGeckoError;
use crate::params::Params;

impl CoinGeckoClient {
    /// List all supported coins (id, name, symbol).
    ///
    /// # Arguments
    ///
    /// * `include_platform` - Include contract addresses per platform.
    pub async fn get_coins_list(
        &self,
        include_platform: bool,
    ) -> Result<Vec<CoinListItem>, CoinGeckoError> {
        let params = Params::new().set("include_platform", include_platform);
        self.get(endpoints::COINS_LIST, &params).await
    }

    /// Get market data for coins, paginated.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use coingecko_api_client::CoinGeckoClient;
    /// use coingecko_api_client::api::coins::MarketsRequest;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = CoinGeckoClient::new();
    ///     let request = MarketsRequest::new("usd").ids(["bitcoin", "ethereum"]);
    ///     for market in client.get_coins_markets(&request).await? {
    ///         println!("{}: {:?}", market.id, market.current_price);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_coins_markets(
        &self,
        request: &MarketsRequest,
    ) -> Result<Vec<CoinMarket>, CoinGeckoError> {
        let params = request.params();
        params.require("vs_currency")?;
        self.get(endpoints::COINS_MARKETS, &params).await
    }

    /// Get full data for one coin.
    pub async fn get_coin_by_id(&self, request: &CoinRequest) -> Result<CoinDetail, CoinGeckoError> {
        let params = request.params();
        params.require("id")?;
        self.get(endpoints::COIN, &params).await
    }

    /// Get tickers for one coin, paginated.
    pub async fn get_coin_tickers_by_id(
        &self,
        request: &CoinTickersRequest,
    ) -> Result<TickersResponse, CoinGeckoError> {
        let params = request.params();
        params.require("id")?;
        self.get(endpoints::COIN_TICKERS, &params).await
    }

    /// Get a historical snapshot of one coin at a given date.
    pub async fn get_coin_history_by_id(
        &self,
        request: &CoinHistoryRequest,
    ) -> Result<CoinHistory, CoinGeckoError> {
        let params = request.params();
        params.require("id")?;
        params.require("date")?;
        self.get(endpoints::COIN_HISTORY, &params).await
    }

    /// Get historical chart data (prices, market caps, volumes) for one coin.
    pub async fn get_coin_market_chart_by_id(
        &self,
        request: &MarketChartRequest,
    ) -> Result<MarketChartData, CoinGeckoError> {
        let params = request.params();
        params.require("id")?;
        params.require("vs_currency")?;
        params.require("days")?;
        self.get(endpoints::COIN_MARKET_CHART, &params).await
    }

    /// Get historical chart data for one coin within a time range.
    ///
    /// `from`/`to` of the request are UNIX epoch seconds and are sent as the
    /// `from` and `to` query parameters.
    pub async fn get_coin_market_chart_range_by_id(
        &self,
        request: &MarketChartRangeRequest,
    ) -> Result<MarketChartData, CoinGeckoError> {
        let params = request.params();
        params.require("id")?;
        params.require("vs_currency")?;
        self.get(endpoints::COIN_MARKET_CHART_RANGE, &params).await
    }

    /// Get OHLC candles for one coin.
    pub async fn get_coin_ohlc_by_id(
        &self,
        request: &CoinOhlcRequest,
    ) -> Result<Vec<OhlcCandle>, CoinGeckoError> {
        let params = request.params();
        params.require("id")?;
        params.require("vs_currency")?;
        params.require("days")?;
        self.get(endpoints::COIN_OHLC, &params).await
    }

    /// List all coin categories (id, name).
    pub async fn get_coins_categories_list(
        &self,
    ) -> Result<Vec<CategoryListItem>, CoinGeckoError> {
        self.get(endpoints::COINS_CATEGORIES_LIST, &Params::new())
            .await
    }

    /// List all coin categories with market data.
    pub async fn get_coins_categories(&self) -> Result<Vec<CoinCategory>, CoinGeckoError> {
        self.get(endpoints::COINS_CATEGORIES, &Params::new()).await
    }

    /// List all asset platforms.
    pub async fn get_asset_platforms(&self) -> Result<Vec<AssetPlatform>, CoinGeckoError> {
        self.get(endpoints::ASSET_PLATFORMS, &Params::new()).await
    }
}
