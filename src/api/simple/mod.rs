//! Ping and `simple` price endpoints.

mod types;

pub use types::*;

use crate::client::CoinGeckoClient;
use crate::endpoints;
use crate::error::CoinGeckoError;
use crate::params::Params;

impl CoinGeckoClient {
    /// Check API server status.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use coingecko_api_client::CoinGeckoClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = CoinGeckoClient::new();
    ///     let pong = client.ping().await?;
    ///     println!("{}", pong.gecko_says);
    ///     Ok(())
    /// }
    /// ```
    pub async fn ping(&self) -> Result<Ping, CoinGeckoError> {
        self.get(endpoints::PING, &Params::new()).await
    }

    /// Get the current price of coins in any supported target currencies.
    ///
    /// # Arguments
    ///
    /// * `request` - Coin ids, target currencies and the `include_*` flags.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use coingecko_api_client::CoinGeckoClient;
    /// use coingecko_api_client::api::simple::PriceRequest;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = CoinGeckoClient::new();
    ///     let request = PriceRequest::new(["bitcoin"], ["usd", "eur"])
    ///         .include_market_cap(true);
    ///     let prices = client.get_price(&request).await?;
    ///     println!("{:?}", prices["bitcoin"]["usd"]);
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_price(&self, request: &PriceRequest) -> Result<SimplePrice, CoinGeckoError> {
        let params = request.params();
        params.require("ids")?;
        params.require("vs_currencies")?;
        self.get(endpoints::SIMPLE_PRICE, &params).await
    }

    /// Get current token prices on a platform, by contract address.
    pub async fn get_token_price(
        &self,
        request: &TokenPriceRequest,
    ) -> Result<SimplePrice, CoinGeckoError> {
        let params = request.params();
        params.require("id")?;
        params.require("contract_addresses")?;
        params.require("vs_currencies")?;
        self.get(endpoints::SIMPLE_TOKEN_PRICE, &params).await
    }

    /// List the supported target currencies.
    pub async fn get_supported_vs_currencies(&self) -> Result<Vec<String>, CoinGeckoError> {
        self.get(endpoints::SIMPLE_SUPPORTED_VS_CURRENCIES, &Params::new())
            .await
    }
}
