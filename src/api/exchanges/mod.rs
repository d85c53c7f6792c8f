//! Exchange and exchange-rate endpoints.

mod types;

pub use types::*;

use crate::api::coins::TickersResponse;
use crate::client::CoinGeckoClient;
use crate::endpoints;
use crate::error::CoinGeckoError;
use crate::params::Params;

impl CoinGeckoClient {
    /// List all exchanges with market data, paginated.
    pub async fn get_exchanges(
        &self,
        request: &ExchangesRequest,
    ) -> Result<Vec<Exchange>, CoinGeckoError> {
        self.get(endpoints::EXCHANGES, &request.params()).await
    }

    /// List all exchanges (id, name).
    pub async fn get_exchanges_id_name_list(
        &self,
    ) -> Result<Vec<ExchangeIdName>, CoinGeckoError> {
        self.get(endpoints::EXCHANGES_LIST, &Params::new()).await
    }

    /// Get volume and top tickers for one exchange.
    pub async fn get_exchange_by_id(&self, id: &str) -> Result<ExchangeDetail, CoinGeckoError> {
        let params = Params::new().path("id", id);
        params.require("id")?;
        self.get(endpoints::EXCHANGE, &params).await
    }

    /// Get tickers for one exchange, paginated.
    pub async fn get_exchange_tickers_by_id(
        &self,
        request: &ExchangeTickersRequest,
    ) -> Result<TickersResponse, CoinGeckoError> {
        let params = request.params();
        params.require("id")?;
        self.get(endpoints::EXCHANGE_TICKERS, &params).await
    }

    /// Get the rolling volume chart for one exchange.
    ///
    /// Returns `[timestamp_ms, volume]` pairs; the API serializes the volume
    /// as a decimal string.
    pub async fn get_exchange_volume_chart_by_id(
        &self,
        id: &str,
        days: u32,
    ) -> Result<Vec<(f64, String)>, CoinGeckoError> {
        let params = Params::new().path("id", id).set("days", days);
        params.require("id")?;
        self.get(endpoints::EXCHANGE_VOLUME_CHART, &params).await
    }

    /// Get BTC-relative exchange rates.
    pub async fn get_exchange_rates(&self) -> Result<ExchangeRates, CoinGeckoError> {
        self.get(endpoints::EXCHANGE_RATES, &Params::new()).await
    }
}
