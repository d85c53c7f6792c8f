//! Global market-data and public-treasury endpoints.

mod types;

pub use types::*;

use crate::client::CoinGeckoClient;
use crate::endpoints;
use crate::error::CoinGeckoError;
use crate::params::Params;

impl CoinGeckoClient {
    /// Get global cryptocurrency market data.
    ///
    /// The API wraps the payload in a `data` envelope; this returns the
    /// unwrapped payload.
    pub async fn get_global(&self) -> Result<GlobalData, CoinGeckoError> {
        let wrapper: GlobalDataWrapper = self.get(endpoints::GLOBAL, &Params::new()).await?;
        Ok(wrapper.data)
    }

    /// Get global decentralized-finance market data.
    pub async fn get_global_defi(&self) -> Result<GlobalDefiData, CoinGeckoError> {
        let wrapper: GlobalDefiWrapper = self.get(endpoints::GLOBAL_DEFI, &Params::new()).await?;
        Ok(wrapper.data)
    }

    /// Get public companies' holdings of a coin (`bitcoin` or `ethereum`).
    pub async fn get_companies_public_treasury(
        &self,
        coin_id: &str,
    ) -> Result<CompaniesTreasury, CoinGeckoError> {
        let params = Params::new().path("coin_id", coin_id);
        params.require("coin_id")?;
        self.get(endpoints::COMPANIES_PUBLIC_TREASURY, &params).await
    }
}
