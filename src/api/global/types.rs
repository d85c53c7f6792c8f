//! Types for the global market-data and treasury endpoints.

use std::collections::HashMap;

use serde::Deserialize;

/// Envelope of `global`; the payload lives under `data`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct GlobalDataWrapper {
    pub data: GlobalData,
}

/// Global cryptocurrency market data.
#[derive(Debug, Clone, Deserialize)]
pub struct GlobalData {
    pub active_cryptocurrencies: Option<u64>,
    pub upcoming_icos: Option<u64>,
    pub ongoing_icos: Option<u64>,
    pub ended_icos: Option<u64>,
    pub markets: Option<u64>,
    pub total_market_cap: Option<HashMap<String, f64>>,
    pub total_volume: Option<HashMap<String, f64>>,
    pub market_cap_percentage: Option<HashMap<String, f64>>,
    pub market_cap_change_percentage_24h_usd: Option<f64>,
    pub updated_at: Option<u64>,
}

/// Envelope of `global/decentralized_finance_defi`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct GlobalDefiWrapper {
    pub data: GlobalDefiData,
}

/// Global decentralized-finance market data.
///
/// The API serializes most of these figures as decimal strings.
#[derive(Debug, Clone, Deserialize)]
pub struct GlobalDefiData {
    pub defi_market_cap: Option<String>,
    pub eth_market_cap: Option<String>,
    pub defi_to_eth_ratio: Option<String>,
    pub trading_volume_24h: Option<String>,
    pub defi_dominance: Option<String>,
    pub top_coin_name: Option<String>,
    pub top_coin_defi_dominance: Option<f64>,
}

/// Public companies' holdings of one coin, from
/// `companies/public_treasury/{coin_id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct CompaniesTreasury {
    pub total_holdings: Option<f64>,
    pub total_value_usd: Option<f64>,
    pub market_cap_dominance: Option<f64>,
    #[serde(default)]
    pub companies: Vec<TreasuryCompany>,
}

/// One company's holdings.
#[derive(Debug, Clone, Deserialize)]
pub struct TreasuryCompany {
    pub name: String,
    pub symbol: Option<String>,
    pub country: Option<String>,
    pub total_holdings: Option<f64>,
    pub total_entry_value_usd: Option<f64>,
    pub total_current_value_usd: Option<f64>,
    pub percentage_of_total_supply: Option<f64>,
}
