//! CoinGecko REST API endpoint paths.
//!
//! Paths are relative to the configured base URL and may contain `{name}`
//! segments filled from path-declared parameters.

/// Check API server status.
pub const PING: &str = "ping";

/// Current price of coins in other supported currencies.
pub const SIMPLE_PRICE: &str = "simple/price";
/// Current price of tokens on a platform, by contract address.
pub const SIMPLE_TOKEN_PRICE: &str = "simple/token_price/{id}";
/// Supported vs currencies.
pub const SIMPLE_SUPPORTED_VS_CURRENCIES: &str = "simple/supported_vs_currencies";

/// All supported coins (id, name, symbol).
pub const COINS_LIST: &str = "coins/list";
/// Market data for coins, paginated.
pub const COINS_MARKETS: &str = "coins/markets";
/// Full data for one coin.
pub const COIN: &str = "coins/{id}";
/// Tickers for one coin, paginated.
pub const COIN_TICKERS: &str = "coins/{id}/tickers";
/// Historical snapshot for one coin at a given date.
pub const COIN_HISTORY: &str = "coins/{id}/history";
/// Historical chart data for one coin.
pub const COIN_MARKET_CHART: &str = "coins/{id}/market_chart";
/// Historical chart data for one coin within a time range.
pub const COIN_MARKET_CHART_RANGE: &str = "coins/{id}/market_chart/range";
/// OHLC candles for one coin.
pub const COIN_OHLC: &str = "coins/{id}/ohlc";
/// All coin categories (id, name).
pub const COINS_CATEGORIES_LIST: &str = "coins/categories/list";
/// All coin categories with market data.
pub const COINS_CATEGORIES: &str = "coins/categories";

/// All asset platforms.
pub const ASSET_PLATFORMS: &str = "asset_platforms";

/// All exchanges with market data, paginated.
pub const EXCHANGES: &str = "exchanges";
/// All exchanges (id, name).
pub const EXCHANGES_LIST: &str = "exchanges/list";
/// Volume and tickers for one exchange.
pub const EXCHANGE: &str = "exchanges/{id}";
/// Tickers for one exchange, paginated.
pub const EXCHANGE_TICKERS: &str = "exchanges/{id}/tickers";
/// Rolling volume chart for one exchange.
pub const EXCHANGE_VOLUME_CHART: &str = "exchanges/{id}/volume_chart";

/// BTC-relative exchange rates.
pub const EXCHANGE_RATES: &str = "exchange_rates";

/// Search coins, categories and exchanges.
pub const SEARCH: &str = "search";
/// Trending search coins over the last 24 hours.
pub const SEARCH_TRENDING: &str = "search/trending";

/// Global market data.
pub const GLOBAL: &str = "global";
/// Global decentralized-finance market data.
pub const GLOBAL_DEFI: &str = "global/decentralized_finance_defi";

/// Public companies' coin holdings.
pub const COMPANIES_PUBLIC_TREASURY: &str = "companies/public_treasury/{coin_id}";
