//! # CoinGecko Client
//!
//! An async Rust client library for the public CoinGecko v3 market-data
//! REST API.
//!
//! ## Features
//!
//! - Typed endpoint methods for the public market-data surface
//! - Automatic retry with exponential backoff for transient failures
//! - Configurable retry policy, base URL and session behavior
//! - Structured errors carrying the HTTP status and decoded error body
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use coingecko_api_client::CoinGeckoClient;
//! use coingecko_api_client::api::simple::PriceRequest;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CoinGeckoClient::new();
//!     let request = PriceRequest::new(["bitcoin", "ethereum"], ["usd"]);
//!     let prices = client.get_price(&request).await?;
//!     println!("{:?}", prices.get("bitcoin"));
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod params;

// Re-export commonly used types at crate root
pub use client::{CoinGeckoClient, CoinGeckoClientBuilder};
pub use config::{ClientConfig, RetryPolicy};
pub use error::CoinGeckoError;
pub use params::{Params, ParamValue};

/// Result type alias using CoinGeckoError
pub type Result<T> = std::result::Result<T, CoinGeckoError>;
