//! Endpoint methods, grouped by API resource family.
//!
//! Every method follows the same pattern: declare the call's parameters (a
//! request struct with chainable setters for optional-heavy endpoints,
//! direct arguments for trivial ones), validate the required entries, then
//! delegate to the transport core via
//! [`CoinGeckoClient::get`](crate::CoinGeckoClient::get).

pub mod coins;
pub mod exchanges;
pub mod global;
pub mod search;
pub mod simple;
