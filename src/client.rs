//! CoinGecko REST API client implementation.

use std::collections::BTreeSet;

use reqwest::Method;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::policies::ExponentialBackoff;
use reqwest_retry::{
    RetryTransientMiddleware, Retryable, RetryableStrategy, default_on_request_failure,
};
use reqwest_tracing::TracingMiddleware;

use crate::config::{ClientConfig, RetryPolicy};
use crate::error::{ApiError, CoinGeckoError};
use crate::params::{Params, build_payload, fill_path};

/// The CoinGecko REST API client.
///
/// The client owns one connection pool for its lifetime, composes endpoint
/// URLs from the configured base URL, executes requests with automatic
/// retries for retryable methods and classifies non-success responses into
/// [`CoinGeckoError`]. It is cheap to clone and safe to share across tasks.
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
///     let request = PriceRequest::new(["bitcoin", "ethereum"], ["usd"]);
///     let prices = client.get_price(&request).await?;
///     println!("{:?}", prices.get("bitcoin"));
///     Ok(())
/// }
/// ```
///
/// Configuration is supplied at construction and read-only afterwards:
///
/// ```rust,no_run
/// use std::time::Duration;
/// use coingecko_api_client::{CoinGeckoClient, RetryPolicy};
///
/// let client = CoinGeckoClient::builder()
///     .retry_policy(RetryPolicy::new(5))
///     .timeout(Duration::from_secs(30))
///     .build();
/// ```
#[derive(Clone)]
pub struct CoinGeckoClient {
    /// Requests with a retryable method go through this client.
    http_retrying: ClientWithMiddleware,
    /// Everything else: same pool, no retry middleware.
    http_single: ClientWithMiddleware,
    config: ClientConfig,
}

impl CoinGeckoClient {
    /// Create a new client with default settings.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new client builder.
    pub fn builder() -> CoinGeckoClientBuilder {
        CoinGeckoClientBuilder::new()
    }

    /// The active configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Execute a GET request against a relative path template.
    ///
    /// This and [`request`](Self::request) are the entry points every
    /// endpoint method delegates to.
    pub async fn get<T>(&self, path: &str, params: &Params) -> Result<T, CoinGeckoError>
    where
        T: serde::de::DeserializeOwned,
    {
        self.request(Method::GET, path, params).await
    }

    /// Execute a request against a relative path template.
    ///
    /// Public so that endpoints not covered by the typed surface can still
    /// be reached. Path-declared entries of `params` fill `{name}` template
    /// segments; the rest are shaped into the query string by
    /// [`build_payload`].
    pub async fn request<T>(
        &self,
        method: Method,
        path: &str,
        params: &Params,
    ) -> Result<T, CoinGeckoError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = self.endpoint_url(path, params)?;
        let payload = build_payload(params, None);
        let client = if self.config.retry_policy.applies_to(&method) {
            &self.http_retrying
        } else {
            &self.http_single
        };
        tracing::debug!(%method, %url, "sending API request");
        let response = client.request(method, &url).query(&payload).send().await?;
        self.parse_response(response).await
    }

    /// Compose the full endpoint URL: configured base URL concatenated with
    /// the filled relative path. The base URL must already end with a path
    /// separator; no normalization is performed.
    fn endpoint_url(&self, template: &str, params: &Params) -> Result<String, CoinGeckoError> {
        Ok(format!(
            "{}{}",
            self.config.base_url,
            fill_path(template, params)?
        ))
    }

    /// Decode the final response, classifying non-success statuses.
    async fn parse_response<T>(&self, response: reqwest::Response) -> Result<T, CoinGeckoError>
    where
        T: serde::de::DeserializeOwned,
    {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let error = ApiError::from_body(status.as_u16(), body);
            tracing::error!(status = status.as_u16(), error = %error, "API request failed");
            return Err(CoinGeckoError::Api(error));
        }

        Ok(serde_json::from_str(&body)?)
    }
}

impl Default for CoinGeckoClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CoinGeckoClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinGeckoClient")
            .field("base_url", &self.config.base_url)
            .field("persistent_session", &self.config.persistent_session)
            .finish()
    }
}

/// Builder for [`CoinGeckoClient`].
pub struct CoinGeckoClientBuilder {
    config: ClientConfig,
    user_agent: Option<String>,
}

impl CoinGeckoClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            config: ClientConfig::default(),
            user_agent: None,
        }
    }

    /// Replace the whole configuration at once.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the base URL (useful for testing with a mock server).
    ///
    /// Must end with `/`; relative endpoint paths are appended verbatim.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the retry policy for idempotent requests.
    pub fn retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.config.retry_policy = policy;
        self
    }

    /// Keep one connection pool alive across calls (default `true`). When
    /// disabled, every call reconnects.
    pub fn persistent_session(mut self, persistent: bool) -> Self {
        self.config.persistent_session = persistent;
        self
    }

    /// Enforce a per-request deadline.
    pub fn timeout(mut self, timeout: std::time::Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> CoinGeckoClient {
        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("coingecko-api-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("coingecko-api-client"));
        headers.insert(USER_AGENT, header_value);

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = self.config.timeout {
            builder = builder.timeout(timeout);
        }
        if !self.config.persistent_session {
            // One-shot mode: no idle connection survives between calls.
            builder = builder.pool_max_idle_per_host(0);
        }
        let reqwest_client = builder.build().unwrap_or_else(|_| reqwest::Client::new());

        let policy = &self.config.retry_policy;
        let backoff = ExponentialBackoff::builder()
            .retry_bounds(policy.min_retry_interval, policy.max_retry_interval)
            .build_with_max_retries(policy.max_retries);
        let strategy = StatusRetryStrategy {
            statuses: policy.retryable_statuses.clone(),
        };

        // Two middleware stacks over one shared pool: method gating picks
        // between them per request.
        let http_retrying = ClientBuilder::new(reqwest_client.clone())
            .with(TracingMiddleware::default())
            .with(RetryTransientMiddleware::new_with_policy_and_strategy(
                backoff, strategy,
            ))
            .build();
        let http_single = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        CoinGeckoClient {
            http_retrying,
            http_single,
            config: self.config,
        }
    }
}

impl Default for CoinGeckoClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Retries the configured status set plus transient network failures
/// (connection resets, timeouts); every other outcome is final.
struct StatusRetryStrategy {
    statuses: BTreeSet<u16>,
}

impl RetryableStrategy for StatusRetryStrategy {
    fn handle(
        &self,
        res: &Result<reqwest::Response, reqwest_middleware::Error>,
    ) -> Option<Retryable> {
        match res {
            Ok(response) if self.statuses.contains(&response.status().as_u16()) => {
                Some(Retryable::Transient)
            }
            Ok(_) => None,
            Err(error) => default_on_request_failure(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url_is_plain_concatenation() {
        let client = CoinGeckoClient::builder()
            .base_url("https://example.test/api/v3/")
            .build();
        let url = client.endpoint_url("simple/price", &Params::new()).unwrap();
        assert_eq!(url, "https://example.test/api/v3/simple/price");
    }

    #[test]
    fn test_endpoint_url_fills_path_template() {
        let client = CoinGeckoClient::builder()
            .base_url("https://example.test/")
            .build();
        let params = Params::new().path("id", "bitcoin");
        let url = client
            .endpoint_url("coins/{id}/market_chart/range", &params)
            .unwrap();
        assert_eq!(url, "https://example.test/coins/bitcoin/market_chart/range");
    }

    #[test]
    fn test_endpoint_url_missing_path_param() {
        let client = CoinGeckoClient::new();
        let err = client.endpoint_url("coins/{id}", &Params::new()).unwrap_err();
        assert!(matches!(err, CoinGeckoError::MissingArgument(name) if name == "id"));
    }

    #[test]
    fn test_builder_defaults() {
        let client = CoinGeckoClient::new();
        assert_eq!(client.config().base_url, crate::config::DEFAULT_BASE_URL);
        assert!(client.config().persistent_session);
        assert_eq!(client.config().retry_policy.max_retries, 3);
    }
}
