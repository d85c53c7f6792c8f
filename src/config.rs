//! Client configuration and retry policy values.
//!
//! Both values are plain data: they are created by the caller (or defaulted),
//! handed to the client at construction and never mutated afterwards. There
//! is no process-wide default to patch.

use std::collections::{BTreeSet, HashSet};
use std::time::Duration;

use reqwest::Method;

/// Default base URL for the public CoinGecko v3 API.
///
/// Ends with a path separator: relative endpoint paths are appended to the
/// base URL verbatim, without normalization.
pub const DEFAULT_BASE_URL: &str = "https://api.coingecko.com/api/v3/";

/// Retry policy for idempotent requests.
///
/// The policy only applies to requests whose method is in
/// [`retryable_methods`](Self::retryable_methods); every other request fails
/// after a single attempt. `max_retries` counts *additional* attempts after
/// the original request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum additional attempts after the first failure.
    pub max_retries: u32,
    /// Response status codes that trigger a retry.
    pub retryable_statuses: BTreeSet<u16>,
    /// HTTP methods the policy applies to.
    pub retryable_methods: HashSet<Method>,
    /// Lower bound of the exponential backoff between attempts.
    pub min_retry_interval: Duration,
    /// Upper bound of the exponential backoff between attempts.
    pub max_retry_interval: Duration,
}

impl RetryPolicy {
    /// Create a policy with the default status/method sets and a custom
    /// retry budget.
    pub fn new(max_retries: u32) -> Self {
        Self {
            max_retries,
            ..Default::default()
        }
    }

    /// A policy that never retries.
    pub fn none() -> Self {
        Self::new(0)
    }

    /// Replace the retryable status-code set.
    pub fn statuses(mut self, statuses: impl IntoIterator<Item = u16>) -> Self {
        self.retryable_statuses = statuses.into_iter().collect();
        self
    }

    /// Replace the retryable method set.
    pub fn methods(mut self, methods: impl IntoIterator<Item = Method>) -> Self {
        self.retryable_methods = methods.into_iter().collect();
        self
    }

    /// Set the backoff bounds between attempts.
    pub fn retry_bounds(mut self, min: Duration, max: Duration) -> Self {
        self.min_retry_interval = min;
        self.max_retry_interval = max;
        self
    }

    /// Whether requests with this method are re-issued on retryable failures.
    pub fn applies_to(&self, method: &Method) -> bool {
        self.max_retries > 0 && self.retryable_methods.contains(method)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            retryable_statuses: BTreeSet::from([429, 500, 502, 503, 504]),
            retryable_methods: HashSet::from([Method::GET, Method::HEAD, Method::OPTIONS]),
            min_retry_interval: Duration::from_millis(500),
            max_retry_interval: Duration::from_secs(10),
        }
    }
}

/// Immutable transport configuration, supplied at client construction.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL the relative endpoint paths are appended to.
    ///
    /// Must end with `/`; the client performs no separator normalization.
    pub base_url: String,
    /// Retry policy for idempotent requests.
    pub retry_policy: RetryPolicy,
    /// Reuse one connection pool across calls (the default). When `false`,
    /// no connection is kept alive between calls.
    pub persistent_session: bool,
    /// Per-request deadline. No deadline is enforced unless set.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            retry_policy: RetryPolicy::default(),
            persistent_session: true,
            timeout: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_retry_policy() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_retries, 3);
        assert_eq!(
            policy.retryable_statuses,
            BTreeSet::from([429, 500, 502, 503, 504])
        );
        assert!(policy.applies_to(&Method::GET));
        assert!(policy.applies_to(&Method::HEAD));
        assert!(!policy.applies_to(&Method::POST));
        assert!(policy.min_retry_interval < policy.max_retry_interval);
    }

    #[test]
    fn test_disabled_policy_applies_to_nothing() {
        let policy = RetryPolicy::none();
        assert!(!policy.applies_to(&Method::GET));
    }

    #[test]
    fn test_policy_setters() {
        let policy = RetryPolicy::new(5)
            .statuses([503])
            .methods([Method::GET])
            .retry_bounds(Duration::from_millis(10), Duration::from_millis(100));
        assert_eq!(policy.max_retries, 5);
        assert_eq!(policy.retryable_statuses, BTreeSet::from([503]));
        assert!(!policy.applies_to(&Method::HEAD));
        assert_eq!(policy.min_retry_interval, Duration::from_millis(10));
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.base_url.ends_with('/'));
        assert!(config.persistent_session);
        assert!(config.timeout.is_none());
    }
}
