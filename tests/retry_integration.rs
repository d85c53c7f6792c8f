use std::time::Duration;

use reqwest::Method;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use coingecko_api_client::api::simple::PriceRequest;
use coingecko_api_client::error::{CoinGeckoError, ErrorBody};
use coingecko_api_client::params::Params;
use coingecko_api_client::{CoinGeckoClient, RetryPolicy, endpoints};

/// A client with the default status/method sets but test-friendly backoff.
fn build_client(server: &MockServer, max_retries: u32) -> CoinGeckoClient {
    let policy = RetryPolicy::new(max_retries)
        .retry_bounds(Duration::from_millis(10), Duration::from_millis(50));
    CoinGeckoClient::builder()
        .base_url(format!("{}/", server.uri()))
        .retry_policy(policy)
        .build()
}

#[tokio::test]
async fn test_retryable_status_then_success() {
    let server = MockServer::start().await;
    let pong = serde_json::json!({ "gecko_says": "(V3) To the Moon!" });

    // Two transient failures, then success on the third attempt.
    Mock::given(method("GET"))
        .and(path("/ping"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pong))
        .mount(&server)
        .await;

    let client = build_client(&server, 3);
    let response = client.ping().await.unwrap();
    assert_eq!(response.gecko_says, "(V3) To the Moon!");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 3);
}

#[tokio::test]
async fn test_rate_limit_is_retried() {
    let server = MockServer::start().await;
    let body = serde_json::json!({ "bitcoin": { "usd": 67000.0 } });

    Mock::given(method("GET"))
        .and(path("/simple/price"))
        .respond_with(ResponseTemplate::new(429))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/simple/price"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let client = build_client(&server, 2);
    let request = PriceRequest::new(["bitcoin"], ["usd"]);
    let prices = client.get_price(&request).await.unwrap();
    assert_eq!(prices["bitcoin"]["usd"], 67000.0);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
}

#[tokio::test]
async fn test_budget_exhausted_surfaces_final_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ping"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let client = build_client(&server, 2);
    let error = client.ping().await.unwrap_err();

    match error {
        CoinGeckoError::Api(api) => {
            assert_eq!(api.status, 503);
            assert!(api.is_server_error());
        }
        other => panic!("expected Api error, got {other:?}"),
    }

    // Original attempt plus two retries.
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 3);
}

#[tokio::test]
async fn test_non_retryable_status_fails_after_one_attempt() {
    let server = MockServer::start().await;
    let body = serde_json::json!({ "error": "coin not found" });

    Mock::given(method("GET"))
        .and(path("/coins/doesnotexist"))
        .respond_with(ResponseTemplate::new(404).set_body_json(body))
        .mount(&server)
        .await;

    let client = build_client(&server, 3);
    let request = coingecko_api_client::api::coins::CoinRequest::new("doesnotexist");
    let error = client.get_coin_by_id(&request).await.unwrap_err();

    match error {
        CoinGeckoError::Api(api) => {
            assert_eq!(api.status, 404);
            assert_eq!(api.message(), Some("coin not found"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
}

#[tokio::test]
async fn test_non_retryable_method_fails_after_one_attempt() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/ping"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = build_client(&server, 3);
    let result: Result<serde_json::Value, _> = client
        .request(Method::DELETE, endpoints::PING, &Params::new())
        .await;

    assert!(matches!(result, Err(CoinGeckoError::Api(api)) if api.status == 500));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
}

#[tokio::test]
async fn test_undecodable_error_body_kept_raw() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ping"))
        .respond_with(
            ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"),
        )
        .mount(&server)
        .await;

    let client = CoinGeckoClient::builder()
        .base_url(format!("{}/", server.uri()))
        .retry_policy(RetryPolicy::none())
        .build();
    let error = client.ping().await.unwrap_err();

    match error {
        CoinGeckoError::Api(api) => {
            assert_eq!(api.status, 502);
            assert!(!api.is_decoded());
            assert_eq!(api.body, ErrorBody::Raw("<html>Bad Gateway</html>".to_string()));
        }
        other => panic!("expected Api error, got {other:?}"),
    }

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
}

#[tokio::test]
async fn test_custom_status_set_is_honored() {
    let server = MockServer::start().await;

    // 500 is removed from the retryable set, so it must fail immediately.
    Mock::given(method("GET"))
        .and(path("/ping"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let policy = RetryPolicy::new(3)
        .statuses([429])
        .retry_bounds(Duration::from_millis(10), Duration::from_millis(50));
    let client = CoinGeckoClient::builder()
        .base_url(format!("{}/", server.uri()))
        .retry_policy(policy)
        .build();

    let error = client.ping().await.unwrap_err();
    assert!(matches!(error, CoinGeckoError::Api(api) if api.status == 500));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
}
