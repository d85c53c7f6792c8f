use coingecko_api_client::CoinGeckoClient;
use coingecko_api_client::api::simple::PriceRequest;

fn live_tests_enabled() -> bool {
    std::env::var("COINGECKO_LIVE_TESTS").ok().as_deref() == Some("1")
}

#[tokio::test]
#[ignore]
async fn live_public_smoke() -> Result<(), Box<dyn std::error::Error>> {
    if !live_tests_enabled() {
        return Ok(());
    }
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let client = CoinGeckoClient::new();

    let pong = client.ping().await?;
    assert!(!pong.gecko_says.is_empty());

    let request = PriceRequest::new(["bitcoin"], ["usd"]);
    let prices = client.get_price(&request).await?;
    assert!(prices["bitcoin"]["usd"] > 0.0);

    let currencies = client.get_supported_vs_currencies().await?;
    assert!(currencies.iter().any(|c| c == "usd"));

    Ok(())
}
