use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use pricefeed_core::groups::GroupsService;
use pricefeed_core::market_data::{
    MarketDataError, MarketDataService, MockProvider, ProviderRegistry, Quote, QuoteProvider,
};
use pricefeed_server::{api::app_router, build_state, config::Config, AppState};

fn app() -> Router {
    let config = Config::from_env();
    let state = build_state(&config).unwrap();
    app_router(state, &config)
}

/// Stands in for the live upstream: symbols starting with "BAD" time out,
/// everything else resolves like the mock source.
struct FlakyProvider;

#[async_trait::async_trait]
impl QuoteProvider for FlakyProvider {
    async fn get_latest_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
        if symbol.starts_with("BAD") {
            return Err(MarketDataError::Timeout);
        }
        MockProvider::new()?.get_latest_quote(symbol).await
    }
}

fn app_with_flaky_upstream() -> Router {
    let config = Config::from_env();
    let registry = ProviderRegistry::with_providers(
        Arc::new(FlakyProvider),
        Arc::new(MockProvider::new().unwrap()),
    );
    let state = Arc::new(AppState {
        market_data_service: Arc::new(MarketDataService::new(registry)),
        groups_service: Arc::new(GroupsService::new()),
    });
    app_router(state, &config)
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

#[tokio::test]
async fn single_mock_price_succeeds() {
    let (status, body) = get_json(app(), "/price/AAPL?source=mock").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["symbol"], "AAPL");
    assert_eq!(body["source"], "mock");
    assert_eq!(body["currency"], "USD");

    let price = body["price"].as_f64().unwrap();
    assert!((142.49..=157.51).contains(&price), "price {} out of range", price);
}

#[tokio::test]
async fn path_symbol_is_uppercased() {
    let (status, body) = get_json(app(), "/price/aapl?source=mock").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["symbol"], "AAPL");
}

#[tokio::test]
async fn multi_mock_prices_report_totals() {
    let (status, body) = get_json(app(), "/prices?symbols=AAPL,TSLA,MSFT&source=mock").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_requested"], 3);
    assert_eq!(body["total_successful"], 3);
    assert_eq!(body["total_failed"], 0);
    assert_eq!(body["prices"].as_array().unwrap().len(), 3);
    assert!(body["errors"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn missing_symbols_parameter_is_rejected() {
    let (status, body) = get_json(app(), "/prices").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "MISSING_SYMBOLS");
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn blank_symbols_parameter_is_rejected() {
    let (status, body) = get_json(app(), "/prices?symbols=%20,%20&source=mock").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "MISSING_SYMBOLS");
}

#[tokio::test]
async fn messy_separators_normalize_to_two_symbols() {
    let (status, body) = get_json(app(), "/prices?symbols=AAPL,%20,%20TSLA&source=mock").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_requested"], 2);
    assert_eq!(body["total_successful"], 2);

    let mut symbols: Vec<&str> = body["prices"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["symbol"].as_str().unwrap())
        .collect();
    symbols.sort_unstable();
    assert_eq!(symbols, ["AAPL", "TSLA"]);
}

#[tokio::test]
async fn one_failing_symbol_does_not_sink_the_batch() {
    let (status, body) =
        get_json(app_with_flaky_upstream(), "/prices?symbols=AAPL,BADSYM&source=yahoo").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_requested"], 2);
    assert_eq!(body["total_successful"], 1);
    assert_eq!(body["total_failed"], 1);

    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].as_str().unwrap().starts_with("BADSYM: "));
    assert_eq!(body["prices"][0]["symbol"], "AAPL");
}

#[tokio::test]
async fn all_failures_reject_the_batch() {
    let (status, body) =
        get_json(app_with_flaky_upstream(), "/prices?symbols=BADONE,BADTWO&source=yahoo").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "ALL_PRICES_FAILED");
}

#[tokio::test]
async fn single_upstream_failure_maps_to_bad_request() {
    let (status, body) = get_json(app_with_flaky_upstream(), "/price/BADSYM?source=yahoo").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "PRICE_FETCH_FAILED");
    assert!(body["message"].as_str().unwrap().contains("BADSYM"));
}

#[tokio::test]
async fn unknown_source_degrades_to_mock() {
    let (status, body) = get_json(app(), "/price/AAPL?source=alpha_vantage").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "mock");
}
