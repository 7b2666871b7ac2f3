use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::HeaderValue,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use pricefeed_core::market_data::{normalize_symbols, DataSource};

use crate::{
    config::Config,
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::{GroupResponse, PriceResponse, PricesResponse},
};

const SERVICE_NAME: &str = "pricefeed-server";

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "service": SERVICE_NAME,
        "timestamp": chrono::Utc::now().timestamp(),
    }))
}

async fn list_groups(
    State(state): State<Arc<AppState>>,
) -> Json<BTreeMap<String, GroupResponse>> {
    let groups = state
        .groups_service
        .all()
        .iter()
        .map(|(id, group)| (id.to_string(), GroupResponse::from(group.clone())))
        .collect();
    Json(groups)
}

fn resolve_source(param: Option<&str>) -> DataSource {
    match param {
        None => DataSource::Yahoo,
        Some(raw) => {
            let source = DataSource::from(raw);
            if !raw.eq_ignore_ascii_case(source.as_str()) {
                tracing::warn!("Unknown source: {}, falling back to mock", raw);
            }
            source
        }
    }
}

#[derive(Debug, Deserialize)]
struct SourceQuery {
    source: Option<String>,
}

async fn get_price(
    Path(symbol): Path<String>,
    Query(params): Query<SourceQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<PriceResponse>> {
    let symbol = symbol.trim().to_uppercase();
    let source = resolve_source(params.source.as_deref());

    tracing::info!("Fetching price for {} from {}", symbol, source.as_str());

    match state.market_data_service.get_quote(&symbol, source).await {
        Ok(quote) => Ok(Json(PriceResponse::from(quote))),
        Err(err) => {
            tracing::warn!("Failed to fetch price for {}: {}", symbol, err);
            Err(ApiError::PriceFetchFailed(format!(
                "Failed to fetch price for {}: {}",
                symbol, err
            )))
        }
    }
}

#[derive(Debug, Deserialize)]
struct PricesQuery {
    symbols: Option<String>,
    source: Option<String>,
}

async fn get_prices(
    Query(params): Query<PricesQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<PricesResponse>> {
    let raw = params.symbols.ok_or_else(|| {
        ApiError::MissingSymbols(
            "Missing 'symbols' parameter. Use comma-separated values like: ?symbols=AAPL,TSLA,MSFT"
                .to_string(),
        )
    })?;

    let symbols = normalize_symbols(&raw);
    if symbols.is_empty() {
        return Err(ApiError::MissingSymbols(
            "No valid symbols in 'symbols' parameter".to_string(),
        ));
    }

    let source = resolve_source(params.source.as_deref());
    tracing::info!(
        "Fetching prices for {} symbols from {}",
        symbols.len(),
        source.as_str()
    );

    let batch = state.market_data_service.get_quotes(&symbols, source).await;
    if batch.total_successful == 0 {
        return Err(ApiError::AllPricesFailed(format!(
            "Failed to fetch any prices. Errors: {}",
            batch.errors.join(", ")
        )));
    }

    Ok(Json(PricesResponse::from(batch)))
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .map(|o| o.parse::<HeaderValue>().unwrap())
            .collect::<Vec<_>>();
        CorsLayer::new().allow_origin(origins)
    };

    Router::new()
        .route("/health", get(health))
        .route("/groups", get(list_groups))
        .route("/price/{symbol}", get(get_price))
        .route("/prices", get(get_prices))
        .with_state(state)
        .layer(cors)
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}
