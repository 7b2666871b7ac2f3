use std::time::Duration;

use chrono::Utc;
use log::debug;
use reqwest::{header, Client};

use super::models::ChartResponse;
use crate::market_data::market_data_constants::DEFAULT_CURRENCY;
use crate::market_data::market_data_errors::MarketDataError;
use crate::market_data::market_data_model::{DataSource, Quote};
use crate::market_data::providers::market_data_provider::QuoteProvider;

const CHART_BASE_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";
const USER_AGENT: &str = "pricefeed/0.1";

pub struct YahooProvider {
    client: Client,
}

impl YahooProvider {
    /// Build the provider with a bounded request timeout. A timed-out fetch
    /// surfaces as `MarketDataError::Timeout`, a normal per-symbol failure.
    pub fn new(timeout: Duration) -> Result<Self, MarketDataError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(MarketDataError::from)?;
        Ok(YahooProvider { client })
    }

    async fn fetch_chart(&self, symbol: &str) -> Result<ChartResponse, MarketDataError> {
        let url = format!("{}/{}", CHART_BASE_URL, symbol);

        let response = self
            .client
            .get(&url)
            .header(header::USER_AGENT, USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MarketDataError::HttpStatus(status));
        }

        let body = response.text().await?;
        serde_json::from_str::<ChartResponse>(&body)
            .map_err(|err| MarketDataError::InvalidData(err.to_string()))
    }
}

/// Validate the chart payload shape and normalize it into a `Quote`.
fn quote_from_chart(symbol: &str, chart: ChartResponse) -> Result<Quote, MarketDataError> {
    let result = match chart.chart.result.as_deref().and_then(|results| results.first()) {
        Some(result) => result,
        None => {
            // The upstream reports lookup failures inside the payload.
            if let Some(error) = chart.chart.error {
                return Err(MarketDataError::ProviderError(error.to_string()));
            }
            return Err(MarketDataError::MissingField("chart.result"));
        }
    };

    let meta = result
        .meta
        .as_ref()
        .ok_or(MarketDataError::MissingField("chart.result.meta"))?;

    let price = meta
        .regular_market_price
        .filter(|price| price.is_finite())
        .ok_or(MarketDataError::MissingField("regularMarketPrice"))?;

    Ok(Quote {
        symbol: symbol.to_string(),
        price,
        currency: meta
            .currency
            .clone()
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
        timestamp: Utc::now(),
        source: DataSource::Yahoo,
        change_24h: meta.regular_market_change,
        change_percent_24h: meta.regular_market_change_percent,
    })
}

#[async_trait::async_trait]
impl QuoteProvider for YahooProvider {
    async fn get_latest_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
        let chart = self.fetch_chart(symbol).await?;
        let quote = quote_from_chart(symbol, chart)?;
        debug!("{}: regularMarketPrice {}", symbol, quote.price);
        Ok(quote)
    }
}
