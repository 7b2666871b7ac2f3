use pricefeed_core::groups::StockGroup;
use pricefeed_core::market_data::{Quote, QuoteBatch};
use serde::{Deserialize, Serialize};

/// Wire form of a quote; `timestamp` is epoch seconds.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PriceResponse {
    pub symbol: String,
    pub price: f64,
    pub currency: String,
    pub timestamp: i64,
    pub source: String,
    pub change_24h: Option<f64>,
    pub change_percent_24h: Option<f64>,
}

impl From<Quote> for PriceResponse {
    fn from(q: Quote) -> Self {
        Self {
            symbol: q.symbol,
            price: q.price,
            currency: q.currency,
            timestamp: q.timestamp.timestamp(),
            source: q.source.as_str().to_string(),
            change_24h: q.change_24h,
            change_percent_24h: q.change_percent_24h,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PricesResponse {
    pub prices: Vec<PriceResponse>,
    pub errors: Vec<String>,
    pub total_requested: usize,
    pub total_successful: usize,
    pub total_failed: usize,
}

impl From<QuoteBatch> for PricesResponse {
    fn from(batch: QuoteBatch) -> Self {
        Self {
            prices: batch.prices.into_iter().map(PriceResponse::from).collect(),
            errors: batch.errors,
            total_requested: batch.total_requested,
            total_successful: batch.total_successful,
            total_failed: batch.total_failed,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GroupResponse {
    pub name: String,
    pub symbols: Vec<String>,
    pub description: String,
}

impl From<StockGroup> for GroupResponse {
    fn from(g: StockGroup) -> Self {
        Self {
            name: g.name,
            symbols: g.symbols,
            description: g.description,
        }
    }
}
