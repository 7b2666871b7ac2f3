use async_trait::async_trait;

use super::market_data_errors::MarketDataError;
use super::market_data_model::{DataSource, Quote, QuoteBatch};

#[async_trait]
pub trait MarketDataServiceTrait: Send + Sync {
    /// Fetch one quote from the selected source.
    async fn get_quote(&self, symbol: &str, source: DataSource)
        -> Result<Quote, MarketDataError>;

    /// Fetch quotes for every symbol concurrently, waiting for all of them
    /// to settle. One symbol's failure never affects another's result.
    async fn get_quotes(&self, symbols: &[String], source: DataSource) -> QuoteBatch;
}
