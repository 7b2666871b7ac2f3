use async_trait::async_trait;

use crate::market_data::market_data_errors::MarketDataError;
use crate::market_data::market_data_model::Quote;

#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Return the current quote for `symbol`, or an error describing the
    /// upstream failure. Implementations must bound their own request time.
    async fn get_latest_quote(&self, symbol: &str) -> Result<Quote, MarketDataError>;
}
