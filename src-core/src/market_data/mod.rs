pub(crate) mod market_data_constants;
pub(crate) mod market_data_errors;
pub(crate) mod market_data_model;
pub(crate) mod market_data_service;
pub(crate) mod market_data_traits;
pub(crate) mod providers;

// Re-export the public interface
pub use market_data_constants::*;
pub use market_data_errors::MarketDataError;
pub use market_data_model::{DataSource, Quote, QuoteBatch};
pub use market_data_service::{normalize_symbols, MarketDataService};
pub use market_data_traits::MarketDataServiceTrait;

// Re-export provider types
pub use providers::market_data_provider::QuoteProvider;
pub use providers::mock_provider::MockProvider;
pub use providers::yahoo_provider::YahooProvider;
pub use providers::ProviderRegistry;
