use std::sync::Arc;
use std::time::Duration;

use log::info;

use crate::market_data::market_data_constants::{DATA_SOURCE_MOCK, DATA_SOURCE_YAHOO};
use crate::market_data::market_data_errors::MarketDataError;
use crate::market_data::market_data_model::DataSource;
use crate::market_data::providers::market_data_provider::QuoteProvider;
use crate::market_data::providers::mock_provider::MockProvider;
use crate::market_data::providers::yahoo_provider::YahooProvider;

/// Resolves a `DataSource` to the provider that serves it.
pub struct ProviderRegistry {
    yahoo: Arc<dyn QuoteProvider>,
    mock: Arc<dyn QuoteProvider>,
}

impl ProviderRegistry {
    /// Build the standard provider set; `quote_timeout` bounds every
    /// outbound fetch made by the live provider.
    pub fn new(quote_timeout: Duration) -> Result<Self, MarketDataError> {
        let registry = Self::with_providers(
            Arc::new(YahooProvider::new(quote_timeout)?),
            Arc::new(MockProvider::new()?),
        );
        info!(
            "Configured quote providers: {}, {}",
            DATA_SOURCE_YAHOO, DATA_SOURCE_MOCK
        );
        Ok(registry)
    }

    /// Assemble a registry from explicit providers.
    pub fn with_providers(
        yahoo: Arc<dyn QuoteProvider>,
        mock: Arc<dyn QuoteProvider>,
    ) -> Self {
        ProviderRegistry { yahoo, mock }
    }

    pub fn get_provider(&self, source: DataSource) -> Arc<dyn QuoteProvider> {
        match source {
            DataSource::Yahoo => self.yahoo.clone(),
            DataSource::Mock => self.mock.clone(),
        }
    }
}
