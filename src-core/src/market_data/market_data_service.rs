use std::collections::HashSet;

use async_trait::async_trait;
use futures::future::join_all;
use log::warn;

use super::market_data_errors::MarketDataError;
use super::market_data_model::{DataSource, Quote, QuoteBatch};
use super::market_data_traits::MarketDataServiceTrait;
use super::providers::ProviderRegistry;

/// Split a raw `symbols` value into the dispatch list: entries separated by
/// commas and/or whitespace, trimmed, uppercased, empties dropped,
/// duplicates dropped (first occurrence wins).
pub fn normalize_symbols(raw: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut symbols = Vec::new();
    for part in raw.split(|c: char| c == ',' || c.is_whitespace()) {
        let symbol = part.trim().to_uppercase();
        if symbol.is_empty() || !seen.insert(symbol.clone()) {
            continue;
        }
        symbols.push(symbol);
    }
    symbols
}

pub struct MarketDataService {
    registry: ProviderRegistry,
}

impl MarketDataService {
    pub fn new(registry: ProviderRegistry) -> Self {
        MarketDataService { registry }
    }
}

#[async_trait]
impl MarketDataServiceTrait for MarketDataService {
    async fn get_quote(
        &self,
        symbol: &str,
        source: DataSource,
    ) -> Result<Quote, MarketDataError> {
        self.registry.get_provider(source).get_latest_quote(symbol).await
    }

    async fn get_quotes(&self, symbols: &[String], source: DataSource) -> QuoteBatch {
        // Fire every fetch at once and wait for all of them to settle;
        // outcomes are classified per symbol, never fail-fast.
        let fetches: Vec<_> = symbols
            .iter()
            .map(|symbol| {
                let provider = self.registry.get_provider(source);
                async move {
                    provider
                        .get_latest_quote(symbol)
                        .await
                        .map_err(|err| format!("{}: {}", symbol, err))
                }
            })
            .collect();

        let results = join_all(fetches).await;

        let mut prices = Vec::new();
        let mut errors = Vec::new();
        for result in results {
            match result {
                Ok(quote) => prices.push(quote),
                Err(error) => {
                    warn!("Failed to fetch price for {}", error);
                    errors.push(error);
                }
            }
        }

        QuoteBatch {
            total_requested: symbols.len(),
            total_successful: prices.len(),
            total_failed: errors.len(),
            prices,
            errors,
        }
    }
}
