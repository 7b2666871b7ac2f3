use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use chrono::{TimeZone, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::market_data::market_data_constants::{
    DEFAULT_CURRENCY, MOCK_BASE_PRICES, MOCK_CHANGE_PERCENT_BOUND, MOCK_FALLBACK_BASE,
    MOCK_FALLBACK_PER_CHAR, MOCK_PRICE_VARIATION,
};
use crate::market_data::market_data_errors::MarketDataError;
use crate::market_data::market_data_model::{DataSource, Quote};
use crate::market_data::providers::market_data_provider::QuoteProvider;

/// Synthesizes quotes without touching the network. The RNG is seeded from
/// (symbol, clock second), so repeated lookups within the same second return
/// the same quote.
pub struct MockProvider;

impl MockProvider {
    pub fn new() -> Result<Self, MarketDataError> {
        Ok(MockProvider)
    }

    pub fn base_price(symbol: &str) -> f64 {
        MOCK_BASE_PRICES
            .iter()
            .find(|(known, _)| *known == symbol)
            .map(|(_, base)| *base)
            .unwrap_or_else(|| MOCK_FALLBACK_BASE + symbol.len() as f64 * MOCK_FALLBACK_PER_CHAR)
    }

    fn synthesize(symbol: &str, epoch_seconds: i64) -> Quote {
        let mut hasher = DefaultHasher::new();
        symbol.hash(&mut hasher);
        epoch_seconds.hash(&mut hasher);
        let mut rng = StdRng::seed_from_u64(hasher.finish());

        let base = Self::base_price(symbol);
        let variation = rng.gen_range(-MOCK_PRICE_VARIATION..=MOCK_PRICE_VARIATION);
        let price = round_cents(base * (1.0 + variation));

        let change_percent =
            rng.gen_range(-MOCK_CHANGE_PERCENT_BOUND..=MOCK_CHANGE_PERCENT_BOUND);
        let change = round_cents(price * change_percent / 100.0);

        Quote {
            symbol: symbol.to_string(),
            price,
            currency: DEFAULT_CURRENCY.to_string(),
            timestamp: Utc
                .timestamp_opt(epoch_seconds, 0)
                .single()
                .unwrap_or_default(),
            source: DataSource::Mock,
            change_24h: Some(change),
            change_percent_24h: Some(round_cents(change_percent)),
        }
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[async_trait::async_trait]
impl QuoteProvider for MockProvider {
    async fn get_latest_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
        Ok(MockProvider::synthesize(symbol, Utc::now().timestamp()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn price_stays_within_five_percent_of_base() {
        let provider = MockProvider::new().unwrap();
        for symbol in ["AAPL", "TSLA", "GOOGL", "ZZZZ", "Q"] {
            let quote = provider.get_latest_quote(symbol).await.unwrap();
            let base = MockProvider::base_price(symbol);
            // Rounding to cents can nudge the price past the raw bound by
            // at most half a cent.
            assert!(quote.price >= base * (1.0 - MOCK_PRICE_VARIATION) - 0.005);
            assert!(quote.price <= base * (1.0 + MOCK_PRICE_VARIATION) + 0.005);
            assert_eq!(quote.symbol, symbol);
            assert_eq!(quote.source, DataSource::Mock);
            assert_eq!(quote.currency, "USD");
        }
    }

    #[test]
    fn unknown_symbols_derive_base_from_length() {
        assert_eq!(MockProvider::base_price("AAPL"), 150.0);
        assert_eq!(MockProvider::base_price("ZZZZ"), 140.0);
        assert_eq!(MockProvider::base_price("ABCDEF"), 160.0);
    }

    #[test]
    fn same_symbol_and_second_produce_the_same_quote() {
        let a = MockProvider::synthesize("AAPL", 1_700_000_000);
        let b = MockProvider::synthesize("AAPL", 1_700_000_000);
        assert_eq!(a.price, b.price);
        assert_eq!(a.change_24h, b.change_24h);
        assert_eq!(a.change_percent_24h, b.change_percent_24h);

        let c = MockProvider::synthesize("AAPL", 1_700_000_001);
        // A different second reseeds the generator; prices are allowed to
        // collide but the timestamps must not.
        assert_ne!(a.timestamp, c.timestamp);
    }

    #[test]
    fn change_fields_are_bounded() {
        let quote = MockProvider::synthesize("TSLA", 1_700_000_000);
        let pct = quote.change_percent_24h.unwrap();
        assert!(pct.abs() <= MOCK_CHANGE_PERCENT_BOUND);
        assert!(quote.change_24h.is_some());
    }
}
