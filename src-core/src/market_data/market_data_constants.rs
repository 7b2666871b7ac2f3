/// Data source identifiers
pub const DATA_SOURCE_YAHOO: &str = "yahoo";
pub const DATA_SOURCE_MOCK: &str = "mock";

/// Currency reported when the upstream omits one
pub const DEFAULT_CURRENCY: &str = "USD";

/// Bounds for synthetic quotes
pub const MOCK_PRICE_VARIATION: f64 = 0.05; // ±5% around the base price
pub const MOCK_CHANGE_PERCENT_BOUND: f64 = 5.0;

/// Base prices for well-known tickers. Unknown symbols derive a base price
/// from the symbol length.
pub const MOCK_BASE_PRICES: &[(&str, f64)] = &[
    ("AAPL", 150.0),
    ("TSLA", 200.0),
    ("MSFT", 300.0),
    ("GOOGL", 2500.0),
    ("AMZN", 3000.0),
    ("NVDA", 400.0),
    ("META", 250.0),
    ("NFLX", 400.0),
];
pub const MOCK_FALLBACK_BASE: f64 = 100.0;
pub const MOCK_FALLBACK_PER_CHAR: f64 = 10.0;
