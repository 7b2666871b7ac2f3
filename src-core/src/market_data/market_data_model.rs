use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::market_data::market_data_constants::{DATA_SOURCE_MOCK, DATA_SOURCE_YAHOO};

/// Selector for where a quote comes from. Unknown selector strings resolve
/// to `Mock` so a bad `source` parameter degrades instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    Yahoo,
    Mock,
}

impl DataSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataSource::Yahoo => DATA_SOURCE_YAHOO,
            DataSource::Mock => DATA_SOURCE_MOCK,
        }
    }
}

impl From<&str> for DataSource {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            DATA_SOURCE_YAHOO => DataSource::Yahoo,
            _ => DataSource::Mock,
        }
    }
}

impl From<DataSource> for String {
    fn from(source: DataSource) -> Self {
        source.as_str().to_string()
    }
}

/// Normalized price record for one symbol at one point in time. Created
/// fresh per request, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    pub symbol: String,
    pub price: f64,
    pub currency: String,
    pub timestamp: DateTime<Utc>,
    pub source: DataSource,
    pub change_24h: Option<f64>,
    pub change_percent_24h: Option<f64>,
}

/// Outcome of a multi-symbol fetch. Every dispatched symbol settles as
/// either a quote or an error string, independently of the others.
#[derive(Debug, Clone, Serialize)]
pub struct QuoteBatch {
    pub prices: Vec<Quote>,
    pub errors: Vec<String>,
    pub total_requested: usize,
    pub total_successful: usize,
    pub total_failed: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_source_round_trips_through_strings() {
        assert_eq!(DataSource::from("yahoo"), DataSource::Yahoo);
        assert_eq!(DataSource::from("YAHOO"), DataSource::Yahoo);
        assert_eq!(DataSource::from("mock"), DataSource::Mock);
        assert_eq!(DataSource::Yahoo.as_str(), "yahoo");
        assert_eq!(DataSource::Mock.as_str(), "mock");
    }

    #[test]
    fn unknown_source_degrades_to_mock() {
        assert_eq!(DataSource::from("alpha_vantage"), DataSource::Mock);
        assert_eq!(DataSource::from(""), DataSource::Mock);
    }
}
