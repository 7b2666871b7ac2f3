use std::collections::BTreeMap;

use super::groups_model::StockGroup;

fn group(name: &str, description: &str, symbols: &[&str]) -> StockGroup {
    StockGroup {
        name: name.to_string(),
        symbols: symbols.iter().map(|s| s.to_string()).collect(),
        description: description.to_string(),
    }
}

/// Static catalog of browsable symbol collections, keyed by group id.
/// Iteration order is the key order, so responses are stable.
pub struct GroupsService {
    groups: BTreeMap<&'static str, StockGroup>,
}

impl GroupsService {
    pub fn new() -> Self {
        let mut groups = BTreeMap::new();
        groups.insert(
            "big_tech",
            group(
                "Big Tech",
                "Mega-cap technology companies",
                &["AAPL", "MSFT", "GOOGL", "AMZN", "META"],
            ),
        );
        groups.insert(
            "meme_stocks",
            group(
                "Meme Stocks",
                "High-volatility retail favorites",
                &["GME", "AMC", "BB", "TSLA"],
            ),
        );
        groups.insert(
            "semiconductors",
            group(
                "Semiconductors",
                "Chip designers and foundries",
                &["NVDA", "AMD", "INTC", "TSM"],
            ),
        );
        groups.insert(
            "indices",
            group(
                "Indices",
                "Major US market indices",
                &["^GSPC", "^DJI", "^IXIC"],
            ),
        );
        GroupsService { groups }
    }

    pub fn all(&self) -> &BTreeMap<&'static str, StockGroup> {
        &self.groups
    }
}

impl Default for GroupsService {
    fn default() -> Self {
        Self::new()
    }
}
