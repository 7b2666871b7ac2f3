use serde::{Deserialize, Serialize};

/// A named, fixed collection of symbols for convenience browsing. Static
/// configuration data, never derived from a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockGroup {
    pub name: String,
    pub symbols: Vec<String>,
    pub description: String,
}
