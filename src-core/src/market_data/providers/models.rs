use serde::Deserialize;

/// Upstream chart payload: `{ chart: { result: [ { meta: { ... } } ] } }`.
/// Anything that does not fit this shape is a provider error.
#[derive(Debug, Deserialize)]
pub struct ChartResponse {
    pub chart: Chart,
}

#[derive(Debug, Deserialize)]
pub struct Chart {
    pub result: Option<Vec<ChartResult>>,
    pub error: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct ChartResult {
    pub meta: Option<ChartMeta>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartMeta {
    pub regular_market_price: Option<f64>,
    pub currency: Option<String>,
    pub regular_market_change: Option<f64>,
    pub regular_market_change_percent: Option<f64>,
}
