use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use pricefeed_core::groups::GroupsService;
use pricefeed_core::market_data::{MarketDataService, MarketDataServiceTrait, ProviderRegistry};

use crate::config::Config;

pub struct AppState {
    pub market_data_service: Arc<dyn MarketDataServiceTrait + Send + Sync>,
    pub groups_service: Arc<GroupsService>,
}

pub fn init_tracing() {
    let fmt_layer = fmt::layer();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let registry = ProviderRegistry::new(config.quote_timeout)?;
    let market_data_service = Arc::new(MarketDataService::new(registry));
    let groups_service = Arc::new(GroupsService::new());

    Ok(Arc::new(AppState {
        market_data_service,
        groups_service,
    }))
}
