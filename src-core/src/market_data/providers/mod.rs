pub mod market_data_provider;
pub mod mock_provider;
pub mod models;
pub mod provider_registry;
pub mod yahoo_provider;

pub use provider_registry::ProviderRegistry;
