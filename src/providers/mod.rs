pub mod exchange_rate_api;

// Re-export the provider seam for consumers wiring up a converter
pub use crate::core::currency::ExchangeRateProvider;
