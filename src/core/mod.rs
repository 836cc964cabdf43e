//! Core business logic abstractions

pub mod analytics;
pub mod category;
pub mod config;
pub mod currency;
pub mod expense;
pub mod log;
pub mod relative_date;

// Re-export main types for cleaner imports
pub use analytics::{DashboardSummary, Period};
pub use category::{CategoryDescriptor, CategoryRegistry};
pub use currency::{ConversionSnapshot, CurrencyConverter, ExchangeRateProvider};
pub use expense::{ExpenseDraft, ExpensePatch, ExpenseRecord};
