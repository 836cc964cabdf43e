//! Currency normalization to the reporting currency.

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Conversion captured once when an expense is recorded. It is never
/// recomputed, so totals stay stable even as live rates move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionSnapshot {
    pub original_amount: f64,
    pub original_currency: String,
    pub usd_amount: f64,
    pub exchange_rate: f64,
    pub last_updated: String,
}

/// Source of exchange rates keyed by currency code, already expressed as
/// reporting-currency units per one unit of the keyed currency.
#[async_trait]
pub trait ExchangeRateProvider: Send + Sync {
    async fn fetch_rates(&self) -> Result<HashMap<String, f64>>;
}

/// Converts expense amounts into the reporting currency.
///
/// `convert` is infallible: when the provider is unreachable or has no rate
/// for the requested currency, the amount is kept as-is with a 1:1 rate. The
/// snapshot still records that rate, so unconverted entries stay visible.
pub struct CurrencyConverter {
    provider: Arc<dyn ExchangeRateProvider>,
    reporting_currency: String,
}

impl CurrencyConverter {
    pub fn new(provider: Arc<dyn ExchangeRateProvider>, reporting_currency: &str) -> Self {
        CurrencyConverter {
            provider,
            reporting_currency: reporting_currency.to_string(),
        }
    }

    pub fn reporting_currency(&self) -> &str {
        &self.reporting_currency
    }

    pub async fn convert(&self, amount: f64, from_currency: &str) -> ConversionSnapshot {
        if from_currency == self.reporting_currency {
            return self.snapshot(amount, from_currency, amount, 1.0);
        }

        let rate = match self.provider.fetch_rates().await {
            Ok(rates) => rates.get(from_currency).copied(),
            Err(e) => {
                debug!(error = %e, "Exchange rate fetch failed, falling back to 1:1");
                None
            }
        };

        match rate {
            Some(rate) => self.snapshot(amount, from_currency, round_cents(amount * rate), rate),
            None => {
                debug!(currency = %from_currency, "No exchange rate available, keeping amount");
                self.snapshot(amount, from_currency, amount, 1.0)
            }
        }
    }

    fn snapshot(
        &self,
        amount: f64,
        from_currency: &str,
        usd_amount: f64,
        exchange_rate: f64,
    ) -> ConversionSnapshot {
        ConversionSnapshot {
            original_amount: amount,
            original_currency: from_currency.to_string(),
            usd_amount,
            exchange_rate,
            last_updated: Utc::now().to_rfc3339(),
        }
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
