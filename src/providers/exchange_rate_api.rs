use anyhow::{Result, anyhow};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, instrument};

use crate::core::currency::ExchangeRateProvider;

/// Rate provider backed by an exchangerate-api.com style endpoint.
///
/// The endpoint quotes every currency as units per one reporting-currency
/// unit; rates are inverted here so callers can multiply a foreign amount
/// directly. Entries that are not positive numbers are dropped rather than
/// defaulted.
pub struct ExchangeRateApiProvider {
    base_url: String,
    reporting_currency: String,
}

impl ExchangeRateApiProvider {
    pub fn new(base_url: &str, reporting_currency: &str) -> Self {
        ExchangeRateApiProvider {
            base_url: base_url.to_string(),
            reporting_currency: reporting_currency.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    // Values stay untyped so a single malformed entry doesn't reject the body
    rates: HashMap<String, serde_json::Value>,
}

#[async_trait]
impl ExchangeRateProvider for ExchangeRateApiProvider {
    #[instrument(name = "RateFetch", skip(self))]
    async fn fetch_rates(&self) -> Result<HashMap<String, f64>> {
        let url = format!("{}/v4/latest/{}", self.base_url, self.reporting_currency);
        debug!("Requesting exchange rates from {}", url);

        let client = reqwest::Client::builder()
            .user_agent("spendlog/1.0")
            .build()?;
        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| anyhow!("Request error: {} for URL: {}", e, url))?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "HTTP error: {} fetching exchange rates",
                response.status()
            ));
        }

        let text = response.text().await?;
        let data: LatestRatesResponse = serde_json::from_str(&text)
            .map_err(|e| anyhow!("Failed to parse exchange rate response: {}", e))?;

        let mut rates: HashMap<String, f64> = data
            .rates
            .iter()
            .filter_map(|(code, value)| {
                let quoted = value.as_f64()?;
                (quoted > 0.0).then(|| (code.clone(), 1.0 / quoted))
            })
            .collect();
        rates.insert(self.reporting_currency.clone(), 1.0);

        debug!("Loaded {} exchange rates", rates.len());
        Ok(rates)
    }
}
