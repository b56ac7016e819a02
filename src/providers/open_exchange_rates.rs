use crate::core::error::Error;
use crate::core::rates::{RateProvider, RateSnapshot};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, instrument};

/// All rates on the free plan are quoted against USD.
const ANCHOR_CURRENCY: &str = "USD";
const USER_AGENT: &str = concat!("fxc/", env!("CARGO_PKG_VERSION"));

fn default_anchor() -> String {
    ANCHOR_CURRENCY.to_string()
}

#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    #[serde(default = "default_anchor")]
    base: String,
    timestamp: Option<i64>,
    rates: HashMap<String, f64>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    message: Option<String>,
    description: Option<String>,
}

pub struct OpenExchangeRatesProvider {
    base_url: String,
    app_id: String,
}

impl OpenExchangeRatesProvider {
    pub fn new(base_url: &str, app_id: &str) -> Result<Self, Error> {
        if app_id.trim().is_empty() {
            return Err(Error::CredentialMissing);
        }
        Ok(OpenExchangeRatesProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
            app_id: app_id.to_string(),
        })
    }
}

#[async_trait]
impl RateProvider for OpenExchangeRatesProvider {
    #[instrument(name = "OpenExchangeRatesFetch", skip(self), fields(base_url = %self.base_url))]
    async fn fetch_snapshot(&self) -> Result<RateSnapshot, Error> {
        let url = format!("{}/latest.json?app_id={}", self.base_url, self.app_id);
        debug!("Requesting latest rates from {}/latest.json", self.base_url);

        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        let response = client.get(&url).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorResponse>(&text)
                .ok()
                .and_then(|e| e.description.or(e.message))
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown error").to_string());
            return Err(Error::Provider {
                status: status.as_u16(),
                message,
            });
        }

        let data: LatestRatesResponse = serde_json::from_str(&text)?;
        debug!(anchor = %data.base, rates = data.rates.len(), "Decoded rate snapshot");

        let mut snapshot = RateSnapshot::new(data.base, data.rates);
        if let Some(as_of) = data.timestamp.and_then(|ts| Utc.timestamp_opt(ts, 0).single()) {
            snapshot = snapshot.with_as_of(as_of);
        }
        Ok(snapshot)
    }
}
