//! Exchange rate snapshots and the provider abstraction that fetches them

use crate::core::error::Error;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Point-in-time exchange rates, all quoted against a single anchor currency.
#[derive(Debug, Clone, PartialEq)]
pub struct RateSnapshot {
    anchor: String,
    rates: HashMap<String, f64>,
    as_of: Option<DateTime<Utc>>,
}

impl RateSnapshot {
    pub fn new(anchor: impl Into<String>, rates: HashMap<String, f64>) -> Self {
        Self {
            anchor: anchor.into(),
            rates,
            as_of: None,
        }
    }

    pub fn with_as_of(mut self, as_of: DateTime<Utc>) -> Self {
        self.as_of = Some(as_of);
        self
    }

    pub fn anchor(&self) -> &str {
        &self.anchor
    }

    pub fn as_of(&self) -> Option<DateTime<Utc>> {
        self.as_of
    }

    /// Rate of `code` against the anchor. The anchor is always 1.0, whether or
    /// not the provider listed it.
    pub fn rate(&self, code: &str) -> Option<f64> {
        if code == self.anchor {
            return Some(1.0);
        }
        self.rates.get(code).copied()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

#[async_trait]
pub trait RateProvider: Send + Sync {
    async fn fetch_snapshot(&self) -> Result<RateSnapshot, Error>;
}
