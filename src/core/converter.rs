//! Converts amounts between two currencies using a rate snapshot.

use crate::core::error::Error;
use crate::core::rates::RateSnapshot;
use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::LazyLock;

/// Comma-grouped numbers: `1,000`, `-12,345.6`. Commas only between
/// three-digit groups of the integer part.
static GROUPED_AMOUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?\d{1,3}(,\d{3})+(\.\d+)?$").expect("valid amount pattern")
});

/// A validated conversion request.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub base: String,
    pub quote: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConversionResult {
    pub base: String,
    pub quote: String,
    pub amount: f64,
    pub converted: f64,
    pub rates_as_of: Option<DateTime<Utc>>,
}

impl ConversionRequest {
    pub fn convert(&self, snapshot: &RateSnapshot) -> Result<ConversionResult, Error> {
        let converted = convert(&self.base, &self.quote, self.amount, snapshot)?;
        Ok(ConversionResult {
            base: self.base.clone(),
            quote: self.quote.clone(),
            amount: self.amount,
            converted,
            rates_as_of: snapshot.as_of(),
        })
    }
}

impl ConversionResult {
    pub fn is_identity(&self) -> bool {
        self.base == self.quote
    }
}

/// Converts `amount` of `base` into `quote`.
///
/// Both rates are resolved against the snapshot's anchor (which is 1.0), and
/// the result is `(quote_rate / base_rate) * amount`. Converting a currency
/// to itself returns `amount` unchanged without consulting the snapshot.
pub fn convert(base: &str, quote: &str, amount: f64, snapshot: &RateSnapshot) -> Result<f64, Error> {
    if base == quote {
        return Ok(amount);
    }

    let base_rate = resolve_rate(base, snapshot)?;
    let quote_rate = resolve_rate(quote, snapshot)?;
    if base_rate == 0.0 {
        return Err(Error::ZeroRate(base.to_string()));
    }

    let converted = (quote_rate / base_rate) * amount;
    if !converted.is_finite() {
        return Err(Error::NonFiniteResult {
            base: base.to_string(),
            quote: quote.to_string(),
            amount,
        });
    }
    Ok(converted)
}

fn resolve_rate(code: &str, snapshot: &RateSnapshot) -> Result<f64, Error> {
    snapshot
        .rate(code)
        .ok_or_else(|| Error::UnknownCurrency(code.to_string()))
}

/// Parses user-entered text into a finite amount. Thousands separators
/// (`1,000.50`) are accepted; a comma anywhere else is rejected.
pub fn parse_amount(input: &str) -> Result<f64, Error> {
    let trimmed = input.trim();
    let invalid = || Error::InvalidAmount(trimmed.to_string());

    let cleaned = if trimmed.contains(',') {
        if !GROUPED_AMOUNT.is_match(trimmed) {
            return Err(invalid());
        }
        trimmed.replace(',', "")
    } else {
        trimmed.to_string()
    };

    match cleaned.parse::<f64>() {
        Ok(amount) if amount.is_finite() => Ok(amount),
        _ => Err(invalid()),
    }
}
