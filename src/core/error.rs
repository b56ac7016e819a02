//! Error taxonomy shared by every stage of the conversion pipeline.

use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed to load currency catalog from {}: {reason}", .path.display())]
    CatalogLoad { path: PathBuf, reason: String },

    #[error("APP_ID not found in environment variables")]
    CredentialMissing,

    #[error("request to rate provider failed: {0}")]
    Network(#[source] reqwest::Error),

    #[error("rate provider returned HTTP {status}: {message}")]
    Provider { status: u16, message: String },

    #[error("failed to decode rate provider response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid amount: '{0}' is not a number")]
    InvalidAmount(String),

    #[error("no exchange rate available for currency: {0}")]
    UnknownCurrency(String),

    #[error("exchange rate for {0} is zero, cannot convert from it")]
    ZeroRate(String),

    #[error("conversion of {amount} {base} to {quote} does not produce a finite value")]
    NonFiniteResult {
        base: String,
        quote: String,
        amount: f64,
    },

    #[error("conversion cancelled")]
    PromptCancelled,

    #[error("terminal interaction failed: {0}")]
    Terminal(#[source] dialoguer::Error),
}

impl Error {
    /// A follow-up instruction for the user, if there is one.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Error::CredentialMissing => Some("Please create a .env file with APP_ID=your_api_key"),
            Error::InvalidAmount(_) => Some("Enter a plain number, e.g. 100 or 12.50"),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        // Request URLs carry the credential as a query parameter.
        Error::Network(err.without_url())
    }
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        match err {
            dialoguer::Error::IO(ref io) if io.kind() == std::io::ErrorKind::Interrupted => {
                Error::PromptCancelled
            }
            other => Error::Terminal(other),
        }
    }
}
