//! Core conversion logic and the abstractions around it

pub mod catalog;
pub mod config;
pub mod converter;
pub mod error;
pub mod log;
pub mod rates;

// Re-export main types for cleaner imports
pub use catalog::{Catalog, CatalogSource};
pub use converter::{ConversionRequest, ConversionResult, convert, parse_amount};
pub use error::Error;
pub use rates::{RateProvider, RateSnapshot};
