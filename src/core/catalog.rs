//! Currency catalog: display labels for the codes offered to the user.

use crate::core::error::Error;
use std::collections::BTreeMap;
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File picked up from the working directory when no catalog is configured.
pub const DEFAULT_CATALOG_FILE: &str = "currencies.json";

const BUILTIN_CURRENCIES: &[(&str, &str)] = &[
    ("USD", "US Dollar"),
    ("EUR", "Euro"),
    ("GBP", "British Pound Sterling"),
    ("JPY", "Japanese Yen"),
    ("INR", "Indian Rupee"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Builtin,
    File(PathBuf),
}

impl CatalogSource {
    /// Picks the configured file, then `currencies.json` in the working
    /// directory, then the builtin table.
    pub fn resolve(configured: Option<&str>) -> Self {
        Self::resolve_in(configured, Path::new("."))
    }

    pub fn resolve_in(configured: Option<&str>, dir: &Path) -> Self {
        if let Some(path) = configured {
            return CatalogSource::File(PathBuf::from(path));
        }
        let local = dir.join(DEFAULT_CATALOG_FILE);
        if local.is_file() {
            CatalogSource::File(local)
        } else {
            CatalogSource::Builtin
        }
    }
}

impl Display for CatalogSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogSource::Builtin => write!(f, "builtin"),
            CatalogSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Catalog {
    entries: BTreeMap<String, String>,
}

impl Catalog {
    pub fn load(source: &CatalogSource) -> Result<Self, Error> {
        let catalog = match source {
            CatalogSource::Builtin => Self::builtin(),
            CatalogSource::File(path) => Self::load_from_path(path)?,
        };
        debug!(source = %source, currencies = catalog.len(), "Loaded currency catalog");
        Ok(catalog)
    }

    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_CURRENCIES
                .iter()
                .map(|(code, label)| (code.to_string(), label.to_string()))
                .collect(),
        }
    }

    fn load_from_path(path: &Path) -> Result<Self, Error> {
        let load_error = |reason: String| Error::CatalogLoad {
            path: path.to_path_buf(),
            reason,
        };

        let content = fs::read_to_string(path).map_err(|e| load_error(e.to_string()))?;
        // Duplicate codes resolve to the last occurrence.
        let entries: BTreeMap<String, String> =
            serde_json::from_str(&content).map_err(|e| load_error(e.to_string()))?;

        if entries.is_empty() {
            return Err(load_error("catalog contains no currencies".to_string()));
        }
        Ok(Self { entries })
    }

    pub fn label(&self, code: &str) -> Option<&str> {
        self.entries.get(code).map(String::as_str)
    }

    /// Label for display, falling back to the code itself.
    pub fn display_label<'a>(&'a self, code: &'a str) -> &'a str {
        self.label(code).unwrap_or(code)
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(code, label)| (code.as_str(), label.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
