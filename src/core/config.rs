use crate::core::error::Error;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, warn};

pub const APP_ID_VAR: &str = "APP_ID";
pub const DEFAULT_ENV_FILE: &str = ".env";
pub const DEFAULT_RATES_BASE_URL: &str = "https://openexchangerates.org/api";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct OpenExchangeRatesConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProvidersConfig {
    pub openexchangerates: Option<OpenExchangeRatesConfig>,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        ProvidersConfig {
            openexchangerates: Some(OpenExchangeRatesConfig {
                base_url: DEFAULT_RATES_BASE_URL.to_string(),
            }),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub providers: ProvidersConfig,
    #[serde(default)]
    pub catalog_path: Option<String>,
    #[serde(default)]
    pub env_file: Option<String>,
}

impl AppConfig {
    /// Loads the config from the default location, or defaults when no
    /// config file has been created.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(
                "No config file at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("in", "codito", "fxc")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    pub fn rates_base_url(&self) -> &str {
        self.providers
            .openexchangerates
            .as_ref()
            .map_or(DEFAULT_RATES_BASE_URL, |p| &p.base_url)
    }

    pub fn env_file_path(&self) -> PathBuf {
        PathBuf::from(self.env_file.as_deref().unwrap_or(DEFAULT_ENV_FILE))
    }
}

/// Resolves the rate provider credential.
///
/// `APP_ID` from `env_file` wins; the process environment (queried through
/// `env_lookup`) is the fallback. An unreadable env file only warns.
pub fn resolve_app_id<F>(env_file: &Path, env_lookup: F) -> Result<String, Error>
where
    F: Fn(&str) -> Option<String>,
{
    let from_file = match read_env_var(env_file, APP_ID_VAR) {
        Ok(value) => value,
        Err(e) => {
            warn!(error = %e, path = %env_file.display(), "Could not load env file");
            eprintln!(
                "Warning: Could not load {} file, using system environment",
                env_file.display()
            );
            None
        }
    };

    non_blank(from_file)
        .or_else(|| non_blank(env_lookup(APP_ID_VAR)))
        .ok_or(Error::CredentialMissing)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn read_env_var(env_file: &Path, key: &str) -> Result<Option<String>, dotenvy::Error> {
    let mut found = None;
    for item in dotenvy::from_path_iter(env_file)? {
        let (name, value) = item?;
        if name == key {
            found = Some(value);
        }
    }
    Ok(found)
}
