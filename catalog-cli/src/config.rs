//! Environment-driven configuration.
//!
//! Variables are read from the process environment after loading a `.env`
//! file from the working directory, if present:
//!
//! ```env
//! CATALOG_URL=https://shop.example/api/items   # omit to browse the demo catalog
//! CATALOG_PAGE_SIZE=12
//! CATALOG_TIMEOUT_SECS=10
//! CATALOG_LOG_LEVEL=debug
//! ```

use std::time::Duration;

use catalog_lib::source::DEFAULT_PAGE_SIZE;
use catalog_lib::source::SourceConfig;
use simplelog::LevelFilter;
use thiserror::Error;

const URL_VAR: &str = "CATALOG_URL";
const PAGE_SIZE_VAR: &str = "CATALOG_PAGE_SIZE";
const TIMEOUT_VAR: &str = "CATALOG_TIMEOUT_SECS";
const LOG_LEVEL_VAR: &str = "CATALOG_LOG_LEVEL";

/// Configuration error type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a positive whole number, got '{value}'")]
    InvalidNumber { var: &'static str, value: String },
    #[error("CATALOG_LOG_LEVEL must be one of off, error, warn, info, debug, trace; got '{0}'")]
    InvalidLogLevel(String),
}

/// Settings for one run of the CLI.
#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    /// Remote catalog endpoint; the demo catalog is used when unset.
    pub url: Option<String>,
    pub page_size: usize,
    pub timeout: Option<Duration>,
    pub log_level: LevelFilter,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            url: None,
            page_size: DEFAULT_PAGE_SIZE,
            timeout: Some(Duration::from_secs(10)),
            log_level: LevelFilter::Info,
        }
    }
}

impl CliConfig {
    /// Load from `.env` and the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load using `lookup` to resolve variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        config.url = get(URL_VAR);
        if let Some(value) = get(PAGE_SIZE_VAR) {
            config.page_size = positive(PAGE_SIZE_VAR, &value)? as usize;
        }
        if let Some(value) = get(TIMEOUT_VAR) {
            config.timeout = Some(Duration::from_secs(positive(TIMEOUT_VAR, &value)?));
        }
        if let Some(value) = get(LOG_LEVEL_VAR) {
            config.log_level = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidLogLevel(value.clone()))?;
        }
        Ok(config)
    }

    /// Build the record source config, if a remote catalog is configured.
    pub fn source_config(&self) -> Option<SourceConfig> {
        let url = self.url.as_ref()?;
        let mut config = SourceConfig::new(url.trim()).with_page_size(self.page_size);
        if let Some(timeout) = self.timeout {
            config = config.with_timeout(timeout);
        }
        Some(config)
    }
}

fn positive(var: &'static str, value: &str) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidNumber {
            var,
            value: value.to_string(),
        }),
    }
}
