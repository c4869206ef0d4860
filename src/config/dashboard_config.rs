use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::aggregator::MissingClientPolicy;
use crate::config::errors::ConfigError;

const API_URL: &str = "FRAUD_DRILLDOWN_API_URL";
const TIMEOUT_SECS: &str = "FRAUD_DRILLDOWN_TIMEOUT_SECS";
const MISSING_CLIENT: &str = "FRAUD_DRILLDOWN_MISSING_CLIENT";
const CSV_DELIMITER: &str = "FRAUD_DRILLDOWN_CSV_DELIMITER";
const METRICS_FILE: &str = "FRAUD_DRILLDOWN_METRICS_FILE";

/// Runtime settings, loaded from the environment.
///
/// Environment variables:
/// - `FRAUD_DRILLDOWN_API_URL` (default: http://localhost:8000)
/// - `FRAUD_DRILLDOWN_TIMEOUT_SECS` (default: 10)
/// - `FRAUD_DRILLDOWN_MISSING_CLIENT` `sentinel` or `reject` (default: sentinel)
/// - `FRAUD_DRILLDOWN_CSV_DELIMITER` single character (default: `;`)
/// - `FRAUD_DRILLDOWN_METRICS_FILE` metrics JSON for file sources (default: unset)
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub api_url: String,
    pub request_timeout: Duration,
    pub missing_client_policy: MissingClientPolicy,
    pub csv_delimiter: u8,
    pub metrics_file: Option<PathBuf>
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8000".to_string(),
            request_timeout: Duration::from_secs(10),
            missing_client_policy: MissingClientPolicy::Sentinel,
            csv_delimiter: b';',
            metrics_file: None
        }
    }
}

impl DashboardConfig {
    /// # Errors
    /// Returns `ConfigError::InvalidValue` if a variable is set but unusable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|variable| env::var(variable).ok())
    }

    /// Builds the configuration from any variable lookup, unset variables keep their defaults.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidValue` if a variable is set but unusable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let lookup = |variable: &str| lookup(variable).filter(|value| !value.trim().is_empty());

        if let Some(api_url) = lookup(API_URL) {
            config.api_url = api_url.trim().to_string();
        }

        if let Some(value) = lookup(TIMEOUT_SECS) {
            let seconds = u64::from_str(value.trim())
                .map_err(|error| ConfigError::invalid_value(TIMEOUT_SECS, &value, error))?;
            config.request_timeout = Duration::from_secs(seconds);
        }

        if let Some(value) = lookup(MISSING_CLIENT) {
            config.missing_client_policy = MissingClientPolicy::from_str(&value)
                .map_err(|error| ConfigError::invalid_value(MISSING_CLIENT, &value, error))?;
        }

        if let Some(value) = lookup(CSV_DELIMITER) {
            config.csv_delimiter = match value.as_bytes() {
                [delimiter] => *delimiter,
                _ => return Err(ConfigError::invalid_value(CSV_DELIMITER, &value, "expected a single ASCII character"))
            };
        }

        config.metrics_file = lookup(METRICS_FILE).map(PathBuf::from);

        Ok(config)
    }
}
