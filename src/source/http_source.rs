use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::models::{Metrics, Transaction};
use crate::source::errors::SourceError;
use crate::source::{decode_records, DataSource};

const TRANSACTIONS_PATH: &str = "/transactions/";
const METRICS_PATH: &str = "/fetchmetrics/";

/// Fetches from the backend REST API.
pub struct HttpSource {
    client: reqwest::Client,
    base_url: String
}

impl HttpSource {
    /// # Errors
    /// Returns `SourceError::Http` if the HTTP client cannot be constructed.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string()
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, SourceError> {
        let endpoint = format!("{}{}", self.base_url, path);
        debug!("GET {endpoint}");

        let response = self.client.get(&endpoint).send().await?;

        if !response.status().is_success() {
            return Err(SourceError::Status {
                endpoint,
                status: response.status().as_u16()
            });
        }

        Ok(response.json().await?)
    }
}

impl DataSource for HttpSource {
    async fn fetch_transactions(&self) -> Result<Vec<Transaction>, SourceError> {
        let values: Vec<Value> = self.get_json(TRANSACTIONS_PATH).await?;
        Ok(decode_records(values))
    }

    async fn fetch_metrics(&self) -> Result<Metrics, SourceError> {
        self.get_json(METRICS_PATH).await
    }
}
