mod errors;
mod file_source;
mod http_source;

use serde_json::Value;
use tracing::warn;

use crate::models::{Metrics, Transaction};

pub use errors::SourceError;
pub use file_source::FileSource;
pub use http_source::HttpSource;

/// The retrieval collaborator: where transaction lists and metrics come from.
///
/// The two fetches are independent and may be in flight at the same time.
//NOTE: Sources are driven on the task that owns the dashboard, so no Send bound is required
#[allow(async_fn_in_trait)]
pub trait DataSource {
    async fn fetch_transactions(&self) -> Result<Vec<Transaction>, SourceError>;
    async fn fetch_metrics(&self) -> Result<Metrics, SourceError>;
}

/// Either kind of source, picked at startup from the command line.
pub enum AnySource {
    Http(HttpSource),
    File(FileSource)
}

impl DataSource for AnySource {
    async fn fetch_transactions(&self) -> Result<Vec<Transaction>, SourceError> {
        match self {
            AnySource::Http(source) => source.fetch_transactions().await,
            AnySource::File(source) => source.fetch_transactions().await
        }
    }

    async fn fetch_metrics(&self) -> Result<Metrics, SourceError> {
        match self {
            AnySource::Http(source) => source.fetch_metrics().await,
            AnySource::File(source) => source.fetch_metrics().await
        }
    }
}

/// Decodes a received list, skipping elements that are not records at all.
fn decode_records(values: Vec<Value>) -> Vec<Transaction> {
    values.iter()
        .enumerate()
        .filter_map(|(position, value)| match Transaction::from_value(value) {
            Ok(transaction) => Some(transaction),
            Err(error) => {
                warn!("Skipping record at position [{position}]: {error}");
                None
            }
        })
        .collect()
}
