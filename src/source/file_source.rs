use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use serde_json::{Map, Value};
use tokio::task::spawn_blocking;
use tracing::warn;

use crate::models::{Metrics, Transaction};
use crate::source::errors::SourceError;
use crate::source::{decode_records, DataSource};

/// Reads an exported, already-annotated transaction list from disk.
pub struct FileSource {
    transactions_path: PathBuf,
    metrics_path: Option<PathBuf>,
    delimiter: u8
}

impl FileSource {
    pub fn new(transactions_path: impl Into<PathBuf>, delimiter: u8) -> Self {
        Self {
            transactions_path: transactions_path.into(),
            metrics_path: None,
            delimiter
        }
    }

    pub fn with_metrics(mut self, metrics_path: impl Into<PathBuf>) -> Self {
        self.metrics_path = Some(metrics_path.into());
        self
    }
}

impl DataSource for FileSource {
    async fn fetch_transactions(&self) -> Result<Vec<Transaction>, SourceError> {
        let path = self.transactions_path.clone();
        let delimiter = self.delimiter;

        spawn_blocking(move || read_transactions(&path, delimiter)).await?
    }

    async fn fetch_metrics(&self) -> Result<Metrics, SourceError> {
        let path = self.metrics_path.clone().ok_or(SourceError::MetricsUnavailable)?;

        spawn_blocking(move || -> Result<Metrics, SourceError> {
            let reader = BufReader::new(File::open(path)?);
            Ok(serde_json::from_reader(reader)?)
        }).await?
    }
}

fn read_transactions(path: &Path, delimiter: u8) -> Result<Vec<Transaction>, SourceError> {
    let extension = path.extension()
        .and_then(|extension| extension.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "json" => {
            let reader = BufReader::new(File::open(path)?);
            let values: Vec<Value> = serde_json::from_reader(reader)?;
            Ok(decode_records(values))
        }
        "csv" => read_csv(path, delimiter),
        _ => Err(SourceError::UnsupportedFormat(path.display().to_string()))
    }
}

/// Every CSV cell arrives as text, untrimmed; the lenient field decoders take it from there.
fn read_csv(path: &Path, delimiter: u8) -> Result<Vec<Transaction>, SourceError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(Trim::Headers)
        .flexible(true)
        .from_reader(BufReader::new(File::open(path)?));

    let headers = reader.headers()?.clone();
    let mut transactions = Vec::new();

    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(error) => {
                warn!("CSV record error: {error}");
                continue;
            }
        };

        let fields: Map<String, Value> = headers.iter()
            .zip(record.iter())
            .map(|(header, cell)| (header.to_string(), Value::String(cell.to_string())))
            .collect();

        transactions.push(Transaction::from_fields(&fields));
    }

    Ok(transactions)
}
