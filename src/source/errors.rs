use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Endpoint [{endpoint}] answered with status [{status}]")]
    Status {
        endpoint: String,
        status: u16
    },
    #[error("Could not read export: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("Unsupported export format [{0}], expected .json or .csv")]
    UnsupportedFormat(String),
    #[error("No metrics file configured for this source")]
    MetricsUnavailable,
    #[error("Background read did not complete: {0}")]
    Join(#[from] tokio::task::JoinError)
}
