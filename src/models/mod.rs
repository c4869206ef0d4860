mod errors;
mod metrics;
mod summary;
mod transaction;

pub use errors::RecordError;
pub use metrics::{Metrics, MetricsSnapshot};
pub use summary::ClientSummary;
pub use transaction::Transaction;
