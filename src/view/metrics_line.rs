use crate::models::MetricsSnapshot;

pub const LAST_UPDATED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The metrics banner. Shows exactly what the backend sent; absent values stay blank.
pub fn metrics_line(snapshot: Option<&MetricsSnapshot>) -> String {
    let metrics = snapshot.map(|snapshot| &snapshot.metrics);
    let field = |value: Option<&Option<String>>| value.and_then(Option::as_deref).unwrap_or("").to_string();

    let last_updated = snapshot
        .map(|snapshot| snapshot.fetched_at.format(LAST_UPDATED_FORMAT).to_string())
        .unwrap_or_default();

    format!(
        "Precision: {} | Recall: {} | Transactions: {} | Fraudulent: {} | Last updated: {}",
        field(metrics.map(|metrics| &metrics.precision)),
        field(metrics.map(|metrics| &metrics.recall)),
        field(metrics.map(|metrics| &metrics.total_transactions)),
        field(metrics.map(|metrics| &metrics.fraudulent_transactions)),
        last_updated
    )
}
