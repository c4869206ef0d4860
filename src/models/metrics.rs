use chrono::{DateTime, Local};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::types::lenient;

/// Aggregate quality figures computed by the backend and displayed as-is.
///
/// The backend sends preformatted strings (`"93.10%"`, `"12 (3.40%)"`) but plain
/// numbers are accepted too. Anything missing or non-scalar is left blank.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Metrics {
    pub precision: Option<String>,
    pub recall: Option<String>,
    /// `overall_transactions` on the wire, `total_transactions` also accepted.
    pub total_transactions: Option<String>,
    /// `fraudlent_transactions` on the wire, `fraudulent_transactions` also accepted.
    pub fraudulent_transactions: Option<String>
}

impl Metrics {
    /// Builds metrics from the raw field map of the backend object.
    ///
    /// When several spellings of a figure are present, the first usable one in
    /// the order listed on the field wins.
    pub fn from_fields(fields: &Map<String, Value>) -> Self {
        let figure = |keys: &[&str]| keys.iter().find_map(|key| lenient::text(fields.get(*key)));

        Self {
            precision: figure(&["precision"]),
            recall: figure(&["recall"]),
            total_transactions: figure(&["overall_transactions", "total_transactions"]),
            fraudulent_transactions: figure(&["fraudlent_transactions", "fraudulent_transactions"])
        }
    }
}

impl<'de> Deserialize<'de> for Metrics {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let fields = Map::<String, Value>::deserialize(deserializer)?;
        Ok(Metrics::from_fields(&fields))
    }
}

/// A metrics object together with the local time it was received.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsSnapshot {
    pub metrics: Metrics,
    pub fetched_at: DateTime<Local>
}

impl MetricsSnapshot {
    pub fn new(metrics: Metrics, fetched_at: DateTime<Local>) -> Self {
        Self { metrics, fetched_at }
    }

    /// Stamps the metrics with the current wall-clock time.
    pub fn taken_now(metrics: Metrics) -> Self {
        Self::new(metrics, Local::now())
    }
}
