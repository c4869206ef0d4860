mod aggregation;
mod client_aggregator;
mod errors;
#[cfg(test)]
mod tests;

use std::str::FromStr;

pub use aggregation::Aggregation;
pub use client_aggregator::Aggregator;
pub use errors::AggregationError;

/// What to do with a record that carries no usable client identity.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum MissingClientPolicy {
    /// Group such records under [`crate::types::ClientId::Unknown`].
    #[default]
    Sentinel,
    /// Fail the whole run.
    Reject
}

impl FromStr for MissingClientPolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "sentinel" => Ok(MissingClientPolicy::Sentinel),
            "reject" => Ok(MissingClientPolicy::Reject),
            other => Err(format!("unknown missing client policy '{other}', expected 'sentinel' or 'reject'"))
        }
    }
}
