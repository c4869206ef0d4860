use thiserror::Error;

use crate::models::Transaction;

#[derive(Debug, Error)]
pub enum AggregationError {
    #[error("Transaction [{transaction_id}] at position [{position}] has no client identity")]
    MissingClient {
        position: usize,
        transaction_id: String
    }
}

impl AggregationError {
    pub fn missing_client(position: usize, transaction: &Transaction) -> Self {
        Self::MissingClient {
            position,
            transaction_id: transaction.transaction_id.clone().unwrap_or_else(|| "-".to_string())
        }
    }
}
