use std::collections::HashMap;

use tracing::debug;

use crate::aggregator::aggregation::Aggregation;
use crate::aggregator::errors::AggregationError;
use crate::aggregator::MissingClientPolicy;
use crate::models::{ClientSummary, Transaction};
use crate::types::ClientId;

/// Groups a transaction list by client and computes each client's indicator union.
#[derive(Debug, Clone, Copy, Default)]
pub struct Aggregator {
    policy: MissingClientPolicy
}

impl Aggregator {
    pub fn new(policy: MissingClientPolicy) -> Self {
        Self { policy }
    }

    /// Builds a fresh aggregation from the full transaction list.
    ///
    /// Clients are ordered by first appearance and every bucket keeps arrival
    /// order. An empty list yields an empty aggregation.
    ///
    /// # Errors
    /// Returns `AggregationError::MissingClient` if a record has no client
    /// identity and the policy is `Reject`.
    pub fn aggregate(&self, transactions: Vec<Transaction>) -> Result<Aggregation, AggregationError> {
        let mut order = Vec::<ClientId>::new();
        let mut buckets = HashMap::<ClientId, Vec<Transaction>>::new();

        for (position, transaction) in transactions.into_iter().enumerate() {
            let client = self.resolve_client(position, &transaction)?;

            buckets.entry(client)
                .or_insert_with_key(|client| {
                    order.push(client.clone());
                    Vec::new()
                })
                .push(transaction);
        }

        let summaries: Vec<ClientSummary> = order.into_iter()
            .map(|client| {
                let mut summary = ClientSummary::new(client);

                if let Some(bucket) = buckets.get(&summary.client) {
                    summary.frauds.extend(
                        bucket.iter()
                            .flat_map(Transaction::triggered_indicators)
                            .map(str::to_string)
                    );
                }

                summary
            })
            .collect();

        debug!("Aggregated [{}] clients, [{}] flagged", summaries.len(), summaries.iter().filter(|summary| !summary.is_clean()).count());

        Ok(Aggregation::new(summaries, buckets))
    }

    fn resolve_client(&self, position: usize, transaction: &Transaction) -> Result<ClientId, AggregationError> {
        match (&transaction.client, self.policy) {
            (Some(client), _) => Ok(client.clone()),
            (None, MissingClientPolicy::Sentinel) => Ok(ClientId::Unknown),
            (None, MissingClientPolicy::Reject) => Err(AggregationError::missing_client(position, transaction))
        }
    }
}
