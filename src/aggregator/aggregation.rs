use std::collections::HashMap;

use crate::models::{ClientSummary, Transaction};
use crate::types::ClientId;

/// The result of one aggregator run: the summary rows and the per-client index
/// they expand into. Both halves are built together and only ever replaced together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregation {
    summaries: Vec<ClientSummary>,
    buckets: HashMap<ClientId, Vec<Transaction>>
}

impl Aggregation {
    pub(super) fn new(summaries: Vec<ClientSummary>, buckets: HashMap<ClientId, Vec<Transaction>>) -> Self {
        Self { summaries, buckets }
    }

    /// Summary rows in order of each client's first appearance.
    pub fn summaries(&self) -> &[ClientSummary] {
        &self.summaries
    }

    /// The transactions of one client, in arrival order.
    pub fn bucket(&self, client: &ClientId) -> Option<&[Transaction]> {
        self.buckets.get(client).map(Vec::as_slice)
    }

    pub fn client_count(&self) -> usize {
        self.summaries.len()
    }

    pub fn transaction_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }
}
