use std::collections::BTreeSet;

use crate::types::{ClientId, IndicatorKey};

/// One summary row: a client and every indicator any of its transactions triggered.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ClientSummary {
    pub client: ClientId,
    pub frauds: BTreeSet<IndicatorKey>
}

impl ClientSummary {
    pub fn new(client: ClientId) -> Self {
        Self {
            client,
            frauds: BTreeSet::new()
        }
    }

    pub fn is_clean(&self) -> bool {
        self.frauds.is_empty()
    }
}
