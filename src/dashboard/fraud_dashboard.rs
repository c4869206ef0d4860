use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

use crate::aggregator::{Aggregation, Aggregator};
use crate::dashboard::notice::Notice;
use crate::dashboard::snapshot_store::{SnapshotStore, Stamped};
use crate::models::MetricsSnapshot;
use crate::source::DataSource;
use crate::types::Generation;

/// Completion signal from the upload collaborator.
#[derive(Debug, Clone)]
pub enum UploadSignal {
    Completed {
        file_name: String
    },
    Failed {
        file_name: String,
        reason: String
    }
}

/// What happened to one half of a refresh.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Outcome {
    /// The result became the held snapshot.
    Applied,
    /// A newer refresh had already been applied, so this result was dropped.
    Discarded,
    /// The fetch or the aggregation failed; the previous snapshot stays.
    Failed
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct RefreshReport {
    pub generation: Generation,
    pub transactions: Outcome,
    pub metrics: Outcome
}

/// Owns the displayed state: the current aggregation and the latest metrics.
///
/// Every refresh is stamped with a generation when it is issued. Its two fetches
/// run concurrently and each one lands in its own [`SnapshotStore`], which rejects
/// anything older than what it already holds. Failures never clear displayed
/// data; they surface as [`Notice`]s instead.
pub struct FraudDashboard<S> {
    source: S,
    aggregator: Aggregator,
    issued: AtomicU64,
    table: SnapshotStore<Aggregation>,
    metrics: SnapshotStore<MetricsSnapshot>,
    notices: mpsc::UnboundedSender<Notice>
}

impl<S: DataSource> FraudDashboard<S> {
    /// Creates a dashboard with no data yet, and the channel its notices arrive on.
    pub fn new(source: S, aggregator: Aggregator) -> (Self, mpsc::UnboundedReceiver<Notice>) {
        let (notices, receiver) = mpsc::unbounded_channel();

        let dashboard = Self {
            source,
            aggregator,
            issued: AtomicU64::new(0),
            table: SnapshotStore::new(),
            metrics: SnapshotStore::new(),
            notices
        };

        (dashboard, receiver)
    }

    /// Issues a refresh of both the transaction table and the metrics.
    ///
    /// The generation is taken when this is called, not when the future is first
    /// polled, so issuance order is the call order.
    pub fn refresh(&self) -> impl Future<Output = RefreshReport> + '_ {
        let generation = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        debug!("Issued refresh [{generation}]");

        async move {
            let (transactions, metrics) = tokio::join!(
                self.refresh_transactions(generation),
                self.refresh_metrics(generation)
            );

            RefreshReport { generation, transactions, metrics }
        }
    }

    /// Reacts to the end of a file upload. Only a successful upload triggers a refresh.
    pub async fn on_upload(&self, signal: UploadSignal) -> Option<RefreshReport> {
        match signal {
            UploadSignal::Completed { file_name } => {
                info!("Upload of [{file_name}] completed, refreshing");
                self.notify(Notice::info(format!("{file_name} file uploaded successfully.")));
                Some(self.refresh().await)
            }
            UploadSignal::Failed { file_name, reason } => {
                warn!("Upload of [{file_name}] failed: {reason}");
                self.notify(Notice::error(format!("{file_name} file upload failed: {reason}")));
                None
            }
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// The held aggregation: summary rows and their expansion index, from one run.
    pub fn table(&self) -> Option<Stamped<Aggregation>> {
        self.table.current()
    }

    pub fn metrics(&self) -> Option<Stamped<MetricsSnapshot>> {
        self.metrics.current()
    }

    pub fn subscribe_table(&self) -> watch::Receiver<Option<Stamped<Aggregation>>> {
        self.table.subscribe()
    }

    async fn refresh_transactions(&self, generation: Generation) -> Outcome {
        let transactions = match self.source.fetch_transactions().await {
            Ok(transactions) => transactions,
            Err(error) => {
                warn!("Refresh [{generation}] could not fetch transactions: {error}");
                self.notify(Notice::warning(format!("Could not load transactions: {error}")));
                return Outcome::Failed;
            }
        };

        if self.is_stale(&self.table, generation) {
            debug!("Refresh [{generation}] transactions arrived after a newer refresh, discarding");
            return Outcome::Discarded;
        }

        let aggregation = match self.aggregator.aggregate(transactions) {
            Ok(aggregation) => aggregation,
            Err(error) => {
                warn!("Refresh [{generation}] could not aggregate transactions: {error}");
                self.notify(Notice::error(format!("Could not group transactions: {error}")));
                return Outcome::Failed;
            }
        };

        let clients = aggregation.client_count();

        if self.table.publish(generation, aggregation) {
            debug!("Refresh [{generation}] applied [{clients}] clients");
            Outcome::Applied
        } else {
            debug!("Refresh [{generation}] aggregation superseded, discarding");
            Outcome::Discarded
        }
    }

    async fn refresh_metrics(&self, generation: Generation) -> Outcome {
        let metrics = match self.source.fetch_metrics().await {
            Ok(metrics) => metrics,
            Err(error) => {
                warn!("Refresh [{generation}] could not fetch metrics: {error}");
                self.notify(Notice::warning(format!("Could not load metrics: {error}")));
                return Outcome::Failed;
            }
        };

        if self.metrics.publish(generation, MetricsSnapshot::taken_now(metrics)) {
            debug!("Refresh [{generation}] applied metrics");
            Outcome::Applied
        } else {
            debug!("Refresh [{generation}] metrics superseded, discarding");
            Outcome::Discarded
        }
    }

    fn is_stale<T>(&self, store: &SnapshotStore<T>, generation: Generation) -> bool {
        store.generation().is_some_and(|held| held >= generation)
    }

    fn notify(&self, notice: Notice) {
        //NOTE: Nobody listening for notices is not an error; the log line has already been written
        let _ = self.notices.send(notice);
    }
}
