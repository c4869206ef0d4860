mod fraud_dashboard;
mod notice;
mod snapshot_store;

pub use fraud_dashboard::{FraudDashboard, Outcome, RefreshReport, UploadSignal};
pub use notice::{Notice, NoticeLevel};
pub use snapshot_store::{SnapshotStore, Stamped};
