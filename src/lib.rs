//! Drill-down view-model over fraud-annotated transactions: per-client indicator
//! unions, expandable into each client's own transactions, next to the backend's
//! quality metrics.

pub mod aggregator;
pub mod catalog;
pub mod config;
pub mod dashboard;
pub mod models;
pub mod source;
pub mod types;
pub mod view;
