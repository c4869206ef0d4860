mod client_id;
pub mod lenient;
#[cfg(test)]
mod tests;

pub use client_id::ClientId;

pub type IndicatorKey = String;

/// Issuance stamp of a refresh. Later refreshes carry larger values.
pub type Generation = u64;
