mod category;
mod indicators;

pub use category::{Category, DEFAULT_CATEGORY};
pub use indicators::{category, is_indicator_key, label, ANOMALY_KEY, INDICATOR_SUFFIX, RULE_ROLLUP_KEY};
