use crate::catalog::category::{Category, DEFAULT_CATEGORY};

/// Suffix shared by every rule-based indicator column.
pub const INDICATOR_SUFFIX: &str = "_fraud";
/// Anomaly-model verdict. A fraud signal that predates the suffix convention.
pub const ANOMALY_KEY: &str = "ml_fraud_status";
/// Roll-up of all rule indicators. Internal, so it carries an empty label.
pub const RULE_ROLLUP_KEY: &str = "alg_fraud_status";

struct Entry {
    key: &'static str,
    label: &'static str,
    category: Category
}

const ENTRIES: &[Entry] = &[
    Entry { key: ANOMALY_KEY, label: "Anomaly", category: Category::Blue },
    Entry { key: RULE_ROLLUP_KEY, label: "", category: Category::GeekBlue },
    Entry { key: "passport_validity_fraud", label: "Passport validity", category: Category::Purple },
    Entry { key: "time_diff_fraud", label: "Time difference", category: Category::Cyan },
    Entry { key: "address_diff_fraud", label: "Address difference", category: Category::Magenta },
    Entry { key: "city_diff_fraud", label: "City difference", category: Category::Red },
    Entry { key: "data_discrepancy_fraud", label: "Data discrepancy", category: Category::Orange },
    Entry { key: "amount_outlier_fraud", label: "Amount outlier", category: Category::Lime },
];

fn lookup(key: &str) -> Option<&'static Entry> {
    ENTRIES.iter().find(|entry| entry.key == key)
}

/// Whether a record field carries a fraud indicator.
pub fn is_indicator_key(key: &str) -> bool {
    key.ends_with(INDICATOR_SUFFIX) || key == ANOMALY_KEY
}

/// Human-readable label of an indicator. Unknown keys are shown verbatim.
pub fn label(key: &str) -> &str {
    lookup(key).map_or(key, |entry| entry.label)
}

/// Display category of an indicator. Unknown keys fall back to [`DEFAULT_CATEGORY`].
pub fn category(key: &str) -> Category {
    lookup(key).map_or(DEFAULT_CATEGORY, |entry| entry.category)
}
