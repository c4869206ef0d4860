use crate::aggregator::Aggregation;
use crate::catalog;
use crate::catalog::Category;
use crate::models::Transaction;
use crate::types::ClientId;

/// Column titles of an expanded client, in display order.
pub const DETAIL_COLUMNS: [&str; 13] = [
    "Date",
    "Card",
    "Date of birth",
    "Passport",
    "Passport valid to",
    "Phone",
    "Operation type",
    "Amount",
    "Operation result",
    "Terminal type",
    "City",
    "Address",
    "Frauds"
];

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Tag {
    pub key: String,
    pub label: String,
    pub category: Category
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SummaryRow {
    pub client: ClientId,
    pub tags: Vec<Tag>
}

/// One transaction of an expanded client. `cells` line up with all but the
/// last of [`DETAIL_COLUMNS`]; `tags` fill the Frauds column.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DetailRow {
    pub cells: [String; 12],
    pub tags: Vec<Tag>
}

/// Turns indicator keys into display tags. Keys whose label is empty are internal and not shown.
pub fn tags<'a>(keys: impl IntoIterator<Item = &'a str>) -> Vec<Tag> {
    keys.into_iter()
        .filter(|key| !catalog::label(key).is_empty())
        .map(|key| Tag {
            key: key.to_string(),
            label: catalog::label(key).to_string(),
            category: catalog::category(key)
        })
        .collect()
}

/// One row per client with the union of everything the client triggered.
pub fn summary_rows(aggregation: &Aggregation) -> Vec<SummaryRow> {
    aggregation.summaries()
        .iter()
        .map(|summary| SummaryRow {
            client: summary.client.clone(),
            tags: tags(summary.frauds.iter().map(String::as_str))
        })
        .collect()
}

/// Expands one client into its transactions, each tagged only with its own indicators.
///
/// Reads the bucket the aggregator already built; `None` if the client is not in it.
pub fn detail_rows(aggregation: &Aggregation, client: &ClientId) -> Option<Vec<DetailRow>> {
    let bucket = aggregation.bucket(client)?;

    Some(bucket.iter().map(detail_row).collect())
}

fn detail_row(transaction: &Transaction) -> DetailRow {
    let cell = |value: &Option<String>| value.clone().unwrap_or_default();

    DetailRow {
        cells: [
            cell(&transaction.date),
            cell(&transaction.card),
            cell(&transaction.date_of_birth),
            cell(&transaction.passport),
            cell(&transaction.passport_valid_to),
            cell(&transaction.phone),
            cell(&transaction.operation_type),
            transaction.amount.map(|amount| amount.to_string()).unwrap_or_default(),
            cell(&transaction.operation_result),
            cell(&transaction.terminal_type),
            cell(&transaction.city),
            cell(&transaction.address)
        ],
        tags: tags(transaction.triggered_indicators())
    }
}
