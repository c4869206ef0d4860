use super::{AggregationError, Aggregator, MissingClientPolicy};

use std::collections::{BTreeSet, HashMap, HashSet};
use std::str::FromStr;

use anyhow::{anyhow, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::{json, Map, Value};

use crate::models::Transaction;
use crate::types::ClientId;

const INDICATOR_POOL: [&str; 5] = [
    "amount_outlier_fraud",
    "time_diff_fraud",
    "city_diff_fraud",
    "ml_fraud_status",
    "velocity_spike_fraud"
];

fn create_transaction(value: Value) -> Result<Transaction> {
    Ok(Transaction::from_value(&value)?)
}

fn frauds(keys: &[&str]) -> BTreeSet<String> {
    keys.iter().map(|key| key.to_string()).collect()
}

fn random_transactions(rng: &mut StdRng, count: usize) -> Vec<Transaction> {
    (0..count)
        .map(|index| {
            let mut fields = Map::new();
            fields.insert("id_transaction".to_string(), json!(index));
            fields.insert("client".to_string(), json!(format!("C{}", rng.random_range(0..7))));

            for key in INDICATOR_POOL {
                if rng.random_bool(0.5) {
                    fields.insert(key.to_string(), json!(rng.random_bool(0.3)));
                }
            }

            Transaction::from_fields(&fields)
        })
        .collect()
}

#[test]
fn test_groups_by_first_appearance_and_unions_indicators() -> Result<()> {
    let transactions = vec![
        create_transaction(json!({ "id_transaction": 1, "client": "A", "amount_outlier_fraud": true, "time_diff_fraud": false }))?,
        create_transaction(json!({ "id_transaction": 2, "client": "A", "time_diff_fraud": true }))?,
        create_transaction(json!({ "id_transaction": 3, "client": "B" }))?,
    ];

    let aggregation = Aggregator::default().aggregate(transactions)?;
    let summaries = aggregation.summaries();

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].client, ClientId::from("A"));
    assert_eq!(summaries[0].frauds, frauds(&["amount_outlier_fraud", "time_diff_fraud"]));
    assert_eq!(summaries[1].client, ClientId::from("B"));
    assert!(summaries[1].is_clean());

    let bucket_a = aggregation.bucket(&ClientId::from("A")).ok_or_else(|| anyhow!("bucket A missing"))?;
    let bucket_b = aggregation.bucket(&ClientId::from("B")).ok_or_else(|| anyhow!("bucket B missing"))?;

    assert_eq!(bucket_a.len(), 2);
    assert_eq!(bucket_a[0].transaction_id.as_deref(), Some("1"));
    assert_eq!(bucket_a[1].transaction_id.as_deref(), Some("2"));
    assert_eq!(bucket_b.len(), 1);
    assert_eq!(aggregation.transaction_count(), 3);

    Ok(())
}

#[test]
fn test_client_order_is_first_appearance_not_alphabetical() -> Result<()> {
    let transactions = vec![
        create_transaction(json!({ "client": "Zed" }))?,
        create_transaction(json!({ "client": "Amy", "ml_fraud_status": true }))?,
        create_transaction(json!({ "client": "Zed" }))?,
        create_transaction(json!({ "client": "Bob" }))?,
    ];

    let aggregation = Aggregator::default().aggregate(transactions)?;
    let clients: Vec<String> = aggregation.summaries().iter().map(|summary| summary.client.to_string()).collect();

    assert_eq!(clients, vec!["Zed", "Amy", "Bob"]);

    Ok(())
}

#[test]
fn test_indicator_triggered_many_times_appears_once() -> Result<()> {
    let transactions = (0..3)
        .map(|_| create_transaction(json!({ "client": "A", "city_diff_fraud": true })))
        .collect::<Result<Vec<_>>>()?;

    let aggregation = Aggregator::default().aggregate(transactions)?;

    assert_eq!(aggregation.summaries()[0].frauds, frauds(&["city_diff_fraud"]));

    Ok(())
}

#[test]
fn test_empty_input_yields_empty_aggregation() -> Result<()> {
    let aggregation = Aggregator::default().aggregate(Vec::new())?;

    assert!(aggregation.is_empty());
    assert_eq!(aggregation.client_count(), 0);
    assert_eq!(aggregation.transaction_count(), 0);

    Ok(())
}

#[test]
fn test_missing_client_goes_to_unknown_bucket_by_default() -> Result<()> {
    let transactions = vec![
        create_transaction(json!({ "client": "unknown" }))?,
        create_transaction(json!({ "amount": 10, "time_diff_fraud": true }))?,
        create_transaction(json!({ "client": "", "id_transaction": 3 }))?,
        create_transaction(json!({ "client": null }))?,
    ];

    let aggregation = Aggregator::new(MissingClientPolicy::Sentinel).aggregate(transactions)?;

    assert_eq!(aggregation.client_count(), 2);
    assert_eq!(aggregation.bucket(&ClientId::from("unknown")).map(<[_]>::len), Some(1));
    assert_eq!(aggregation.bucket(&ClientId::Unknown).map(<[_]>::len), Some(3));
    assert_eq!(aggregation.summaries()[1].frauds, frauds(&["time_diff_fraud"]));

    Ok(())
}

#[test]
fn test_client_identities_are_grouped_exactly_as_delivered() -> Result<()> {
    let transactions = vec![
        create_transaction(json!({ "client": "A" }))?,
        create_transaction(json!({ "client": " A " }))?,
        create_transaction(json!({ "client": 7 }))?,
        create_transaction(json!({ "client": "7" }))?,
        create_transaction(json!({ "client": true }))?,
        create_transaction(json!({ "client": "   " }))?,
    ];

    let aggregation = Aggregator::new(MissingClientPolicy::Reject).aggregate(transactions)?;
    let clients: Vec<ClientId> = aggregation.summaries().iter().map(|summary| summary.client.clone()).collect();

    assert_eq!(clients, vec![
        ClientId::from("A"),
        ClientId::from(" A "),
        ClientId::Scalar("7".to_string()),
        ClientId::from("7"),
        ClientId::Scalar("true".to_string()),
        ClientId::from("   "),
    ]);
    assert!(clients.iter().all(|client| aggregation.bucket(client).map(<[_]>::len) == Some(1)));

    Ok(())
}

#[test]
fn test_missing_client_fails_run_under_reject_policy() -> Result<()> {
    let transactions = vec![
        create_transaction(json!({ "client": "A" }))?,
        create_transaction(json!({ "id_transaction": 9 }))?,
    ];

    let result = Aggregator::new(MissingClientPolicy::Reject).aggregate(transactions);

    assert!(matches!(result, Err(AggregationError::MissingClient { position: 1, .. })));

    Ok(())
}

#[test]
fn test_aggregation_is_idempotent_on_unchanged_input() {
    let mut rng = StdRng::seed_from_u64(7);
    let transactions = random_transactions(&mut rng, 200);
    let aggregator = Aggregator::default();

    let first = aggregator.aggregate(transactions.clone());
    let second = aggregator.aggregate(transactions);

    assert!(matches!((first, second), (Ok(first), Ok(second)) if first == second));
}

#[test]
fn test_random_lists_keep_bijection_and_exact_union() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..25 {
        let count = rng.random_range(0..120);
        let transactions = random_transactions(&mut rng, count);
        let aggregation = Aggregator::default().aggregate(transactions.clone())?;

        let distinct_clients: HashSet<ClientId> = transactions.iter()
            .filter_map(|transaction| transaction.client.clone())
            .collect();
        let summary_clients: HashSet<ClientId> = aggregation.summaries().iter()
            .map(|summary| summary.client.clone())
            .collect();

        assert_eq!(summary_clients, distinct_clients);
        assert_eq!(aggregation.summaries().len(), distinct_clients.len());
        assert_eq!(aggregation.transaction_count(), transactions.len());

        let mut expected_frauds = HashMap::<ClientId, BTreeSet<String>>::new();

        for transaction in &transactions {
            let client = transaction.client.clone().unwrap_or(ClientId::Unknown);
            let entry = expected_frauds.entry(client.clone()).or_default();
            entry.extend(transaction.triggered_indicators().map(str::to_string));

            let bucket = aggregation.bucket(&client).ok_or_else(|| anyhow!("bucket {client} missing"))?;
            let occurrences = bucket.iter().filter(|candidate| *candidate == transaction).count();

            assert!(occurrences >= 1);
        }

        for summary in aggregation.summaries() {
            assert_eq!(Some(&summary.frauds), expected_frauds.get(&summary.client));

            let bucket = aggregation.bucket(&summary.client).ok_or_else(|| anyhow!("bucket missing"))?;
            let ids: Vec<usize> = bucket.iter()
                .filter_map(|transaction| transaction.transaction_id.as_deref())
                .map(usize::from_str)
                .collect::<Result<_, _>>()?;

            assert!(ids.windows(2).all(|pair| pair[0] < pair[1]), "bucket must keep arrival order");
        }
    }

    Ok(())
}

#[test]
fn test_missing_client_policy_parses_from_text() {
    assert_eq!(MissingClientPolicy::from_str("Reject"), Ok(MissingClientPolicy::Reject));
    assert_eq!(MissingClientPolicy::from_str(" sentinel "), Ok(MissingClientPolicy::Sentinel));
    assert!(MissingClientPolicy::from_str("drop").is_err());
}
