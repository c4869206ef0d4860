use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::catalog;
use crate::models::errors::RecordError;
use crate::types::{lenient, ClientId, IndicatorKey};

/// A single transaction as delivered by the retrieval collaborator.
///
/// Every descriptive field is optional: records are produced outside this crate
/// and a missing or malformed cell renders blank rather than rejecting the row.
/// Fraud indicators are an open set recognised by naming convention, so they are
/// kept as `(key, flag)` pairs in the order they appeared on the wire.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transaction {
    /// Upstream identifier (`id_transaction` in exports, `transaction` in the API).
    pub transaction_id: Option<String>,
    /// The client the transaction belongs to, exactly as delivered.
    pub client: Option<ClientId>,
    /// Timestamp of the operation, kept as delivered.
    pub date: Option<String>,
    pub card: Option<String>,
    pub date_of_birth: Option<String>,
    pub passport: Option<String>,
    pub passport_valid_to: Option<String>,
    pub phone: Option<String>,
    pub operation_type: Option<String>,
    pub amount: Option<Decimal>,
    pub operation_result: Option<String>,
    pub terminal_type: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    indicators: Vec<(IndicatorKey, bool)>
}

impl Transaction {
    /// Builds a transaction from the raw field map of one record.
    pub fn from_fields(fields: &Map<String, Value>) -> Self {
        let text = |key: &str| lenient::text(fields.get(key));

        let indicators = fields.iter()
            .filter(|(key, _)| catalog::is_indicator_key(key))
            .map(|(key, value)| (key.clone(), lenient::truthy(value)))
            .collect();

        Self {
            transaction_id: text("id_transaction").or_else(|| text("transaction")),
            client: lenient::identity(fields.get("client")),
            date: text("date"),
            card: text("card"),
            date_of_birth: text("date_of_birth"),
            passport: text("passport"),
            passport_valid_to: text("passport_valid_to"),
            phone: text("phone"),
            operation_type: text("operation_type"),
            amount: lenient::decimal(fields.get("amount")),
            operation_result: text("operation_result"),
            terminal_type: text("terminal_type"),
            city: text("city"),
            address: text("address"),
            indicators
        }
    }

    /// Builds a transaction from one element of a transaction list.
    ///
    /// # Errors
    /// Returns `RecordError::NotAnObject` if the element is not a JSON object.
    pub fn from_value(value: &Value) -> Result<Self, RecordError> {
        match value {
            Value::Object(fields) => Ok(Self::from_fields(fields)),
            other => Err(RecordError::not_an_object(other))
        }
    }

    /// All indicator flags carried by this transaction, set or not.
    pub fn indicators(&self) -> impl Iterator<Item = (&str, bool)> {
        self.indicators.iter().map(|(key, flag)| (key.as_str(), *flag))
    }

    /// Keys of the indicators this transaction triggered, in wire order.
    pub fn triggered_indicators(&self) -> impl Iterator<Item = &str> {
        self.indicators().filter(|(_, flag)| *flag).map(|(key, _)| key)
    }

    pub fn is_triggered(&self, key: &str) -> bool {
        self.indicators.iter().any(|(indicator, flag)| *flag && indicator == key)
    }
}

impl<'de> Deserialize<'de> for Transaction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let fields = Map::<String, Value>::deserialize(deserializer)?;
        Ok(Transaction::from_fields(&fields))
    }
}
