use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Transaction record must be an object, found [{found}]")]
    NotAnObject {
        found: &'static str
    }
}

impl RecordError {
    pub fn not_an_object(value: &Value) -> Self {
        let found = match value {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object"
        };

        Self::NotAnObject { found }
    }
}
