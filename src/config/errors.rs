use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value [{value}] for [{variable}]: {reason}")]
    InvalidValue {
        variable: &'static str,
        value: String,
        reason: String
    }
}

impl ConfigError {
    pub fn invalid_value(variable: &'static str, value: &str, reason: impl ToString) -> Self {
        Self::InvalidValue {
            variable,
            value: value.to_string(),
            reason: reason.to_string()
        }
    }
}
