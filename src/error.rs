//! Error types for the business case calculator

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalculatorError {
    #[error("Invalid input '{field}' = {value}: {reason}")]
    InvalidInput {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CalculatorResult<T> = Result<T, CalculatorError>;
