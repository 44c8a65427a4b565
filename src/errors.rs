use thiserror::Error;

/// Error type that captures boundary and engine failures.
#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("unparseable amount `{value}` in field `{field}` of record {record}")]
    ParseAmount {
        field: String,
        record: String,
        value: String,
    },
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, ForecastError>;
