use thiserror::Error;

/// Contract errors raised by the core. All of them mean caller misuse:
/// there is nothing to retry and no partial result to salvage.
#[derive(Error, Debug)]
pub enum DiceError {
    #[error("invalid {kind} index {index}, must be < {len}")]
    IndexOutOfRange {
        kind: &'static str,
        index: usize,
        len: usize,
    },

    #[error("invalid length {actual}, expecting {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),
}

pub type DiceResult<T> = Result<T, DiceError>;
