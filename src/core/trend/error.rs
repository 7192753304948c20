use thiserror::Error;

/// Errors produced by the trend estimators.
#[derive(Debug, Error, PartialEq)]
pub enum TrendError {
    #[error("series has {len} samples but the operation needs at least {required}")]
    InsufficientData { len: usize, required: usize },

    #[error("invalid window: {reason}")]
    InvalidWindow { reason: String },

    #[error("x and y lengths differ: {x} vs {y}")]
    LengthMismatch { x: usize, y: usize },

    #[error("division by zero while computing {context}")]
    DivisionByZero { context: &'static str },

    #[error("no step differences fell into the {bucket} bucket")]
    EmptyBucket { bucket: &'static str },
}
