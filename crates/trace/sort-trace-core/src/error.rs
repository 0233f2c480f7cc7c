//! Error types for hosts that sit in front of the generator.
//!
//! Trace generation itself is infallible; these cover selector parsing,
//! the input-size cap and serialization.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TraceError {
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),
    #[error("sequence has {len} elements, at most {max} are allowed")]
    TooManyElements { len: usize, max: usize },
    #[error("value at index {index} is not finite: {value}")]
    NonFiniteValue { index: usize, value: f64 },
    #[error("serialize trace: {0}")]
    Serialize(#[from] serde_json::Error),
}
