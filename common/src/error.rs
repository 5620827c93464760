//! Per-entry failures of the normalization pipeline.

use thiserror::Error;

/// Why a single upstream entry produced no record.
///
/// A rejection only ever affects the entry it was raised for; the rest of
/// the batch keeps going.
#[derive(Debug, Error)]
pub enum Rejected {
    #[error("malformed connection entry: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("invalid `{field}` timestamp {value:?}")]
    InvalidTimestamp { field: &'static str, value: String },

    #[error("unknown solar system {0}")]
    UnknownSystem(u64),

    #[error("lookup of solar system {id} failed: {reason}")]
    Lookup { id: u64, reason: String },
}
