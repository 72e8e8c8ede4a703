use thiserror::Error;

use crate::Instrument;

/// Validation errors for envelope metadata.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("request_id must be at least 8 characters")]
    InvalidRequestId,
    #[error("schema_version must match vMAJOR.MINOR.PATCH: '{value}'")]
    InvalidSchemaVersion { value: String },
}

/// Rejections raised while populating an observation collection.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CollectionError {
    #[error("observation instrument {found} does not match collection instrument {expected}")]
    InstrumentMismatch {
        expected: Instrument,
        found: Instrument,
    },
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Collection(#[from] CollectionError),

    #[error("malformed dataset: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unable to read dataset: {0}")]
    Io(#[from] std::io::Error),
}
