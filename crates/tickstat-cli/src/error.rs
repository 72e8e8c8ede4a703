use thiserror::Error;
use tickstat_core::{CollectionError, CoreError, ValidationError};

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Collection(#[from] CollectionError),

    #[error("invalid input: {0}")]
    Input(String),

    #[error("strict mode failed: warnings={warning_count}")]
    StrictModeViolation { warning_count: usize },

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Collection(_) => 3,
            Self::Input(_) => 4,
            Self::StrictModeViolation { .. } => 5,
            Self::Serialization(_) | Self::Io(_) => 10,
        }
    }
}

impl From<CoreError> for CliError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Collection(error) => Self::Collection(error),
            CoreError::Serialization(_) | CoreError::Io(_) => Self::Input(error.to_string()),
        }
    }
}
