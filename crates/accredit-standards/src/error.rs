use thiserror::Error;

use crate::catalog::ValidationError;

#[derive(Debug, Error)]
pub enum StandardError {
    #[error("unknown standard: {0}")]
    UnknownStandard(String),

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
}
