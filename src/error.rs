use serde::{Deserialize, Serialize};
use thiserror::Error;

#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum CreateError {
    #[error("Capacity of a top-k must be positive.")]
    InvalidCapacity,
    #[error("Invalid top-k options: {reason}.")]
    InvalidOptions { reason: String },
}
