//! Error types for chronolane operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Unknown week start: {0}")]
    UnknownWeekStart(String),

    #[error("Unknown timeline kind: {0}")]
    UnknownTimelineKind(String),

    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
