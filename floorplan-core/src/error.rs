//! Error types for floor-plan operations.

use thiserror::Error;

/// Result type for floor-plan operations.
pub type PlanResult<T> = Result<T, PlanError>;

/// Errors that can occur while manipulating a floor plan.
#[derive(Debug, Error)]
pub enum PlanError {
    /// Element not found in the plan.
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// A room dimension could not be parsed or is out of range.
    #[error("Invalid room dimension {field}: {input:?}")]
    InvalidDimension {
        /// Which dimension was rejected ("width" or "height").
        field: &'static str,
        /// The offending input text.
        input: String,
    },

    /// Plan serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A palette asset carried an unusable file path or base URL.
    #[error("Invalid asset URL: {0}")]
    InvalidAssetUrl(String),
}
