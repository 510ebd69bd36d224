//! Renderer error types.

use thiserror::Error;

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can occur while rendering or exporting a plan.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Export/rasterization failed.
    #[error("Export failed: {0}")]
    Export(String),

    /// The plan cannot be rendered (degenerate geometry).
    #[error("Unrenderable plan: {0}")]
    InvalidPlan(String),
}
