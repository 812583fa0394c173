//! Tool errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// The tool ran but could not produce a result.
    #[error("Tool execution failed: {0}")]
    ExecutionFailed(String),

    #[error("Parameter validation failed: {0}")]
    ValidationFailed(String),

    /// Raised while building a tool, never while running one.
    #[error("Tool configuration error: {0}")]
    Configuration(String),
}
