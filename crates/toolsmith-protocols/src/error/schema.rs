//! Structured output errors.

use thiserror::Error;

/// Field name reported when a violation concerns the whole value.
pub const ROOT_FIELD: &str = "$";

#[derive(Debug, Error)]
pub enum SchemaError {
    /// The candidate lacks a required field or has a field of the wrong shape.
    #[error("Schema violation at '{field}': {message}")]
    Violation { field: String, message: String },

    #[error("Output is not valid JSON: {0}")]
    MalformedJson(String),

    #[error("Invalid output schema: {0}")]
    InvalidSchema(String),
}

impl SchemaError {
    pub fn violation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Violation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// The offending field, for violations.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Violation { field, .. } => Some(field),
            _ => None,
        }
    }
}
