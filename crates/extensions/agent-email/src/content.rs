//! The structured email record.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use toolsmith_protocols::error::SchemaError;
use toolsmith_protocols::output::OutputSchema;

/// A generated email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct EmailContent {
    /// The subject of the email
    subject: String,
    /// The body of the email
    body: String,
}

impl EmailContent {
    pub fn new(subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            body: body.into(),
        }
    }

    /// Output schema describing this record.
    pub fn output_schema() -> Result<OutputSchema, SchemaError> {
        OutputSchema::of::<Self>()
    }

    /// Validate a candidate value and take it as an email.
    pub fn from_value(candidate: serde_json::Value) -> Result<Self, SchemaError> {
        Self::output_schema()?.parse(candidate)
    }

    /// Validate raw model text and take it as an email.
    pub fn from_model_text(text: &str) -> Result<Self, SchemaError> {
        let schema = Self::output_schema()?;
        let value = schema.parse_text(text)?;
        schema.parse(value)
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

#[cfg(test)]
#[path = "content_tests.rs"]
mod tests;
