//! Structured output contract.
//!
//! An [`OutputSchema`] is handed to the Agent Runtime as a constraint on the
//! generated response. It is derived from a Rust record type with `schemars`,
//! so the record and its schema cannot drift apart, and candidates are checked
//! against it with `jsonschema` before they are deserialized.

use std::fmt;
use std::sync::Arc;

use jsonschema::error::ValidationErrorKind;
use jsonschema::{ValidationError, Validator};
use once_cell::sync::OnceCell;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{SchemaError, ROOT_FIELD};

/// JSON Schema description of a structured response.
///
/// The compiled validator is built on first use and shared between clones.
#[derive(Clone, Serialize, Deserialize)]
pub struct OutputSchema {
    name: String,
    schema: serde_json::Value,
    #[serde(skip)]
    validator: Arc<OnceCell<Validator>>,
}

impl fmt::Debug for OutputSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutputSchema")
            .field("name", &self.name)
            .field("schema", &self.schema)
            .field("compiled", &self.validator.get().is_some())
            .finish()
    }
}

impl PartialEq for OutputSchema {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.schema == other.schema
    }
}

impl OutputSchema {
    /// Derive the schema of `T`.
    pub fn of<T: JsonSchema>() -> Result<Self, SchemaError> {
        let root = schemars::schema_for!(T);
        let schema = serde_json::to_value(&root)
            .map_err(|e| SchemaError::InvalidSchema(e.to_string()))?;
        Ok(Self::from_value(T::schema_name(), schema))
    }

    /// Wrap an already serialized JSON Schema.
    pub fn from_value(name: impl Into<String>, schema: serde_json::Value) -> Self {
        Self {
            name: name.into(),
            schema,
            validator: Arc::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn schema(&self) -> &serde_json::Value {
        &self.schema
    }

    /// Pretty-printed schema, suitable for embedding in a prompt.
    pub fn describe(&self) -> String {
        format!("{:#}", self.schema)
    }

    /// OpenAI `response_format` payload.
    pub fn to_openai_response_format(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "json_schema",
            "json_schema": {
                "name": self.name,
                "schema": self.schema
            }
        })
    }

    /// Gemini `response_schema` payload. Gemini rejects the draft marker and title.
    pub fn to_gemini_response_schema(&self) -> serde_json::Value {
        let mut schema = self.schema.clone();
        if let Some(obj) = schema.as_object_mut() {
            obj.remove("$schema");
            obj.remove("title");
        }
        schema
    }

    /// Check a candidate value, reporting the first offending field.
    pub fn validate(&self, candidate: &serde_json::Value) -> Result<(), SchemaError> {
        let validator = self.compiled()?;
        match validator.iter_errors(candidate).next() {
            Some(error) => Err(SchemaError::violation(violated_field(&error), error.to_string())),
            None => Ok(()),
        }
    }

    fn compiled(&self) -> Result<&Validator, SchemaError> {
        self.validator.get_or_try_init(|| {
            Validator::new(&self.schema).map_err(|e| SchemaError::InvalidSchema(e.to_string()))
        })
    }

    /// Validate a candidate and deserialize it into its record type.
    pub fn parse<T: DeserializeOwned>(&self, candidate: serde_json::Value) -> Result<T, SchemaError> {
        self.validate(&candidate)?;
        serde_json::from_value(candidate)
            .map_err(|e| SchemaError::violation(ROOT_FIELD, e.to_string()))
    }

    /// Parse raw model text (optionally fenced as a Markdown code block) and validate it.
    pub fn parse_text(&self, text: &str) -> Result<serde_json::Value, SchemaError> {
        let value: serde_json::Value = serde_json::from_str(strip_code_fence(text))
            .map_err(|e| SchemaError::MalformedJson(e.to_string()))?;
        self.validate(&value)?;
        Ok(value)
    }
}

/// Name of the top-level field an error points at.
fn violated_field(error: &ValidationError<'_>) -> String {
    if let ValidationErrorKind::Required { property } = &error.kind {
        if let Some(name) = property.as_str() {
            return name.to_string();
        }
    }
    let path = error.instance_path.to_string();
    path.split('/')
        .find(|segment| !segment.is_empty())
        .map(|segment| segment.replace("~1", "/").replace("~0", "~"))
        .unwrap_or_else(|| ROOT_FIELD.to_string())
}

/// Models often wrap JSON in a ```json fence despite being told not to.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = match rest.find('\n') {
        Some(idx) => &rest[idx + 1..],
        None => rest,
    };
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
