//! Agent protocol definitions.
//!
//! An agent is a declarative bundle interpreted by the Agent Runtime: a model
//! reference, instruction text, and either tools it may call or an output schema
//! its final response must satisfy.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::AgentError;
use crate::model::ModelRef;
use crate::output::OutputSchema;
use crate::types::Metadata;

/// Name the runtime reserves for the human side of a conversation.
const RESERVED_NAME: &str = "user";

/// Agent configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Agent name. Must be an identifier, unique within a runtime.
    pub name: String,

    /// Generation backend.
    pub model: ModelRef,

    /// Description of the agent, used by other agents to decide on delegation.
    #[serde(default)]
    pub description: String,

    /// Instruction text guiding the model.
    #[serde(default)]
    pub instruction: String,

    /// Tool IDs this agent can use.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<String>,

    /// Schema the final response must conform to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_schema: Option<OutputSchema>,

    /// Session state key under which the final response is stored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_key: Option<String>,

    /// Additional metadata.
    #[serde(default)]
    pub metadata: Metadata,
}

impl AgentConfig {
    pub fn new(name: impl Into<String>, model: impl Into<ModelRef>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
            description: String::new(),
            instruction: String::new(),
            tools: Vec::new(),
            output_schema: None,
            output_key: None,
            metadata: HashMap::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instruction = instruction.into();
        self
    }

    pub fn with_tools(mut self, tools: Vec<String>) -> Self {
        self.tools = tools;
        self
    }

    pub fn with_output_schema(mut self, schema: OutputSchema) -> Self {
        self.output_schema = Some(schema);
        self
    }

    pub fn with_output_key(mut self, key: impl Into<String>) -> Self {
        self.output_key = Some(key.into());
        self
    }

    /// Check the invariants the runtime relies on.
    pub fn validate(&self) -> Result<(), AgentError> {
        if !is_identifier(&self.name) {
            return Err(AgentError::invalid_config(
                &self.name,
                "name must be an identifier (letters, digits, underscores)",
            ));
        }
        if self.name == RESERVED_NAME {
            return Err(AgentError::invalid_config(
                &self.name,
                "name 'user' is reserved for end-user input",
            ));
        }
        if self.output_schema.is_some() && !self.tools.is_empty() {
            return Err(AgentError::invalid_config(
                &self.name,
                "if output_schema is set, tools must be empty",
            ));
        }
        if self.output_key.as_deref().is_some_and(str::is_empty) {
            return Err(AgentError::invalid_config(&self.name, "output_key cannot be empty"));
        }
        Ok(())
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
#[path = "agent_tests.rs"]
mod tests;
