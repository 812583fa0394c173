//! Agent errors.

use thiserror::Error;

use super::{SchemaError, ToolError};

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("Agent not found: {0}")]
    NotFound(String),

    #[error("Invalid config for agent {agent}: {message}")]
    InvalidConfig { agent: String, message: String },

    #[error("Structured output rejected: {0}")]
    Output(#[from] SchemaError),

    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),
}

impl AgentError {
    pub fn invalid_config(agent: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            agent: agent.into(),
            message: message.into(),
        }
    }
}
