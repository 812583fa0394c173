//! Session state.
//!
//! The Agent Runtime stores an agent's final response in session state under
//! the agent's `output_key`, where downstream agents and callers can read it.

use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

use toolsmith_protocols::agent::AgentConfig;
use toolsmith_protocols::error::AgentError;

/// Key/value state shared by the agents of one conversation.
#[derive(Debug, Default)]
pub struct SessionState {
    id: String,
    values: RwLock<HashMap<String, serde_json::Value>>,
}

impl SessionState {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            values: RwLock::new(HashMap::new()),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Accept an agent's final response text.
    ///
    /// With an output schema the text must be JSON conforming to it; the parsed
    /// value is stored. Without one the raw text is stored as a string. Nothing
    /// is stored when the agent has no `output_key`.
    pub fn record_output(
        &self,
        agent: &AgentConfig,
        raw: &str,
    ) -> Result<serde_json::Value, AgentError> {
        let value = match &agent.output_schema {
            Some(schema) => schema.parse_text(raw).inspect_err(|e| {
                tracing::warn!(agent = %agent.name, error = %e, "Structured output rejected");
            })?,
            None => serde_json::Value::String(raw.to_string()),
        };

        if let Some(key) = &agent.output_key {
            tracing::debug!(session = %self.id, agent = %agent.name, key = %key, "Stored agent output");
            self.values.write().insert(key.clone(), value.clone());
        }

        Ok(value)
    }

    /// Read a raw value.
    pub fn get_value(&self, key: &str) -> Option<serde_json::Value> {
        self.values.read().get(key).cloned()
    }

    /// Read a value as `T`. `None` if absent or of a different shape.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.get_value(key)
            .and_then(|v| serde_json::from_value(v).ok())
    }

    pub fn set(&self, key: impl Into<String>, value: serde_json::Value) {
        self.values.write().insert(key.into(), value);
    }

    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.values.read().keys().cloned().collect();
        keys.sort();
        keys
    }
}
