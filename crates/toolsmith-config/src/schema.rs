//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use toolsmith_protocols::ModelRef;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Model overrides keyed by agent name.
    #[serde(default)]
    pub models: HashMap<String, ModelConfig>,
}

impl Config {
    /// Model override for the named agent, if configured.
    pub fn model_for(&self, agent: &str) -> Option<ModelRef> {
        self.models.get(agent).map(ModelConfig::to_model_ref)
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default `EnvFilter` directive. `RUST_LOG` takes precedence.
    #[serde(default = "default_level")]
    pub level: String,

    /// Directory for daily-rolling log files. Console only when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            dir: None,
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

/// Model configuration for one agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    pub model: String,

    /// Environment variable holding the API key. Implies a proxied backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key_env: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl ModelConfig {
    pub fn to_model_ref(&self) -> ModelRef {
        if self.api_key_env.is_none() && self.base_url.is_none() {
            return ModelRef::named(&self.model);
        }
        ModelRef::Proxied {
            model: self.model.clone(),
            api_key_env: self.api_key_env.clone(),
            base_url: self.base_url.clone(),
        }
    }
}
