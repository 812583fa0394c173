//! Generation backend references.
//!
//! A [`ModelRef`] is opaque to the agents: it names a backend and, for proxied
//! models, the environment variable the credential is read from. The credential
//! value itself is resolved at startup and never stored in an agent config.

use serde::{Deserialize, Serialize};

/// Reference to a generation backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelRef {
    /// A model the runtime resolves by name with its own credentials.
    Named { model: String },

    /// A model reached through an OpenAI-compatible proxy with its own key.
    Proxied {
        model: String,

        /// Environment variable holding the API key.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        api_key_env: Option<String>,

        #[serde(default, skip_serializing_if = "Option::is_none")]
        base_url: Option<String>,
    },
}

impl ModelRef {
    pub fn named(model: impl Into<String>) -> Self {
        Self::Named {
            model: model.into(),
        }
    }

    pub fn proxied(model: impl Into<String>, api_key_env: impl Into<String>) -> Self {
        Self::Proxied {
            model: model.into(),
            api_key_env: Some(api_key_env.into()),
            base_url: None,
        }
    }

    /// Model identifier as understood by the backend.
    pub fn model(&self) -> &str {
        match self {
            Self::Named { model } | Self::Proxied { model, .. } => model,
        }
    }

    /// Environment variable the credential must be read from, if any.
    pub fn api_key_env(&self) -> Option<&str> {
        match self {
            Self::Named { .. } => None,
            Self::Proxied { api_key_env, .. } => api_key_env.as_deref(),
        }
    }
}

impl From<&str> for ModelRef {
    fn from(model: &str) -> Self {
        Self::named(model)
    }
}

impl std::fmt::Display for ModelRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Named { model } => write!(f, "{}", model),
            Self::Proxied { model, .. } => write!(f, "proxy/{}", model),
        }
    }
}
