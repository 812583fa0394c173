//! Explicit credential resolution.
//!
//! Credentials are read from the environment once, at startup, and fail with
//! [`ConfigError::MissingCredential`] instead of passing an empty key downstream.

use std::fmt;

use crate::error::ConfigError;

/// An API key. `Debug` and `Display` never print the value.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    source: String,
    value: String,
}

impl Credential {
    /// Name of the environment variable the key came from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The secret itself, for handing to a backend client.
    pub fn expose(&self) -> &str {
        &self.value
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("source", &self.source)
            .field("value", &"<redacted>")
            .finish()
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}=<redacted>", self.source)
    }
}

/// Read a credential from the process environment.
pub fn resolve_credential(var: &str) -> Result<Credential, ConfigError> {
    resolve_credential_with(var, |name| std::env::var(name).ok())
}

/// Read a credential through an arbitrary lookup.
pub fn resolve_credential_with<F>(var: &str, lookup: F) -> Result<Credential, ConfigError>
where
    F: FnOnce(&str) -> Option<String>,
{
    match lookup(var) {
        Some(value) if !value.trim().is_empty() => {
            tracing::debug!(var, "Resolved credential");
            Ok(Credential {
                source: var.to_string(),
                value,
            })
        }
        _ => Err(ConfigError::MissingCredential(var.to_string())),
    }
}
