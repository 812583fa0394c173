//! # toolsmith Config
//!
//! Configuration management: TOML loading with `${VAR}` expansion, validation,
//! per-agent model overrides and explicit credential resolution.

mod credential;
mod error;
mod loader;
mod schema;
mod validator;

pub use credential::{resolve_credential, resolve_credential_with, Credential};
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::*;
pub use validator::{ConfigValidator, ValidationError, ValidationResult, ValidationWarning};
