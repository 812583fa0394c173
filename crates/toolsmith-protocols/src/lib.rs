//! # toolsmith Protocols
//!
//! Contracts shared between agent definitions and the Agent Runtime that
//! interprets them. Contains interface definitions and data types only.
//!
//! ## Core Types
//!
//! - [`Tool`] - Trait for functions an agent may invoke
//! - [`AgentConfig`] - Declarative agent definition
//! - [`ModelRef`] - Reference to a generation backend
//! - [`OutputSchema`] - Structured output contract enforced after generation

pub mod error;
pub mod tool;
pub mod agent;
pub mod model;
pub mod output;
pub mod types;

pub use tool::{Tool, ToolContext, ToolDefinition, ToolResult};
pub use agent::AgentConfig;
pub use model::ModelRef;
pub use output::OutputSchema;
pub use error::{AgentError, RegistryError, SchemaError, ToolError};
pub use types::*;
