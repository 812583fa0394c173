//! # toolsmith Core
//!
//! The in-process side of the Agent Runtime contract.
//!
//! ## Components
//!
//! - [`ToolRegistry`] / [`AgentRegistry`] - Registries keyed by tool id and agent name
//! - [`ToolInvoker`] - Validates and executes tool calls
//! - [`SessionState`] - Key/value state that receives an agent's `output_key` result

pub mod invoker;
pub mod registry;
pub mod session;

pub use invoker::ToolInvoker;
pub use registry::{AgentRegistry, ToolRegistry};
pub use session::SessionState;
