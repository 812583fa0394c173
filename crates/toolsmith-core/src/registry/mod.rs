//! Registries for tools and agents.

mod base;
mod tool;
mod agent;

pub use base::{BaseRegistry, Registerable};
pub use tool::ToolRegistry;
pub use agent::AgentRegistry;
