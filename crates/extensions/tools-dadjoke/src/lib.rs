//! # toolsmith Dad Joke Extension
//!
//! A zero-argument tool returning a uniformly random joke from a fixed set,
//! and the agent definition that is allowed to call it.
//!
//! ## Tools
//!
//! - `get_dad_joke`: Get a random dad joke

pub mod agent;
pub mod jokes;
pub mod tool;

pub use agent::{dadjoke_agent, AGENT_NAME};
pub use jokes::JokeBook;
pub use tool::{DadJokeTool, TOOL_ID};
