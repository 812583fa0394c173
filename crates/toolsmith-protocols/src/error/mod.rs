//! Error types for the toolsmith protocol layer.

mod tool;
mod schema;
mod agent;
mod registry;

pub use tool::*;
pub use schema::*;
pub use agent::*;
pub use registry::*;
