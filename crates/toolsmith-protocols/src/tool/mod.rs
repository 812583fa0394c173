//! Tool protocol definitions.
//!
//! Tools are functions an agent may invoke autonomously during a conversation.
//! The Agent Runtime decides when to call them by matching user intent against
//! the declared description.

mod traits;
mod definition;
mod context;
mod result;

pub use traits::*;
pub use definition::*;
pub use context::*;
pub use result::*;
