//! # toolsmith Email Agent Extension
//!
//! An agent whose final response must be a JSON object with a `subject` and a
//! `body`. [`EmailContent`] is the single source of truth: the schema handed
//! to the backend is derived from it.

pub mod agent;
pub mod content;

pub use agent::{email_agent, AGENT_NAME, OUTPUT_KEY};
pub use content::EmailContent;
