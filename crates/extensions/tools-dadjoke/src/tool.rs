//! `get_dad_joke` tool implementation.

use async_trait::async_trait;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;

use toolsmith_protocols::error::ToolError;
use toolsmith_protocols::tool::{empty_object_schema, Tool, ToolContext, ToolDefinition, ToolResult};
use toolsmith_protocols::types::RiskLevel;

use crate::jokes::JokeBook;

/// Function name the model calls.
pub const TOOL_ID: &str = "get_dad_joke";

enum JokeRng {
    Thread,
    Seeded(Mutex<StdRng>),
}

/// Returns one joke from its [`JokeBook`], uniformly at random.
pub struct DadJokeTool {
    definition: ToolDefinition,
    book: JokeBook,
    rng: JokeRng,
}

impl DadJokeTool {
    pub fn new(book: JokeBook) -> Self {
        Self {
            definition: ToolDefinition::new(TOOL_ID, "Dad Joke", "Get a random dad joke.")
                .with_parameters_schema(empty_object_schema())
                .with_risk_level(RiskLevel::Low),
            book,
            rng: JokeRng::Thread,
        }
    }

    /// Same tool with a reproducible sequence of picks.
    pub fn with_seed(book: JokeBook, seed: u64) -> Self {
        Self {
            rng: JokeRng::Seeded(Mutex::new(StdRng::seed_from_u64(seed))),
            ..Self::new(book)
        }
    }

    pub fn book(&self) -> &JokeBook {
        &self.book
    }

    fn next_index(&self) -> usize {
        match &self.rng {
            JokeRng::Thread => self.book.pick_index(&mut rand::rng()),
            JokeRng::Seeded(rng) => self.book.pick_index(&mut *rng.lock()),
        }
    }
}

impl Default for DadJokeTool {
    fn default() -> Self {
        Self::new(JokeBook::classic())
    }
}

#[async_trait]
impl Tool for DadJokeTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        _params: serde_json::Value,
        ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let index = self.next_index();
        let joke = self.book.get(index).ok_or_else(|| {
            ToolError::ExecutionFailed(format!("joke index {} out of range", index))
        })?;
        tracing::debug!(session = %ctx.session_id, index, "Picked dad joke");
        Ok(ToolResult::success(joke).with_metadata("index", serde_json::json!(index)))
    }
}

#[cfg(test)]
#[path = "tool_tests.rs"]
mod tests;
