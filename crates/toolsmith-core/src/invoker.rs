//! Tool dispatch.

use std::sync::Arc;
use std::time::Instant;

use toolsmith_protocols::error::ToolError;
use toolsmith_protocols::tool::{ToolContext, ToolResult};

use crate::registry::ToolRegistry;

/// Looks up, validates and executes tool calls on behalf of an agent.
#[derive(Clone)]
pub struct ToolInvoker {
    tools: Arc<ToolRegistry>,
}

impl ToolInvoker {
    pub fn new(tools: Arc<ToolRegistry>) -> Self {
        Self { tools }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.tools
    }

    /// Invoke the tool registered under `tool_id`.
    pub async fn invoke(
        &self,
        tool_id: &str,
        params: serde_json::Value,
        ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let tool = self
            .tools
            .get(tool_id)
            .ok_or_else(|| ToolError::NotFound(tool_id.to_string()))?;

        tool.validate(&params)?;

        let correlation_id = ctx.correlation_id.clone();
        let started = Instant::now();
        let result = tool.execute(params, ctx).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match &result {
            Ok(output) => tracing::info!(
                tool = tool_id,
                correlation_id = %correlation_id,
                bytes = output.content.len(),
                elapsed_ms,
                "Tool call finished"
            ),
            Err(e) => tracing::warn!(
                tool = tool_id,
                correlation_id = %correlation_id,
                error = %e,
                elapsed_ms,
                "Tool call failed"
            ),
        }

        result
    }
}
