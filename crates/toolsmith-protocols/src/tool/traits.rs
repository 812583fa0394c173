//! Tool trait definition.

use async_trait::async_trait;

use super::{ToolContext, ToolDefinition, ToolResult};
use crate::error::ToolError;
use crate::types::RiskLevel;

/// Core trait for tools.
///
/// Tools are executable units the Agent Runtime invokes on an agent's behalf.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Returns the tool definition.
    fn definition(&self) -> &ToolDefinition;

    /// Execute the tool with the given parameters.
    async fn execute(
        &self,
        params: serde_json::Value,
        ctx: ToolContext,
    ) -> Result<ToolResult, ToolError>;

    /// Validate the parameters before execution.
    fn validate(&self, params: &serde_json::Value) -> Result<(), ToolError> {
        let definition = self.definition();
        if let Some(schema) = &definition.parameters_schema {
            if schema.get("type") == Some(&serde_json::json!("object")) && !params.is_object() {
                return Err(ToolError::ValidationFailed(
                    "Parameters must be an object".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Returns the risk level of this tool.
    fn risk_level(&self) -> RiskLevel {
        self.definition().risk_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoTool {
        definition: ToolDefinition,
    }

    impl EchoTool {
        fn new() -> Self {
            Self {
                definition: ToolDefinition::new("echo", "Echo", "Echo the parameters back"),
            }
        }

        fn with_schema(schema: serde_json::Value) -> Self {
            Self {
                definition: ToolDefinition::new("echo", "Echo", "Echo the parameters back")
                    .with_parameters_schema(schema),
            }
        }
    }

    #[async_trait]
    impl Tool for EchoTool {
        fn definition(&self) -> &ToolDefinition {
            &self.definition
        }

        async fn execute(
            &self,
            params: serde_json::Value,
            _ctx: ToolContext,
        ) -> Result<ToolResult, ToolError> {
            Ok(ToolResult::success(params.to_string()))
        }
    }

    #[test]
    fn test_tool_definition() {
        let tool = EchoTool::new();
        assert_eq!(tool.definition().id, "echo");
    }

    #[test]
    fn test_tool_risk_level_default() {
        let tool = EchoTool::new();
        assert_eq!(tool.risk_level(), RiskLevel::Low);
    }

    #[test]
    fn test_tool_validate_no_schema() {
        let tool = EchoTool::new();
        assert!(tool.validate(&serde_json::json!("anything")).is_ok());
    }

    #[test]
    fn test_tool_validate_object_schema_with_object() {
        let tool = EchoTool::with_schema(serde_json::json!({"type": "object"}));
        assert!(tool.validate(&serde_json::json!({})).is_ok());
    }

    #[test]
    fn test_tool_validate_object_schema_with_non_object() {
        let tool = EchoTool::with_schema(serde_json::json!({"type": "object"}));
        for params in [
            serde_json::json!("not an object"),
            serde_json::json!([1, 2, 3]),
            serde_json::json!(42),
            serde_json::Value::Null,
        ] {
            match tool.validate(&params) {
                Err(ToolError::ValidationFailed(msg)) => assert!(msg.contains("must be an object")),
                other => panic!("Expected ValidationFailed, got {:?}", other),
            }
        }
    }

    #[tokio::test]
    async fn test_tool_execute() {
        let tool = EchoTool::new();
        let result = tool
            .execute(serde_json::json!({"a": 1}), ToolContext::new("session-1"))
            .await
            .unwrap();
        assert!(result.content.contains("\"a\""));
    }
}
