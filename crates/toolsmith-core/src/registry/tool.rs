//! Tool registry.

use std::sync::Arc;

use toolsmith_protocols::error::RegistryError;
use toolsmith_protocols::tool::{Tool, ToolDefinition};

use super::base::{BaseRegistry, Registerable};

impl Registerable for dyn Tool {
    fn registry_id(&self) -> &str {
        &self.definition().id
    }
}

/// Registry for managing tools.
pub struct ToolRegistry {
    inner: BaseRegistry<dyn Tool>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            inner: BaseRegistry::new(),
        }
    }

    /// Register a tool.
    pub fn register(&self, tool: Arc<dyn Tool>) -> Result<(), RegistryError> {
        let id = tool.definition().id.clone();
        self.inner.register(tool)?;
        tracing::debug!(tool = %id, "Registered tool");
        Ok(())
    }

    pub fn unregister(&self, id: &str) -> Result<(), RegistryError> {
        self.inner.unregister(id)
    }

    /// Get a tool by ID.
    pub fn get(&self, id: &str) -> Option<Arc<dyn Tool>> {
        self.inner.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.inner.contains(id)
    }

    /// List all tool definitions, sorted by ID.
    pub fn list(&self) -> Vec<ToolDefinition> {
        let mut defs: Vec<ToolDefinition> =
            self.inner.iter().map(|t| t.definition().clone()).collect();
        defs.sort_by(|a, b| a.id.cmp(&b.id));
        defs
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use toolsmith_protocols::error::ToolError;
    use toolsmith_protocols::tool::{ToolContext, ToolResult};

    struct MockTool {
        definition: ToolDefinition,
    }

    impl MockTool {
        fn new(id: &str) -> Self {
            Self {
                definition: ToolDefinition::new(id, "Mock", "A mock tool"),
            }
        }
    }

    #[async_trait]
    impl Tool for MockTool {
        fn definition(&self) -> &ToolDefinition {
            &self.definition
        }

        async fn execute(
            &self,
            _params: serde_json::Value,
            _ctx: ToolContext,
        ) -> Result<ToolResult, ToolError> {
            Ok(ToolResult::success("executed"))
        }
    }

    #[test]
    fn test_registry_creation() {
        let registry = ToolRegistry::default();
        assert!(registry.list().is_empty());
    }

    #[test]
    fn test_register_and_get() {
        let registry = ToolRegistry::new();
        registry.register(Arc::new(MockTool::new("test-tool"))).unwrap();
        assert!(registry.contains("test-tool"));
        assert_eq!(registry.get("test-tool").unwrap().definition().id, "test-tool");
    }

    #[test]
    fn test_register_duplicate() {
        let registry = ToolRegistry::new();
        registry.register(Arc::new(MockTool::new("test-tool"))).unwrap();
        assert!(registry.register(Arc::new(MockTool::new("test-tool"))).is_err());
    }

    #[test]
    fn test_unregister_tool() {
        let registry = ToolRegistry::new();
        registry.register(Arc::new(MockTool::new("test-tool"))).unwrap();
        registry.unregister("test-tool").unwrap();
        assert!(registry.list().is_empty());
    }

    #[test]
    fn test_list_sorted() {
        let registry = ToolRegistry::new();
        registry.register(Arc::new(MockTool::new("zeta"))).unwrap();
        registry.register(Arc::new(MockTool::new("alpha"))).unwrap();
        let ids: Vec<String> = registry.list().into_iter().map(|d| d.id).collect();
        assert_eq!(ids, vec!["alpha", "zeta"]);
    }
}
