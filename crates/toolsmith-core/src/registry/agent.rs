//! Agent registry.

use std::sync::Arc;

use toolsmith_protocols::agent::AgentConfig;
use toolsmith_protocols::error::AgentError;

use super::base::{BaseRegistry, Registerable};
use super::tool::ToolRegistry;

impl Registerable for AgentConfig {
    fn registry_id(&self) -> &str {
        &self.name
    }
}

/// Registry of validated agent configurations, keyed by agent name.
pub struct AgentRegistry {
    inner: BaseRegistry<AgentConfig>,
}

impl AgentRegistry {
    pub fn new() -> Self {
        Self {
            inner: BaseRegistry::new(),
        }
    }

    /// Validate and register an agent.
    ///
    /// Every tool the agent names must already be present in `tools`.
    pub fn register(&self, config: AgentConfig, tools: &ToolRegistry) -> Result<(), AgentError> {
        config.validate()?;

        if let Some(missing) = config.tools.iter().find(|id| !tools.contains(id)) {
            return Err(AgentError::invalid_config(
                &config.name,
                format!("tool '{}' is not registered", missing),
            ));
        }

        let name = config.name.clone();
        self.inner
            .register(Arc::new(config))
            .map_err(|e| AgentError::invalid_config(&name, e.to_string()))?;
        tracing::info!(agent = %name, "Registered agent");
        Ok(())
    }

    /// Get an agent by name.
    pub fn get(&self, name: &str) -> Result<Arc<AgentConfig>, AgentError> {
        self.inner
            .get(name)
            .ok_or_else(|| AgentError::NotFound(name.to_string()))
    }

    /// All registered agents, sorted by name.
    pub fn list(&self) -> Vec<Arc<AgentConfig>> {
        let mut agents: Vec<Arc<AgentConfig>> = self.inner.iter().collect();
        agents.sort_by(|a, b| a.name.cmp(&b.name));
        agents
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl Default for AgentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use toolsmith_protocols::error::ToolError;
    use toolsmith_protocols::tool::{Tool, ToolContext, ToolDefinition, ToolResult};

    struct NamedTool(ToolDefinition);

    #[async_trait]
    impl Tool for NamedTool {
        fn definition(&self) -> &ToolDefinition {
            &self.0
        }

        async fn execute(
            &self,
            _params: serde_json::Value,
            _ctx: ToolContext,
        ) -> Result<ToolResult, ToolError> {
            Ok(ToolResult::success("ok"))
        }
    }

    fn tools_with(id: &str) -> ToolRegistry {
        let tools = ToolRegistry::new();
        tools
            .register(Arc::new(NamedTool(ToolDefinition::new(id, id, "test tool"))))
            .unwrap();
        tools
    }

    #[test]
    fn test_register_and_get() {
        let agents = AgentRegistry::new();
        let config = AgentConfig::new("joker", "gpt-4o-mini").with_tools(vec!["joke".to_string()]);
        agents.register(config, &tools_with("joke")).unwrap();
        assert_eq!(agents.len(), 1);
        assert_eq!(agents.get("joker").unwrap().tools, vec!["joke"]);
    }

    #[test]
    fn test_register_unknown_tool() {
        let agents = AgentRegistry::new();
        let config = AgentConfig::new("joker", "gpt-4o-mini").with_tools(vec!["joke".to_string()]);
        let err = agents.register(config, &ToolRegistry::new()).unwrap_err();
        assert!(err.to_string().contains("'joke' is not registered"));
        assert!(agents.is_empty());
    }

    #[test]
    fn test_register_invalid_config() {
        let agents = AgentRegistry::new();
        let err = agents
            .register(AgentConfig::new("not valid", "gpt-4o-mini"), &ToolRegistry::new())
            .unwrap_err();
        assert!(matches!(err, AgentError::InvalidConfig { .. }));
    }

    #[test]
    fn test_register_duplicate_name() {
        let agents = AgentRegistry::new();
        let tools = ToolRegistry::new();
        agents.register(AgentConfig::new("a", "m"), &tools).unwrap();
        let err = agents.register(AgentConfig::new("a", "m"), &tools).unwrap_err();
        assert!(err.to_string().contains("Already registered"));
    }

    #[test]
    fn test_get_missing() {
        let agents = AgentRegistry::new();
        assert!(matches!(agents.get("nobody"), Err(AgentError::NotFound(_))));
    }

    #[test]
    fn test_list_sorted() {
        let agents = AgentRegistry::new();
        let tools = ToolRegistry::new();
        agents.register(AgentConfig::new("b_agent", "m"), &tools).unwrap();
        agents.register(AgentConfig::new("a_agent", "m"), &tools).unwrap();
        let names: Vec<String> = agents.list().iter().map(|a| a.name.clone()).collect();
        assert_eq!(names, vec!["a_agent", "b_agent"]);
    }
}
