//! Wiring of tools and agents.

use std::sync::Arc;

use anyhow::Context;
use serde_json::Value;

use toolsmith_agent_email::email_agent;
use toolsmith_config::Config;
use toolsmith_core::{AgentRegistry, ToolRegistry};
use crate::cli::ToolFormat;
use toolsmith_tools_dadjoke::{dadjoke_agent, DadJokeTool, JokeBook, AGENT_NAME as DADJOKE_AGENT};

/// Registries for one process.
pub(crate) struct Registries {
    pub tools: Arc<ToolRegistry>,
    pub agents: AgentRegistry,
}

/// Register the dad joke tool and both agents, applying model overrides from config.
pub(crate) fn build(config: &Config, seed: Option<u64>) -> anyhow::Result<Registries> {
    let tools = Arc::new(ToolRegistry::new());
    let tool = match seed {
        Some(seed) => DadJokeTool::with_seed(JokeBook::classic(), seed),
        None => DadJokeTool::new(JokeBook::classic()),
    };
    tools.register(Arc::new(tool))?;

    let agents = AgentRegistry::new();
    agents.register(dadjoke_agent(config.model_for(DADJOKE_AGENT)), &tools)?;
    let email = email_agent(config.model_for(toolsmith_agent_email::AGENT_NAME))
        .context("failed to derive the email output schema")?;
    agents.register(email, &tools)?;

    Ok(Registries { tools, agents })
}

/// Function declarations for every registered tool, in the backend's format.
pub(crate) fn tool_declarations(tools: &ToolRegistry, format: ToolFormat) -> Vec<Value> {
    tools
        .list()
        .iter()
        .map(|definition| match format {
            ToolFormat::Openai => definition.to_openai_function(),
            ToolFormat::Gemini => definition.to_gemini_function(),
        })
        .collect()
}
