//! The joke-telling agent.

use toolsmith_protocols::agent::AgentConfig;
use toolsmith_protocols::model::ModelRef;

use crate::tool::TOOL_ID;

pub const AGENT_NAME: &str = "litellm_agent";

const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_KEY_ENV: &str = "OPENAI_KEY";

const INSTRUCTION: &str = "\
You are a helpful assistant that can tell dad jokes.
Only use the tool 'get_dad_joke' to tell dad jokes.";

/// Agent definition. `model` overrides the proxied `gpt-4o-mini` default.
pub fn dadjoke_agent(model: Option<ModelRef>) -> AgentConfig {
    let model = model.unwrap_or_else(|| ModelRef::proxied(DEFAULT_MODEL, DEFAULT_KEY_ENV));
    AgentConfig::new(AGENT_NAME, model)
        .with_description("Dad Joke Agent")
        .with_instruction(INSTRUCTION)
        .with_tools(vec![TOOL_ID.to_string()])
}
