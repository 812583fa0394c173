//! toolsmith - tool-calling and structured-output agents
//!
//! Command line entry point: inspects the agent and tool definitions, invokes
//! the dad joke tool and validates email responses against their schema.

mod cli;
mod logging;
mod register;

use std::io::Read;

use anyhow::{bail, Context};
use clap::Parser;
use tracing::{info, warn};

use toolsmith_agent_email::{EmailContent, OUTPUT_KEY};
use toolsmith_config::{resolve_credential, ConfigLoader, ConfigValidator};
use toolsmith_core::{SessionState, ToolInvoker};
use toolsmith_protocols::tool::ToolContext;
use toolsmith_tools_dadjoke::TOOL_ID;

use cli::{Cli, Commands, SchemaFormat};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = ConfigLoader::load_or_default(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;
    logging::init_tracing(&config.logging)?;

    let validation = ConfigValidator::validate(&config);
    for warning in &validation.warnings {
        warn!(path = %warning.path, "{}", warning.message);
    }
    if !validation.is_valid() {
        for error in &validation.errors {
            tracing::error!(path = %error.path, "{}", error.message);
        }
        bail!("invalid configuration in {}", cli.config.display());
    }

    let seed = match &cli.command {
        Commands::Joke { seed } => *seed,
        _ => None,
    };
    let registries = register::build(&config, seed)?;

    match cli.command {
        Commands::Agents => {
            let agents = registries.agents.list();
            let configs: Vec<_> = agents.iter().map(|a| a.as_ref()).collect();
            println!("{}", serde_json::to_string_pretty(&configs)?);
        }
        Commands::Joke { .. } => {
            let invoker = ToolInvoker::new(registries.tools.clone());
            let ctx = ToolContext::new(uuid::Uuid::new_v4().to_string());
            let result = invoker.invoke(TOOL_ID, serde_json::json!({}), ctx).await?;
            println!("{}", result.content);
        }
        Commands::Tools { format } => {
            let declarations = register::tool_declarations(&registries.tools, format);
            println!("{}", serde_json::to_string_pretty(&declarations)?);
        }
        Commands::Schema { format } => {
            let schema = EmailContent::output_schema()?;
            let rendered = match format {
                SchemaFormat::Raw => schema.schema().clone(),
                SchemaFormat::Openai => schema.to_openai_response_format(),
                SchemaFormat::Gemini => schema.to_gemini_response_schema(),
            };
            println!("{}", serde_json::to_string_pretty(&rendered)?);
        }
        Commands::Validate { input } => {
            let text = read_input(&input)?;
            let agent = registries.agents.get(toolsmith_agent_email::AGENT_NAME)?;
            let session = SessionState::new(uuid::Uuid::new_v4().to_string());
            session.record_output(&agent, &text)?;
            let email: EmailContent = session
                .get(OUTPUT_KEY)
                .context("validated email missing from session state")?;
            info!(session = session.id(), key = OUTPUT_KEY, "Email accepted");
            println!("Subject: {}\n\n{}", email.subject(), email.body());
        }
        Commands::Check => {
            let mut missing = 0;
            for agent in registries.agents.list() {
                let model = agent.model.to_string();
                let Some(var) = agent.model.api_key_env() else {
                    println!("{:<16} {:<24} no credential required", agent.name, model);
                    continue;
                };
                match resolve_credential(var) {
                    Ok(credential) => println!("{:<16} {:<24} ok ({})", agent.name, model, credential),
                    Err(e) => {
                        missing += 1;
                        println!("{:<16} {:<24} {}", agent.name, model, e);
                    }
                }
            }
            if missing > 0 {
                bail!("{} agent(s) are missing credentials", missing);
            }
        }
    }

    Ok(())
}

fn read_input(input: &str) -> anyhow::Result<String> {
    if input != "-" {
        return Ok(input.to_string());
    }
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("failed to read stdin")?;
    Ok(text)
}
