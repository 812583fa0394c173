//! The email-writing agent.

use toolsmith_protocols::agent::AgentConfig;
use toolsmith_protocols::error::SchemaError;
use toolsmith_protocols::model::ModelRef;

use crate::content::EmailContent;

pub const AGENT_NAME: &str = "email_agent";

/// Session state key the validated email is stored under.
pub const OUTPUT_KEY: &str = "email";

const DEFAULT_MODEL: &str = "gemini-2.0-flash";

const INSTRUCTION: &str = r#"You are an Email Generation Assistant.
Your task is to generate a professional email based on the user's request.

GUIDELINES:
- Create an appropriate subject line (concise and relevant)
- Write a well-structured email body with:
    * Professional greeting
    * Clear and concise main content
    * Appropriate closing
    * Your name as signature
- Email tone should match the purpose (formal for business, friendly for colleagues)
- Keep emails concise but complete

IMPORTANT: Your response MUST be valid JSON matching this structure:
{
    "subject": "Subject line here",
    "body": "Email body here with proper paragraphs and formatting"
}

DO NOT include any explanations or additional text outside the JSON response."#;

/// Agent definition. `model` overrides the `gemini-2.0-flash` default.
pub fn email_agent(model: Option<ModelRef>) -> Result<AgentConfig, SchemaError> {
    let model = model.unwrap_or_else(|| ModelRef::named(DEFAULT_MODEL));
    Ok(AgentConfig::new(AGENT_NAME, model)
        .with_description("Generate professional emails with structured subject and body")
        .with_instruction(INSTRUCTION)
        .with_output_schema(EmailContent::output_schema()?)
        .with_output_key(OUTPUT_KEY))
}
