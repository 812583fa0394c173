//! CLI definitions for toolsmith.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// toolsmith CLI.
#[derive(Parser)]
#[command(name = "toolsmith")]
#[command(about = "Tool-calling and structured-output agents")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Print the agent definitions as JSON
    Agents,

    /// Invoke the get_dad_joke tool
    Joke {
        /// Seed for a reproducible pick
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the registered tool declarations
    Tools {
        /// Declaration format
        #[arg(long, value_enum, default_value_t = ToolFormat::Openai)]
        format: ToolFormat,
    },

    /// Print the email output schema
    Schema {
        /// Output format
        #[arg(long, value_enum, default_value_t = SchemaFormat::Raw)]
        format: SchemaFormat,
    },

    /// Validate a candidate email response (JSON text, or `-` for stdin)
    Validate {
        input: String,
    },

    /// Check that every configured model has its credential
    Check,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum SchemaFormat {
    /// JSON Schema as derived
    Raw,
    /// OpenAI `response_format`
    Openai,
    /// Gemini `response_schema`
    Gemini,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum ToolFormat {
    /// OpenAI `tools` entries
    Openai,
    /// Gemini `function_declarations` entries
    Gemini,
}
