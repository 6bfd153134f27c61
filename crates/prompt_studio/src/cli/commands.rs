//! CLI command definitions.

use clap::{Args, Parser, Subcommand};
use prompt_studio_library::ExportFormat;
use std::path::PathBuf;

/// Prompt Studio - structured prompts for AI models
#[derive(Parser, Debug)]
#[command(name = "prompt-studio", version)]
pub struct Cli {
    /// Configuration file (defaults to prompt_studio.toml in the user config dir)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a prompt for a module
    Generate(GenerateArgs),

    /// Show the settings a module would render with, as JSON
    Normalize {
        /// Module name
        #[arg(short, long)]
        module: String,

        /// Setting as key=value (repeatable)
        #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_key_value)]
        set: Vec<(String, String)>,
    },

    /// List modules with their default model and defaults
    Modules,

    /// Manage saved prompts
    Library {
        /// Library subcommand
        #[command(subcommand)]
        command: LibraryCommand,
    },

    /// Inspect or change the credit plan
    Credits {
        /// Credits subcommand
        #[command(subcommand)]
        command: CreditsCommand,
    },
}

/// Arguments for `generate`.
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Module name (required unless given by --request)
    #[arg(short, long)]
    pub module: Option<String>,

    /// Target model, e.g. Midjourney or Claude
    #[arg(long)]
    pub model: Option<String>,

    /// Setting as key=value (repeatable)
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub set: Vec<(String, String)>,

    /// Multi-select setting as key=a,b,c (repeatable)
    #[arg(long = "list", value_name = "KEY=A,B", value_parser = parse_key_list)]
    pub list: Vec<(String, Vec<String>)>,

    /// Context text (topic, raw prompt, requirements, ...)
    #[arg(short, long)]
    pub text: Option<String>,

    /// Reference image file (repeatable)
    #[arg(long = "image", value_name = "PATH")]
    pub images: Vec<PathBuf>,

    /// TOML request file; other flags override its values
    #[arg(short, long)]
    pub request: Option<PathBuf>,

    /// Save the result to the library
    #[arg(long)]
    pub save: bool,

    /// Title for the saved prompt (suggested from the settings if omitted)
    #[arg(long)]
    pub title: Option<String>,

    /// Tag for the saved prompt (repeatable)
    #[arg(long = "tag")]
    pub tags: Vec<String>,

    /// Output format: text, json, or markdown
    #[arg(short, long)]
    pub format: Option<ExportFormat>,
}

/// Library subcommands.
#[derive(Subcommand, Debug)]
pub enum LibraryCommand {
    /// List saved prompts, newest first
    List {
        /// Only prompts from this module
        #[arg(short, long)]
        module: Option<String>,

        /// Case-insensitive search in title, content, and tags
        #[arg(short, long)]
        query: Option<String>,
    },

    /// Print a saved prompt
    Show {
        /// Prompt id or unique prefix
        id: String,

        /// Output format: text, json, or markdown
        #[arg(short, long)]
        format: Option<ExportFormat>,
    },

    /// Delete a saved prompt
    Delete {
        /// Prompt id or unique prefix
        id: String,
    },
}

/// Credits subcommands.
#[derive(Subcommand, Debug)]
pub enum CreditsCommand {
    /// Show plan, balance, and next reset
    Status,

    /// Switch plan (free, pro, creator, business)
    Plan {
        /// Plan name
        name: String,
    },
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", s))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing key in '{}'", s));
    }
    Ok((key.to_string(), value.to_string()))
}

fn parse_key_list(s: &str) -> Result<(String, Vec<String>), String> {
    let (key, value) = parse_key_value(s)?;
    let items = value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect();
    Ok((key, items))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_value_keeps_equals_in_value() {
        assert_eq!(
            parse_key_value("style=a=b").unwrap(),
            ("style".to_string(), "a=b".to_string())
        );
        assert!(parse_key_value("no-separator").is_err());
        assert!(parse_key_value("=value").is_err());
    }

    #[test]
    fn test_parse_key_list_drops_empty_items() {
        assert_eq!(
            parse_key_list("outputs=Slide Text, Captions,,").unwrap(),
            (
                "outputs".to_string(),
                vec!["Slide Text".to_string(), "Captions".to_string()]
            )
        );
    }
}
