//! Export of saved prompts.

use crate::SavedPrompt;
use prompt_studio_error::ExportError;
use serde::{Deserialize, Serialize};

/// Document format for an exported prompt.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// The full record as pretty JSON
    Json,
    /// Title and metadata header followed by the prompt
    #[strum(to_string = "markdown", serialize = "md")]
    Markdown,
    /// The prompt text alone
    #[default]
    #[strum(to_string = "text", serialize = "txt")]
    Text,
}

impl ExportFormat {
    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Markdown => "md",
            ExportFormat::Text => "txt",
        }
    }

    /// Suggested file name, `prompt-<id>.<ext>`.
    pub fn file_name(self, prompt: &SavedPrompt) -> String {
        format!("prompt-{}.{}", prompt.id(), self.extension())
    }

    /// Render a saved prompt as a document in this format.
    ///
    /// # Errors
    ///
    /// Fails only if the record cannot be encoded as JSON.
    pub fn render(self, prompt: &SavedPrompt) -> Result<String, ExportError> {
        match self {
            ExportFormat::Json => serde_json::to_string_pretty(prompt)
                .map_err(|e| ExportError::new(format!("Failed to encode prompt: {}", e))),
            ExportFormat::Markdown => Ok(markdown(prompt)),
            ExportFormat::Text => Ok(prompt.content().clone()),
        }
    }
}

fn markdown(prompt: &SavedPrompt) -> String {
    let title = if prompt.title().is_empty() {
        "Generated Prompt"
    } else {
        prompt.title()
    };
    let model = if prompt.model().is_empty() {
        "N/A"
    } else {
        prompt.model()
    };
    format!(
        "# {}\n\n**Module:** {}\n**Model:** {}\n**Created:** {}\n\n---\n\n{}",
        title,
        prompt.module(),
        model,
        prompt.created_at().format("%Y-%m-%d"),
        prompt.content()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_format_aliases() {
        assert_eq!(ExportFormat::from_str("md").ok(), Some(ExportFormat::Markdown));
        assert_eq!(ExportFormat::from_str("txt").ok(), Some(ExportFormat::Text));
        assert_eq!(ExportFormat::from_str("json").ok(), Some(ExportFormat::Json));
        assert!(ExportFormat::from_str("pdf").is_err());
    }
}
