//! Raw prompt optimizer.

use super::PromptBuilder;
use crate::join;
use prompt_studio_core::{PromptContext, Settings};

/// Wraps a raw prompt in a rewrite instruction. Settings are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptimizerBuilder;

impl PromptBuilder for OptimizerBuilder {
    fn build(&self, _model: &str, _settings: &Settings, context: &PromptContext) -> String {
        join(&[
            "You are a Prompt Engineering Expert.",
            "Your task is to take the following raw prompt, and enhance it using best practices.",
            "Structure the final output with a clear Persona/Role, Objective, Context, Formatting constraints, and Tone.",
            "",
            "--- RAW PROMPT ---",
            context.text().unwrap_or("No raw prompt provided."),
            "--- END RAW PROMPT ---",
            "",
            "Provide only the optimized, ready-to-use prompt.",
        ])
    }
}
