//! Presentation package.

use super::{PromptBuilder, field, field_line};
use crate::{join, line};
use prompt_studio_core::{PromptContext, Settings};

/// Outline, slide content, speaker notes, and full script.
#[derive(Debug, Clone, Copy, Default)]
pub struct PresentationBuilder;

impl PromptBuilder for PresentationBuilder {
    fn build(&self, _model: &str, settings: &Settings, context: &PromptContext) -> String {
        join(&[
            "You are an expert presentation designer and business communication specialist.",
            "",
            "Create a complete presentation package:",
            "",
            &field_line("Presentation Type", settings, "presentationType"),
            &field_line("Number of Slides", settings, "slideCount"),
            &field_line("Tone", settings, "tone"),
            &line("Topic / Brief", context.text(), None),
            "",
            "Generate the following:",
            "",
            "## 1. Slide Outline",
            "List every slide with its title and purpose (e.g., \"Slide 1: Title Slide — Hook the audience\").",
            "",
            "## 2. Slide Content",
            "For each slide provide:",
            "- Headline",
            "- 3-5 bullet points of key content",
            "- Suggested visual/graphic description",
            "- Transition recommendation",
            "",
            "## 3. Speaker Notes",
            "For each slide, write detailed speaker notes including:",
            "- Talking points and timing (seconds)",
            "- Audience engagement cues",
            "- Potential Q&A prompts",
            "",
            "## 4. Full Presentation Script",
            "Write a continuous, polished script that could be read as a speech, covering all slides in order.",
            "",
            "Formatting:",
            "- Use clear section headers",
            "- Keep bullets concise (under 10 words each)",
            &format!(
                "- Speaker notes should feel conversational yet {}",
                field(settings, "tone")
            ),
        ])
    }
}
