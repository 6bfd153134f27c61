//! Social media carousel brief.

use super::{PromptBuilder, field, field_line};
use crate::{join, line};
use prompt_studio_core::{PromptContext, Settings};

/// Structured carousel brief followed by the four deliverables.
#[derive(Debug, Clone, Copy, Default)]
pub struct CarouselBuilder;

impl PromptBuilder for CarouselBuilder {
    fn build(&self, _model: &str, settings: &Settings, context: &PromptContext) -> String {
        let platform = field(settings, "platform");
        join(&[
            "You are an expert Social Media Strategist and Carousel Designer.",
            "",
            "Project Brief:",
            &field_line("Platform", settings, "platform"),
            &field_line("Content Type", settings, "contentType"),
            &field_line("Slide Count", settings, "slideCount"),
            &line("Topic", context.text(), None),
            "",
            "Generate the following assets:",
            "",
            "1. Cover Slide (Hook): Headline text and visual concept.",
            "2. Content Slides: Concise, punchy text and visual layout idea per slide.",
            "3. CTA Slide: Final call to action slide.",
            &format!(
                "4. Caption & Hashtags: Optimized caption formatted for {}.",
                platform
            ),
            "",
            &format!(
                "Ensure the copy is highly engaging, fits within the character limits of {} image carousels, and drives retention/saves.",
                platform
            ),
        ])
    }
}
