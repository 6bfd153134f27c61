//! Video production package.

use super::{PromptBuilder, field, field_line};
use crate::{join, line};
use prompt_studio_core::{PromptContext, Settings};

/// Frame and length hint inferred from the `videoType` value.
fn format_hint(video_type: &str) -> &'static str {
    let lowered = video_type.to_lowercase();
    if lowered.contains("reel") {
        "9:16 / 15-60 seconds"
    } else if lowered.contains("youtube") {
        "16:9 / 8-15 minutes"
    } else {
        "16:9 / variable length"
    }
}

/// Script, scenes, shots, voice-over, and sound notes.
#[derive(Debug, Clone, Copy, Default)]
pub struct VideoBuilder;

impl PromptBuilder for VideoBuilder {
    fn build(&self, _model: &str, settings: &Settings, context: &PromptContext) -> String {
        join(&[
            "You are an expert video producer and scriptwriter.",
            "",
            "Project Brief:",
            &field_line("Video Type", settings, "videoType"),
            &field_line("Script Style", settings, "scriptStyle"),
            &field_line("Visual Style", settings, "visualStyle"),
            &field_line("Mood", settings, "mood"),
            &line("Topic", context.text(), None),
            "",
            "Generate the complete production package:",
            "",
            "## 1. Full Script",
            "Write a complete script with dialogue/narration, timing markers, and emotional beats.",
            "",
            "## 2. Scene Breakdown",
            "For each scene provide:",
            "- Scene number and duration",
            "- Setting/location description",
            "- Characters/subjects on screen",
            "- Key action/movement",
            "- Transition type",
            "",
            "## 3. Shot List",
            "For each shot specify:",
            "- Shot type (wide, medium, close-up, etc.)",
            "- Camera movement (static, pan, tilt, dolly, etc.)",
            "- Duration",
            "- Notes on framing and composition",
            "",
            "## 4. Voice-Over Script",
            "- Clean narration text with timing cues",
            "- Tone and pacing notes",
            "- Emphasis markings on key phrases",
            "",
            "## 5. Music & Sound Design Notes",
            "- Recommended music genre/mood per section",
            "- Sound effect cues",
            "- Silence/pause moments",
            "",
            &format!("Format: {}", format_hint(&field(settings, "videoType"))),
        ])
    }
}
