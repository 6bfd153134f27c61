//! Image prompts, one dialect per image-generation back-end.

use super::{PromptBuilder, field, field_line};
use crate::{join, line};
use prompt_studio_core::{OutputMode, PromptContext, Settings};
use tracing::debug;

/// Output syntax chosen for a designers request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
pub enum ImageDialect {
    /// Direct image generation instruction for GPT / DALL-E in image mode
    Native,
    /// Midjourney prompt with `--ar` parameters
    Midjourney,
    /// Positive / negative prompt pair
    StableDiffusion,
    /// Leonardo preset block
    Leonardo,
    /// Runway scene and camera block
    Runway,
    /// Descriptive creative brief for any other model
    Brief,
}

impl ImageDialect {
    /// Pick the dialect for a model and output mode.
    ///
    /// GPT and DALL-E only get the native block when asked to generate an
    /// image; in prompt mode they receive the descriptive brief like any
    /// other chat model.
    ///
    /// # Examples
    ///
    /// ```
    /// use prompt_studio_core::OutputMode;
    /// use prompt_studio_engine::ImageDialect;
    ///
    /// assert_eq!(ImageDialect::route("DALL-E", OutputMode::Image), ImageDialect::Native);
    /// assert_eq!(ImageDialect::route("GPT", OutputMode::Prompt), ImageDialect::Brief);
    /// assert_eq!(ImageDialect::route("Midjourney", OutputMode::Prompt), ImageDialect::Midjourney);
    /// ```
    pub fn route(model: &str, mode: OutputMode) -> Self {
        match (model, mode) {
            ("GPT" | "DALL-E", OutputMode::Image) => ImageDialect::Native,
            ("Midjourney", _) => ImageDialect::Midjourney,
            ("Stable Diffusion", _) => ImageDialect::StableDiffusion,
            ("Leonardo", _) => ImageDialect::Leonardo,
            ("Runway", _) => ImageDialect::Runway,
            _ => ImageDialect::Brief,
        }
    }
}

/// Aspect inferred from the free-form `imageType` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Aspect {
    Landscape,
    Portrait,
    Square,
}

impl Aspect {
    fn infer(image_type: &str) -> Self {
        let lowered = image_type.to_lowercase();
        if lowered.contains("landscape") {
            Aspect::Landscape
        } else if lowered.contains("portrait") {
            Aspect::Portrait
        } else {
            Aspect::Square
        }
    }

    fn ratio(self) -> &'static str {
        match self {
            Aspect::Landscape => "16:9",
            Aspect::Portrait => "9:16",
            Aspect::Square => "1:1",
        }
    }

    fn described(self) -> &'static str {
        match self {
            Aspect::Landscape => "landscape (16:9)",
            Aspect::Portrait => "portrait (9:16)",
            Aspect::Square => "square (1:1)",
        }
    }
}

const SD_QUALITY: &str =
    "masterpiece, best quality, ultra-detailed, 8k resolution, professional photography";

const SD_NEGATIVE: &str = "lowres, bad anatomy, bad hands, text, error, missing fingers, cropped, worst quality, low quality, jpeg artifacts, blurry";

const BRIEF_DELIVERABLES: &str = "Please provide:
1. A detailed description of the scene composition
2. Color palette (hex codes) that matches the mood
3. Lighting setup and direction
4. Camera angle and lens recommendation
5. Post-processing suggestions
6. Reference art style keywords

Make the output production-ready for a professional photo/art project.";

/// Settings and context resolved once and shared by every dialect.
struct Scene<'a> {
    settings: &'a Settings,
    image_type: String,
    mood: String,
    time: String,
    style: String,
    mode: OutputMode,
    /// Raw context text, present only when it has non-whitespace content
    text: Option<&'a str>,
    images: usize,
}

impl<'a> Scene<'a> {
    fn new(settings: &'a Settings, context: &'a PromptContext) -> Self {
        Self {
            settings,
            image_type: field(settings, "imageType").into_owned(),
            mood: field(settings, "mood").into_owned(),
            time: field(settings, "time").into_owned(),
            style: field(settings, "style").into_owned(),
            mode: OutputMode::from_setting(settings.text("outputMode")),
            text: context.trimmed_text().and(context.text()),
            images: context.images().len(),
        }
    }

    fn description(&self) -> String {
        let mut desc = format!(
            "Create a {} image with a {} atmosphere during {}. Style: {}.",
            self.image_type, self.mood, self.time, self.style
        );
        if let Some(text) = self.text {
            desc.push_str(&format!(" Creative direction: {}.", text.trim()));
        }
        if self.images > 0 {
            desc.push_str(&format!(
                " Reference {} uploaded image(s) for composition, color, and mood guidance.",
                self.images
            ));
        }
        desc.push_str(" The result should be visually striking with professional-grade quality.");
        desc
    }

    fn trailer(&self, heading: &str) -> String {
        self.text
            .map(|text| format!("\n{}{}", heading, text))
            .unwrap_or_default()
    }
}

/// Image prompt builder. Dispatches on the target model.
#[derive(Debug, Clone, Copy, Default)]
pub struct DesignersBuilder;

impl PromptBuilder for DesignersBuilder {
    fn build(&self, model: &str, settings: &Settings, context: &PromptContext) -> String {
        let scene = Scene::new(settings, context);
        let dialect = ImageDialect::route(model, scene.mode);
        debug!(model, %dialect, mode = %scene.mode, "Routing designers dialect");
        match dialect {
            ImageDialect::Native => native(&scene),
            ImageDialect::Midjourney => midjourney(&scene),
            ImageDialect::StableDiffusion => stable_diffusion(&scene),
            ImageDialect::Leonardo => leonardo(&scene),
            ImageDialect::Runway => runway(&scene),
            ImageDialect::Brief => brief(&scene),
        }
    }
}

fn native(scene: &Scene<'_>) -> String {
    join(&[
        "[DALL-E / GPT Image Generation]",
        "",
        &scene.description(),
        "",
        "Requirements:",
        "- Generate a high-fidelity image matching the above description",
        &format!(
            "- Aspect ratio: {}",
            Aspect::infer(&scene.image_type).described()
        ),
        "- Quality: HD",
        &format!("- Style: {}", scene.style),
        &scene.trailer("Additional creative notes:\n"),
    ])
}

fn midjourney(scene: &Scene<'_>) -> String {
    join(&[
        &scene.description(),
        "",
        &format!(
            "--ar {} --style raw --v 6.1 --q 2",
            Aspect::infer(&scene.image_type).ratio()
        ),
        "",
        "Additional details:",
        &field_line("Lighting", scene.settings, "time"),
        &field_line("Mood", scene.settings, "mood"),
        "- Focus on composition, depth of field, and color harmony",
        "- Ultra-high resolution, 8K quality",
        &scene.trailer("Creative direction: "),
    ])
}

fn stable_diffusion(scene: &Scene<'_>) -> String {
    join(&[
        "Positive prompt:",
        &format!(
            "{}, {}, {} style",
            scene.description(),
            SD_QUALITY,
            scene.style
        ),
        "",
        "Negative prompt:",
        SD_NEGATIVE,
        "",
        "Recommended settings:",
        "- Steps: 30-50",
        "- CFG Scale: 7-9",
        "- Sampler: DPM++ 2M Karras",
        "- Size: 1024x1024",
        &scene.trailer("Creative direction: "),
    ])
}

fn leonardo(scene: &Scene<'_>) -> String {
    let preset = if scene.style.to_lowercase().contains("cinematic") {
        "Cinematic"
    } else {
        "Dynamic"
    };
    let dimensions = match Aspect::infer(&scene.image_type) {
        Aspect::Landscape => "1360x768",
        Aspect::Portrait | Aspect::Square => "768x1360",
    };
    join(&[
        "[Leonardo AI Prompt]",
        "",
        &scene.description(),
        "",
        "Model: Leonardo Diffusion XL",
        &format!("Preset: {}", preset),
        "Guidance Scale: 7",
        &format!("Dimensions: {}", dimensions),
        "",
        &format!(
            "Style modifiers: {}, {}, professional grade, trending on artstation",
            scene.mood, scene.style
        ),
        &scene.trailer("Creative direction: "),
    ])
}

fn runway(scene: &Scene<'_>) -> String {
    join(&[
        "[Runway Gen-3 Alpha Prompt]",
        "",
        &format!("Scene: {} shot", scene.image_type),
        &field_line("Mood", scene.settings, "mood"),
        &field_line("Time of Day", scene.settings, "time"),
        &field_line("Visual Style", scene.settings, "style"),
        "",
        "Description:",
        &scene.description(),
        "",
        "Camera movement: Slow dolly forward with subtle parallax",
        "Duration: 4 seconds",
        "Aspect Ratio: 16:9",
        &scene.trailer("Creative direction: "),
    ])
}

fn brief(scene: &Scene<'_>) -> String {
    let generating = scene.mode == OutputMode::Image;
    let opener = if generating {
        "You are an expert visual designer and art director. Generate an image based on the following brief:"
    } else {
        "You are an expert visual designer and art director. Generate a detailed creative brief for the following:"
    };
    let references = if scene.images > 0 {
        format!(
            "- Reference Images: {} image(s) provided — incorporate their visual language",
            scene.images
        )
    } else {
        String::new()
    };
    join(&[
        opener,
        "",
        &field_line("Image Type", scene.settings, "imageType"),
        &field_line("Mood", scene.settings, "mood"),
        &field_line("Time of Day", scene.settings, "time"),
        &field_line("Visual Style", scene.settings, "style"),
        &line("Creative Direction", scene.text, None),
        &references,
        "",
        if generating {
            "Generate a high-quality image that precisely matches this brief."
        } else {
            BRIEF_DELIVERABLES
        },
    ])
}
