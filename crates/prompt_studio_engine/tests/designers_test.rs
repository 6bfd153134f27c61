//! Tests for the designers dialects.

use prompt_studio_core::{GenerationRequest, ImageRef, OutputMode, PromptContext};
use prompt_studio_engine::{ImageDialect, generate};

fn designers(model: &str) -> GenerationRequest {
    GenerationRequest::new("designers").with_model(model)
}

#[test]
fn test_midjourney_landscape_aspect() {
    let output = generate(&designers("Midjourney").with_setting("imageType", "Landscape"));

    assert!(output.contains("--ar 16:9 --style raw --v 6.1 --q 2"));
    assert!(!output.contains("Negative prompt:"));
}

#[test]
fn test_midjourney_aspect_is_case_insensitive_substring() {
    let portrait = generate(&designers("Midjourney").with_setting("imageType", "tall PORTRAIT shot"));
    assert!(portrait.contains("--ar 9:16"));

    let square = generate(&designers("Midjourney").with_setting("imageType", "Product Shot"));
    assert!(square.contains("--ar 1:1"));
}

#[test]
fn test_stable_diffusion_excludes_midjourney_params() {
    let output = generate(&designers("Stable Diffusion").with_setting("style", "Anime"));

    assert!(output.starts_with("Positive prompt:"));
    assert!(output.contains("Negative prompt:"));
    assert!(output.contains("professional photography, Anime style"));
    assert!(!output.contains("--ar"));
}

#[test]
fn test_native_block_only_in_image_mode() {
    let image = generate(
        &designers("DALL-E")
            .with_setting("outputMode", "image")
            .with_setting("imageType", "Landscape"),
    );
    assert!(image.starts_with("[DALL-E / GPT Image Generation]"));
    assert!(image.contains("- Aspect ratio: landscape (16:9)"));

    let prompt = generate(&designers("GPT"));
    assert!(prompt.contains("Generate a detailed creative brief for the following:"));
    assert!(prompt.ends_with("professional photo/art project."));
}

#[test]
fn test_brief_closing_follows_output_mode() {
    let output = generate(&designers("Claude").with_setting("outputMode", "image"));
    assert!(output.contains("Generate an image based on the following brief:"));
    assert!(output.ends_with("Generate a high-quality image that precisely matches this brief."));
}

#[test]
fn test_leonardo_preset_and_dimensions() {
    let output = generate(
        &designers("Leonardo")
            .with_setting("style", "Cinematic")
            .with_setting("imageType", "Portrait"),
    );
    assert!(output.contains("Preset: Cinematic"));
    assert!(output.contains("Dimensions: 768x1360"));

    let dynamic = generate(&designers("Leonardo").with_setting("imageType", "Landscape"));
    assert!(dynamic.contains("Preset: Dynamic"));
    assert!(dynamic.contains("Dimensions: 1360x768"));
}

#[test]
fn test_runway_scene_block() {
    let output = generate(&designers("Runway").with_setting("imageType", "Cityscape"));
    assert!(output.starts_with("[Runway Gen-3 Alpha Prompt]"));
    assert!(output.contains("Scene: Cityscape shot"));
    assert!(output.contains("Camera movement: Slow dolly forward with subtle parallax"));
}

#[test]
fn test_description_mentions_text_and_images() {
    let context = PromptContext::text_only("  neon reflections  ").with_images(vec![
        ImageRef::new("ref-1.png", Vec::new()),
        ImageRef::new("ref-2.png", Vec::new()),
    ]);
    let output = generate(&designers("Midjourney").with_context(context));

    assert!(output.contains("Creative direction: neon reflections."));
    assert!(output.contains("Reference 2 uploaded image(s)"));
}

#[test]
fn test_whitespace_text_is_ignored() {
    let output = generate(&designers("Midjourney").with_text("   "));
    assert!(!output.contains("Creative direction"));
}

#[test]
fn test_route_table() {
    assert_eq!(ImageDialect::route("GPT", OutputMode::Image), ImageDialect::Native);
    assert_eq!(ImageDialect::route("GPT", OutputMode::Prompt), ImageDialect::Brief);
    assert_eq!(
        ImageDialect::route("Stable Diffusion", OutputMode::Image),
        ImageDialect::StableDiffusion
    );
    assert_eq!(ImageDialect::route("Runway", OutputMode::Prompt), ImageDialect::Runway);
    assert_eq!(ImageDialect::route("Gemini", OutputMode::Image), ImageDialect::Brief);
    assert_eq!(ImageDialect::route("midjourney", OutputMode::Prompt), ImageDialect::Brief);
}
