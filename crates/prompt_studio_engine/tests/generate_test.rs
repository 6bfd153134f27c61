//! Tests for request routing and the module builders.

use prompt_studio_core::{GenerationRequest, ModelId, ModuleId, Settings};
use prompt_studio_engine::{UNKNOWN_MODULE_MESSAGE, generate, generate_legacy, line, resolve_model};
use strum::IntoEnumIterator;

fn bullet_lines(output: &str) -> impl Iterator<Item = &str> {
    output.lines().filter(|l| l.starts_with("- "))
}

#[test]
fn test_optimizer_frames_raw_prompt() {
    let request = GenerationRequest::new("optimizer").with_text("Write a blog post about AI");
    let output = generate(&request);

    assert!(output.contains(
        "--- RAW PROMPT ---\nWrite a blog post about AI\n--- END RAW PROMPT ---"
    ));
    assert!(output.contains("Persona") || output.contains("Objective"));
}

#[test]
fn test_optimizer_without_text_uses_placeholder() {
    let output = generate(&GenerationRequest::new("optimizer"));
    assert!(output.contains("No raw prompt provided."));
}

#[test]
fn test_developers_database_block() {
    let request = GenerationRequest::new("developers").with_setting("outputType", "Database");
    let output = generate(&request);

    assert!(output.contains("Entity-Relationship"));
    assert!(!output.contains("RESTful endpoint"));
}

#[test]
fn test_developers_unknown_output_type_falls_back_to_code() {
    let request = GenerationRequest::new("developers").with_setting("outputType", "Mobile App");
    let output = generate(&request);
    assert!(output.contains("Generate production-ready code with:"));
}

#[test]
fn test_marketers_hooks_reference_platform() {
    let request = GenerationRequest::new("marketers")
        .with_setting("outputType", "Hooks")
        .with_setting("platform", "TikTok");
    let output = generate(&request);

    assert!(output.contains("10 scroll-stopping hooks"));
    assert!(output.contains("optimized for TikTok"));
    assert!(output.contains("- Platform: TikTok"));
}

#[test]
fn test_marketers_context_used_once() {
    let with_persona = generate(
        &GenerationRequest::new("marketers")
            .with_setting("persona", "indie founders")
            .with_text("launching a budgeting app"),
    );
    assert!(with_persona.contains("- Target Audience: indie founders"));
    assert!(!with_persona.contains("Additional context"));

    let without_persona =
        generate(&GenerationRequest::new("marketers").with_text("launching a budgeting app"));
    assert!(without_persona.contains("- Target Audience: launching a budgeting app"));
    assert!(without_persona.ends_with("Additional context: launching a budgeting app"));
}

#[test]
fn test_researchers_default_outline_echoes_topic() {
    let request = GenerationRequest::new("researchers").with_text("quantum error correction");
    let output = generate(&request);

    assert!(output.contains("Generate a comprehensive research outline:"));
    assert!(output.contains("- Topic: quantum error correction"));
    assert!(output.contains("- Field: interdisciplinary"));
}

#[test]
fn test_analysts_report_and_data_description() {
    let request = GenerationRequest::new("analysts")
        .with_setting("analysisType", "Report")
        .with_text("Monthly revenue by region");
    let output = generate(&request);

    assert!(output.contains("Generate a professional business report:"));
    assert!(output.contains("Data Description:\nMonthly revenue by region"));
}

#[test]
fn test_writers_framework_seo_and_source_text() {
    let request = GenerationRequest::new("writers")
        .with_setting("action", "SEO Optimize")
        .with_setting("framework", "AIDA")
        .with_text("Our new espresso machine");
    let output = generate(&request);

    assert!(output.contains("Use the AIDA framework:"));
    assert!(output.contains("SEO Requirements:"));
    assert!(output.contains("Content to seo optimize:\n\"\"\"Our new espresso machine\"\"\""));
    assert!(output.ends_with("2. The final general content content"));
}

#[test]
fn test_writers_framework_none_adds_nothing() {
    let request = GenerationRequest::new("writers").with_setting("framework", "None");
    let output = generate(&request);
    assert!(!output.contains("framework:"));
    assert!(!output.contains("SEO Requirements"));
}

#[test]
fn test_video_format_hint_follows_video_type() {
    let reel = generate(&GenerationRequest::new("video").with_setting("videoType", "Instagram Reel"));
    assert!(reel.ends_with("Format: 9:16 / 15-60 seconds"));

    let youtube = generate(&GenerationRequest::new("video").with_setting("videoType", "YouTube Video"));
    assert!(youtube.ends_with("Format: 16:9 / 8-15 minutes"));

    let other = generate(&GenerationRequest::new("video"));
    assert!(other.ends_with("Format: 16:9 / variable length"));
}

#[test]
fn test_carousel_interpolates_platform() {
    let output = generate(&GenerationRequest::new("carousel").with_setting("platform", "LinkedIn"));
    assert!(output.contains("Optimized caption formatted for LinkedIn."));
    assert!(output.contains("character limits of LinkedIn image carousels"));
}

#[test]
fn test_presentation_uses_defaults() {
    let output = generate(&GenerationRequest::new("writers_presentation"));
    assert!(output.contains("- Presentation Type: versatile business presentation"));
    assert!(output.contains("- Number of Slides: Auto (AI decides optimal count)"));
    assert!(output.ends_with("conversational yet professional"));
}

#[test]
fn test_unknown_module_returns_fallback() {
    let request = GenerationRequest::new("nonexistent")
        .with_model("GPT")
        .with_text("anything");
    assert_eq!(generate(&request), UNKNOWN_MODULE_MESSAGE);
    assert_eq!(generate(&GenerationRequest::new("")), UNKNOWN_MODULE_MESSAGE);
}

#[test]
fn test_generation_is_deterministic() {
    for module in ModuleId::iter() {
        let request = GenerationRequest::new(module.as_str())
            .with_model("Claude")
            .with_setting("tone", "Witty")
            .with_text("a topic");
        assert_eq!(generate(&request), generate(&request), "{}", module);
    }
}

#[test]
fn test_no_empty_bullets_from_empty_requests() {
    assert_eq!(line("Topic", None, None), "");
    for module in ModuleId::iter() {
        let output = generate(&GenerationRequest::new(module.as_str()));
        for bullet in bullet_lines(&output) {
            assert!(!bullet.ends_with(": "), "{} rendered {:?}", module, bullet);
            assert!(!bullet.ends_with(':'), "{} rendered {:?}", module, bullet);
        }
        assert!(!output.contains("- Topic:"), "{}", module);
    }
}

#[test]
fn test_resolve_model_falls_back_on_blank() {
    assert_eq!(resolve_model(ModuleId::Designers, None), "GPT");
    assert_eq!(resolve_model(ModuleId::Designers, Some(&ModelId::new(""))), "GPT");
    assert_eq!(
        resolve_model(ModuleId::Designers, Some(&ModelId::new("Runway"))),
        "Runway"
    );
}

#[test]
fn test_legacy_call_picks_first_text_field() {
    let settings = Settings::new()
        .with("topic", "")
        .with("dataDescription", "Q3 churn by cohort")
        .with("analysisType", "Trend Detection");
    let output = generate_legacy("analysts", None, &settings);

    assert!(output.contains("Data Description:\nQ3 churn by cohort"));
    assert!(output.contains("Perform trend analysis:"));

    let developer = generate_legacy(
        "developers",
        Some("Claude"),
        &Settings::new().with("requirements", "Multi-tenant billing"),
    );
    assert!(developer.contains("Multi-tenant billing"));
}
