//! End-to-end tests for the prompt-studio command line.

use clap::Parser;
use prompt_studio::UNKNOWN_MODULE_MESSAGE;
use prompt_studio::cli::{Cli, run};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

struct Workspace {
    dir: TempDir,
    config: PathBuf,
}

impl Workspace {
    fn new() -> Self {
        Self::with_extra("")
    }

    fn with_extra(extra: &str) -> Self {
        let dir = TempDir::new().expect("temp dir");
        let config = dir.path().join("prompt_studio.toml");
        let toml = format!(
            "library_path = '{}'\ncredits_path = '{}'\ndefault_format = 'text'\nmetering = true\n{}",
            dir.path().join("library.json").display(),
            dir.path().join("credits.json").display(),
            extra
        );
        std::fs::write(&config, toml).expect("write config");
        Self { dir, config }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn run(&self, args: &[&str]) -> anyhow::Result<String> {
        let config = self.config.display().to_string();
        let mut argv = vec!["prompt-studio", "--config", config.as_str()];
        argv.extend_from_slice(args);
        let cli = Cli::try_parse_from(argv)?;
        let mut out = Vec::new();
        run(cli, &mut out)?;
        Ok(String::from_utf8(out)?)
    }
}

fn write(path: &Path, contents: &str) {
    std::fs::write(path, contents).expect("write file");
}

#[test]
fn test_generate_prints_prompt() {
    let ws = Workspace::new();
    let output = ws
        .run(&[
            "generate",
            "--module",
            "designers",
            "--model",
            "Midjourney",
            "--set",
            "imageType=Landscape",
        ])
        .expect("generate");
    assert!(output.contains("--ar 16:9"));
}

#[test]
fn test_generate_unknown_module_soft_fails() {
    let ws = Workspace::new();
    let output = ws.run(&["generate", "-m", "poetry"]).expect("generate");
    assert_eq!(output.trim_end(), UNKNOWN_MODULE_MESSAGE);
}

#[test]
fn test_generate_requires_module_or_request() {
    let ws = Workspace::new();
    assert!(ws.run(&["generate", "--text", "hello"]).is_err());
}

#[test]
fn test_saved_prompt_can_be_listed_and_shown() {
    let ws = Workspace::new();
    ws.run(&[
        "generate",
        "-m",
        "designers",
        "--model",
        "Midjourney",
        "--set",
        "imageType=Landscape",
        "--save",
        "--tag",
        "coast",
    ])
    .expect("generate and save");

    let listing = ws.run(&["library", "list", "--query", "COAST"]).expect("list");
    assert!(listing.contains("Landscape — Auto — Midjourney"));
    let prefix = listing.split_whitespace().next().expect("id column").to_string();

    let shown = ws
        .run(&["library", "show", &prefix, "--format", "markdown"])
        .expect("show");
    assert!(shown.starts_with("# Landscape — Auto — Midjourney\n"));
    assert!(shown.contains("**Model:** Midjourney"));

    ws.run(&["library", "delete", &prefix]).expect("delete");
    let empty = ws.run(&["library", "list"]).expect("list");
    assert_eq!(empty.trim_end(), "No saved prompts");
}

#[test]
fn test_metered_generation_charges_credits() {
    let ws = Workspace::new();
    ws.run(&["generate", "-m", "carousel", "-t", "Morning routines"])
        .expect("generate");
    ws.run(&["generate", "-m", "writers"]).expect("free module");

    let status = ws.run(&["credits", "status"]).expect("status");
    assert!(status.contains("Plan:    free"));
    assert!(status.contains("Balance: 195 / 200"));
}

#[test]
fn test_unreadable_library_leaves_credits_untouched() {
    let ws = Workspace::new();
    write(&ws.path("library.json"), "{not json");

    let err = ws
        .run(&["generate", "-m", "carousel", "-t", "Morning routines", "--save"])
        .expect_err("corrupt library");
    assert!(err.to_string().contains("Corrupt library file"));

    let status = ws.run(&["credits", "status"]).expect("status");
    assert!(status.contains("Balance: 200 / 200"));
}

#[test]
fn test_viewing_saved_prompt_as_text_is_free() {
    let ws = Workspace::new();
    ws.run(&["generate", "-m", "researchers", "-t", "Soil microbiomes", "--save"])
        .expect("generate and save");
    let listing = ws.run(&["library", "list"]).expect("list");
    let prefix = listing.split_whitespace().next().expect("id column").to_string();

    for _ in 0..2 {
        let shown = ws
            .run(&["library", "show", &prefix, "--format", "text"])
            .expect("show");
        assert!(shown.contains("Soil microbiomes"));
    }
    let status = ws.run(&["credits", "status"]).expect("status");
    assert!(status.contains("Balance: 200 / 200"));

    ws.run(&["library", "show", &prefix, "--format", "markdown"])
        .expect("export");
    let status = ws.run(&["credits", "status"]).expect("status");
    assert!(status.contains("Balance: 195 / 200"));
}

#[test]
fn test_insufficient_credits_block_generation() {
    let ws = Workspace::with_extra("\n[policy]\nvideo = 500\n");
    let err = ws
        .run(&["generate", "-m", "video"])
        .expect_err("too expensive");
    assert!(err.to_string().contains("Insufficient credits"));
}

#[test]
fn test_unmetered_config_skips_ledger() {
    let ws = Workspace::with_extra("");
    let toml = std::fs::read_to_string(&ws.config)
        .expect("read config")
        .replace("metering = true", "metering = false");
    write(&ws.config, &toml);

    ws.run(&["generate", "-m", "video"]).expect("generate");
    assert!(!ws.path("credits.json").exists());
}

#[test]
fn test_plan_change() {
    let ws = Workspace::new();
    let status = ws.run(&["credits", "plan", "pro"]).expect("plan");
    assert!(status.contains("Plan:    pro"));
    assert!(status.contains("Balance: 1500 / 1500"));
    assert!(ws.run(&["credits", "plan", "platinum"]).is_err());
}

#[test]
fn test_request_file_with_flag_overrides() {
    let ws = Workspace::new();
    let request = ws.path("request.toml");
    write(
        &request,
        r#"
module = "designers"
model = "Stable Diffusion"

[settings]
imageType = "Portrait"
mood = "Calm"

[context]
text = "an orchard in spring"
"#,
    );

    let output = ws
        .run(&[
            "generate",
            "--request",
            request.to_str().expect("utf-8 path"),
            "--set",
            "mood=Moody",
        ])
        .expect("generate");
    assert!(output.starts_with("Positive prompt:"));
    assert!(output.contains("with a Moody atmosphere"));
    assert!(output.contains("Creative direction: an orchard in spring."));
}

#[test]
fn test_generate_json_format() {
    let ws = Workspace::new();
    let output = ws
        .run(&[
            "generate",
            "-m",
            "marketers",
            "--list",
            "platform=TikTok,Instagram",
            "--format",
            "json",
        ])
        .expect("generate");
    let value: serde_json::Value = serde_json::from_str(&output).expect("json output");
    assert_eq!(value["module"], "marketers");
    assert_eq!(value["model"], "Auto");
    assert_eq!(value["title"], "Auto — TikTok,Instagram — Campaign");
    assert!(
        value["content"]
            .as_str()
            .expect("content")
            .contains("- Platform: TikTok,Instagram")
    );
}

#[test]
fn test_normalize_and_modules() {
    let ws = Workspace::new();
    let output = ws
        .run(&["normalize", "-m", "writers", "--set", "tone=Witty"])
        .expect("normalize");
    let value: serde_json::Value = serde_json::from_str(&output).expect("json output");
    assert_eq!(value["action"], "Improve and enhance");
    assert_eq!(value["tone"], "Witty");
    assert!(value["framework"].is_null());

    let modules = ws.run(&["modules"]).expect("modules");
    assert!(modules.contains("writers_presentation (default model: GPT)"));
    assert!(modules.contains("  framework = (none)"));
}
