//! `generate` command handler.

use super::GenerateArgs;
use crate::{StudioConfig, load_request};
use anyhow::Context;
use chrono::Utc;
use prompt_studio_core::{GenerationRequest, ImageRef};
use prompt_studio_credits::CreditLedger;
use prompt_studio_engine::generate;
use prompt_studio_library::{PromptDraft, PromptLibrary, suggest_title};
use std::io::Write;
use tracing::{info, instrument};

/// Build the request from flags and an optional request file.
///
/// Flags override values loaded from the file; settings are merged key by key.
pub fn build_request(args: &GenerateArgs) -> anyhow::Result<GenerationRequest> {
    let mut request = match (&args.request, &args.module) {
        (Some(path), _) => load_request(path)?,
        (None, Some(module)) => GenerationRequest::new(module.as_str()),
        (None, None) => anyhow::bail!("--module is required when no --request file is given"),
    };

    if let (Some(_), Some(module)) = (&args.request, &args.module) {
        let mut replaced = GenerationRequest::new(module.as_str())
            .with_settings(request.settings().clone())
            .with_context(request.context().clone());
        if let Some(model) = request.model() {
            replaced = replaced.with_model(model.clone());
        }
        request = replaced;
    }
    if let Some(model) = &args.model {
        request = request.with_model(model.as_str());
    }

    let mut settings = request.settings().clone();
    for (key, value) in &args.set {
        settings.insert(key.as_str(), value.as_str());
    }
    for (key, items) in &args.list {
        settings.insert(key.as_str(), items.clone());
    }
    request = request.with_settings(settings);

    let mut context = request.context().clone();
    if let Some(text) = &args.text {
        context = context.with_text(text.as_str());
    }
    if !args.images.is_empty() {
        let mut images = context.images().clone();
        for path in &args.images {
            let data = std::fs::read(path)
                .with_context(|| format!("Failed to read image {}", path.display()))?;
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            images.push(ImageRef::new(name, data));
        }
        context = context.with_images(images);
    }
    Ok(request.with_context(context))
}

/// Handles the generate command.
///
/// The library is loaded before any credits are charged.
#[instrument(skip_all)]
pub fn handle_generate_command(
    config: &StudioConfig,
    args: GenerateArgs,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let request = build_request(&args)?;
    info!(module = %request.module(), "Generating prompt");

    let now = Utc::now();
    let mut library = if args.save {
        Some(PromptLibrary::load(config.library_path())?)
    } else {
        None
    };

    if *config.metering() {
        let cost = config.policy().cost(&request);
        if cost > 0 {
            let mut ledger = CreditLedger::load_or_new(config.credits_path(), now)?;
            let remaining = ledger.use_credits(cost, now)?;
            ledger.save_to(config.credits_path())?;
            info!(cost, remaining, "Credits charged");
        }
    }

    let content = generate(&request);
    let title = args
        .title
        .clone()
        .unwrap_or_else(|| suggest_title(&request));
    let draft = PromptDraft::from_request(&request, content)
        .with_title(title)
        .with_tags(args.tags.clone());

    let format = args.format.unwrap_or(*config.default_format());
    let rendered = match library.as_mut() {
        Some(library) => {
            let saved = library.save(draft).clone();
            library.save_to(config.library_path())?;
            info!(id = %saved.id(), "Prompt saved");
            format.render(&saved)?
        }
        None => format.render(&draft.into_saved(now))?,
    };

    writeln!(out, "{}", rendered)?;
    Ok(())
}
