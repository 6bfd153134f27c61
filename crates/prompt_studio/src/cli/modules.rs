//! `modules` and `normalize` command handlers.

use prompt_studio_core::{ModuleId, Settings};
use prompt_studio_engine::{auto_model, default_table, normalize};
use std::io::Write;
use strum::IntoEnumIterator;

/// Handles the modules command.
pub fn handle_modules_command(out: &mut impl Write) -> anyhow::Result<()> {
    for module in ModuleId::iter() {
        writeln!(out, "{} (default model: {})", module, auto_model(module))?;
        for (key, default) in default_table(module) {
            writeln!(out, "  {} = {}", key, default.unwrap_or("(none)"))?;
        }
    }
    Ok(())
}

/// Handles the normalize command.
pub fn handle_normalize_command(
    module: &str,
    set: Vec<(String, String)>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let raw: Settings = set.into_iter().collect();
    let normalized = normalize(module, &raw);
    writeln!(out, "{}", serde_json::to_string_pretty(&normalized)?)?;
    Ok(())
}
