//! `library` command handlers.

use super::LibraryCommand;
use crate::StudioConfig;
use chrono::Utc;
use prompt_studio_credits::CreditLedger;
use prompt_studio_library::{ExportFormat, ModuleFilter, PromptLibrary};
use std::io::Write;
use std::str::FromStr;
use tracing::{info, instrument};

/// Characters of the id shown in listings; enough for `show` and `delete`.
const SHORT_ID: usize = 8;

/// Handles the library subcommands.
#[instrument(skip_all)]
pub fn handle_library_command(
    config: &StudioConfig,
    command: LibraryCommand,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let mut library = PromptLibrary::load(config.library_path())?;

    match command {
        LibraryCommand::List { module, query } => {
            let filter = match module.as_deref() {
                Some(module) => ModuleFilter::from_str(module)?,
                None => ModuleFilter::All,
            };
            let prompts = library.filter(&filter, query.as_deref().unwrap_or_default());
            if prompts.is_empty() {
                writeln!(out, "No saved prompts")?;
            }
            for prompt in prompts {
                let id = prompt.id().to_string();
                writeln!(
                    out,
                    "{}  {}  {:<20}  {}",
                    &id[..SHORT_ID],
                    prompt.created_at().format("%Y-%m-%d"),
                    prompt.module(),
                    prompt.title()
                )?;
            }
        }
        LibraryCommand::Show { id, format } => {
            let prompt = library.find(&id)?;
            let format = format.unwrap_or(*config.default_format());
            // Viewing as text is free; file formats are exports.
            let exporting = matches!(format, ExportFormat::Json | ExportFormat::Markdown);
            if *config.metering() && exporting {
                let cost = config.policy().export_cost(prompt.module());
                if cost > 0 {
                    let now = Utc::now();
                    let mut ledger = CreditLedger::load_or_new(config.credits_path(), now)?;
                    ledger.use_credits(cost, now)?;
                    ledger.save_to(config.credits_path())?;
                    info!(cost, %format, "Export credits charged");
                }
            }
            writeln!(out, "{}", format.render(prompt)?)?;
        }
        LibraryCommand::Delete { id } => {
            let id = *library.find(&id)?.id();
            let removed = library.delete(&id)?;
            library.save_to(config.library_path())?;
            info!(%id, "Prompt deleted");
            writeln!(out, "Deleted {}", removed.title())?;
        }
    }
    Ok(())
}
