//! Command-line interface for the `prompt-studio` binary.
//!
//! Handlers write their results to the given writer so the generated prompt
//! can go to stdout while logs go to stderr.

mod commands;
mod credits;
mod generate;
mod library;
mod modules;

pub use commands::{Cli, Commands, CreditsCommand, GenerateArgs, LibraryCommand};
pub use credits::handle_credits_command;
pub use generate::handle_generate_command;
pub use library::handle_library_command;
pub use modules::{handle_modules_command, handle_normalize_command};

use crate::StudioConfig;
use std::io::Write;

/// Load configuration and dispatch a parsed command line.
pub fn run(cli: Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let config = StudioConfig::load(cli.config.as_deref())?;
    match cli.command {
        Commands::Generate(args) => handle_generate_command(&config, args, out),
        Commands::Normalize { module, set } => handle_normalize_command(&module, set, out),
        Commands::Modules => handle_modules_command(out),
        Commands::Library { command } => handle_library_command(&config, command, out),
        Commands::Credits { command } => handle_credits_command(&config, command, out),
    }
}
