//! `credits` command handlers.

use super::CreditsCommand;
use crate::StudioConfig;
use chrono::Utc;
use prompt_studio_credits::{CreditLedger, Plan};
use std::io::Write;
use tracing::instrument;

/// Handles the credits subcommands.
#[instrument(skip_all)]
pub fn handle_credits_command(
    config: &StudioConfig,
    command: CreditsCommand,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let now = Utc::now();
    let mut ledger = CreditLedger::load_or_new(config.credits_path(), now)?;

    match command {
        CreditsCommand::Status => {
            ledger.check_reset(now);
        }
        CreditsCommand::Plan { name } => {
            let plan = Plan::parse(&name)?;
            ledger.set_plan(plan, now);
        }
    }
    ledger.save_to(config.credits_path())?;

    writeln!(out, "Plan:    {}", ledger.plan())?;
    writeln!(
        out,
        "Balance: {} / {}",
        ledger.balance(),
        ledger.plan().allowance()
    )?;
    writeln!(out, "Resets:  {}", ledger.reset_at().format("%Y-%m-%d %H:%M UTC"))?;
    Ok(())
}
