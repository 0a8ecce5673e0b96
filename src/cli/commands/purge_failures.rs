use anyhow::Result;

use super::super::args::PurgeFailuresCommand;
use super::{
    CommandResult, CommandSummary,
    context::{CommandContext, validate_languages},
};
use crate::core::remove_failed_entries;

pub fn purge_failures(cmd: PurgeFailuresCommand) -> Result<CommandResult> {
    validate_languages(&cmd.languages)?;
    let ctx = CommandContext::new(&cmd.common)?;

    let languages = (!cmd.languages.is_empty()).then_some(cmd.languages.as_slice());
    let report = remove_failed_entries(&ctx.cache_dir, &ctx.config.failure_text, languages)?;

    Ok(CommandResult::new(CommandSummary::RemoveKeys(report)))
}
