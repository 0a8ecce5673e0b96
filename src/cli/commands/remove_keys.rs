use anyhow::Result;

use super::super::args::RemoveKeysCommand;
use super::{
    CommandResult, CommandSummary,
    context::{CommandContext, validate_languages},
};
use crate::core::remove_keys as remove_cache_keys;

pub fn remove_keys(cmd: RemoveKeysCommand) -> Result<CommandResult> {
    validate_languages(&cmd.languages)?;
    let ctx = CommandContext::new(&cmd.common)?;

    let languages = (!cmd.languages.is_empty()).then_some(cmd.languages.as_slice());
    let report = remove_cache_keys(&ctx.cache_dir, &cmd.keys, languages)?;

    Ok(CommandResult::new(CommandSummary::RemoveKeys(report)))
}
