use anyhow::Result;

use super::super::args::ClearCommand;
use super::{
    ClearSummary, CommandResult, CommandSummary,
    context::{CommandContext, validate_languages},
};

pub fn clear(cmd: ClearCommand) -> Result<CommandResult> {
    validate_languages(&cmd.languages)?;
    let ctx = CommandContext::new(&cmd.common)?;

    let mut cleared = Vec::new();
    let mut missing = Vec::new();
    for lang in cmd.languages {
        if ctx.cache_dir.clear(&lang)? {
            cleared.push(lang);
        } else {
            missing.push(lang);
        }
    }

    Ok(CommandResult::new(CommandSummary::Clear(ClearSummary {
        cleared,
        missing,
    })))
}
