use anyhow::Result;

use super::super::args::DiffCommand;
use super::{CommandResult, CommandSummary, DiffSummary, context::CommandContext};
use crate::{core::find_differences, parsers::document::load_document};

pub fn diff(cmd: DiffCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let include_metadata = cmd.include_metadata || ctx.config.include_metadata;

    let old = load_document(&cmd.old, include_metadata)?;
    let new = load_document(&cmd.new, include_metadata)?;

    Ok(CommandResult::new(CommandSummary::Diff(DiffSummary {
        differences: find_differences(&old, &new),
    })))
}
