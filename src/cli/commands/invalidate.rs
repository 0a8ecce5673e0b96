use anyhow::Result;

use super::super::args::InvalidateCommand;
use super::{
    CommandResult, CommandSummary, InvalidateSummary,
    context::{CommandContext, validate_languages},
};
use crate::{
    core::{LanguageCacheStore, find_differences, remove_differences_from_cache},
    parsers::document::load_document,
};

pub fn invalidate(cmd: InvalidateCommand) -> Result<CommandResult> {
    validate_languages([&cmd.target])?;
    let ctx = CommandContext::new(&cmd.common)?;
    let include_metadata = cmd.include_metadata || ctx.config.include_metadata;

    // Parse both documents before touching the cache.
    let old = load_document(&cmd.old, include_metadata)?;
    let new = load_document(&cmd.new, include_metadata)?;
    let differences = find_differences(&old, &new);

    let (store, load_status) = LanguageCacheStore::open(ctx.cache_dir, &cmd.target);
    let report = remove_differences_from_cache(&store, &differences, &cmd.target)?;

    Ok(CommandResult::new(CommandSummary::Invalidate(
        InvalidateSummary {
            differences,
            load_status,
            report,
        },
    )))
}
