//! Single-entry access: `get` and `set`.

use anyhow::Result;

use super::super::args::{GetCommand, SetCommand};
use super::{
    CommandResult, CommandSummary, GetSummary, SetSummary,
    context::{CommandContext, validate_languages},
};
use crate::core::LanguageCacheStore;

pub fn get(cmd: GetCommand) -> Result<CommandResult> {
    validate_languages([&cmd.language])?;
    let ctx = CommandContext::new(&cmd.common)?;

    let (store, load_status) = LanguageCacheStore::open(ctx.cache_dir, &cmd.language);
    let value = store.get(&cmd.key);
    let not_found = value.is_none();

    Ok(CommandResult {
        summary: CommandSummary::Get(GetSummary {
            language: cmd.language,
            key: cmd.key,
            value,
            load_status,
        }),
        not_found,
    })
}

pub fn set(cmd: SetCommand) -> Result<CommandResult> {
    validate_languages([&cmd.language])?;
    let ctx = CommandContext::new(&cmd.common)?;

    let (store, _) = LanguageCacheStore::open(ctx.cache_dir, &cmd.language);
    let previous = store.get(&cmd.key);
    store.set(&cmd.key, &cmd.value);
    store.save()?;

    Ok(CommandResult::new(CommandSummary::Set(SetSummary {
        language: cmd.language,
        key: cmd.key,
        previous,
    })))
}
