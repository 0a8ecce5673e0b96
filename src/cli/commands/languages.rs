use anyhow::Result;

use super::super::args::LanguagesCommand;
use super::{CommandResult, CommandSummary, LanguageInfo, LanguagesSummary, context::CommandContext};
use crate::core::LanguageCacheStore;

pub fn languages(cmd: LanguagesCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;

    let languages = ctx
        .cache_dir
        .languages()?
        .into_iter()
        .map(|language| {
            let (store, load_status) = LanguageCacheStore::open(ctx.cache_dir.clone(), &language);
            LanguageInfo {
                entry_count: store.len(),
                language,
                load_status,
            }
        })
        .collect();

    Ok(CommandResult::new(CommandSummary::Languages(
        LanguagesSummary { languages },
    )))
}
