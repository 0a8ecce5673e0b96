//! Shared setup for commands: configuration, cache directory and
//! language code validation.

use std::env;

use anyhow::{Context, Result, bail};

use super::super::args::CommonArgs;
use crate::{
    config::{Config, load_config},
    core::{CacheDir, is_valid_language_code},
};

pub struct CommandContext {
    pub config: Config,
    pub cache_dir: CacheDir,
}

impl CommandContext {
    /// Load the config found from the working directory, applying CLI overrides.
    pub fn new(common: &CommonArgs) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to read current directory")?;
        let loaded = load_config(&cwd)?;

        let cache_dir = match &common.cache_dir {
            Some(dir) => CacheDir::new(cwd.join(dir)),
            None => loaded.cache_dir(),
        };

        Ok(Self {
            config: loaded.config,
            cache_dir,
        })
    }
}

/// Reject language codes that cannot be used as cache file names.
pub fn validate_languages<'a>(languages: impl IntoIterator<Item = &'a String>) -> Result<()> {
    for lang in languages {
        if !is_valid_language_code(lang) {
            bail!(
                "Invalid language code \"{}\": only letters, digits, '-' and '_' are allowed",
                lang
            );
        }
    }
    Ok(())
}
