//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `diff`: Show the differences between two versions of a message file
//! - `invalidate`: Remove cache entries made stale by a message file change
//! - `remove-keys`: Remove explicit source strings from language caches
//! - `purge-failures`: Remove cached translation failures so they are retried
//! - `clear`: Delete the cache file of one or more languages
//! - `get` / `set`: Read or write a single cache entry
//! - `languages`: List languages with a persisted cache
//! - `init`: Initialize trcache configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        self.common().is_some_and(|common| common.verbose)
    }

    pub fn common(&self) -> Option<&CommonArgs> {
        match &self.command {
            Some(Command::Diff(cmd)) => Some(&cmd.common),
            Some(Command::Invalidate(cmd)) => Some(&cmd.common),
            Some(Command::RemoveKeys(cmd)) => Some(&cmd.common),
            Some(Command::PurgeFailures(cmd)) => Some(&cmd.common),
            Some(Command::Clear(cmd)) => Some(&cmd.common),
            Some(Command::Get(cmd)) => Some(&cmd.common),
            Some(Command::Set(cmd)) => Some(&cmd.common),
            Some(Command::Languages(cmd)) => Some(&cmd.common),
            Some(Command::Init) | Some(Command::Serve) | None => None,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Cache directory (overrides config file)
    #[arg(long, env = "TRCACHE_DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct DiffCommand {
    /// Previous version of the message file
    pub old: PathBuf,
    /// New version of the message file
    pub new: PathBuf,

    /// Compare ARB metadata (`@` keys) too
    #[arg(long)]
    pub include_metadata: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct InvalidateCommand {
    /// Previous version of the message file
    pub old: PathBuf,
    /// New version of the message file
    pub new: PathBuf,

    /// Target language whose cache is invalidated
    #[arg(short, long)]
    pub target: String,

    /// Compare ARB metadata (`@` keys) too
    #[arg(long)]
    pub include_metadata: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct RemoveKeysCommand {
    /// Source strings to remove (their placeholder-normalized forms are removed too)
    #[arg(required = true)]
    pub keys: Vec<String>,

    /// Languages to process (default: every cached language)
    /// Can be specified multiple times: --lang es --lang fr
    #[arg(short, long = "lang")]
    pub languages: Vec<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct PurgeFailuresCommand {
    /// Languages to process (default: every cached language)
    #[arg(short, long = "lang")]
    pub languages: Vec<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ClearCommand {
    /// Languages whose cache file is deleted
    #[arg(required = true)]
    pub languages: Vec<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct GetCommand {
    /// Cache key to look up
    pub key: String,

    /// Language of the cache
    #[arg(short, long = "lang")]
    pub language: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct SetCommand {
    /// Cache key to write
    pub key: String,
    /// Translated text
    pub value: String,

    /// Language of the cache
    #[arg(short, long = "lang")]
    pub language: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct LanguagesCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show differences between two versions of a message file
    Diff(DiffCommand),
    /// Remove cache entries whose source text changed between two file versions
    Invalidate(InvalidateCommand),
    /// Remove source strings from one or more language caches
    RemoveKeys(RemoveKeysCommand),
    /// Remove entries cached with the configured failure text
    PurgeFailures(PurgeFailuresCommand),
    /// Delete the cache file of the given languages
    Clear(ClearCommand),
    /// Look up a cached translation
    Get(GetCommand),
    /// Store a translation in the cache
    Set(SetCommand),
    /// List languages that have a cache file
    Languages(LanguagesCommand),
    /// Initialize a new .trcacherc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
