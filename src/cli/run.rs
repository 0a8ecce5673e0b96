//! Dispatches parsed arguments to the matching command handler.

use super::{
    args::{Arguments, Command},
    commands::{
        CommandResult, clear::clear, diff::diff, entry, init::init, invalidate::invalidate,
        languages::languages, purge_failures::purge_failures, remove_keys::remove_keys,
    },
};
use anyhow::Result;

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Diff(cmd)) => diff(cmd),
        Some(Command::Invalidate(cmd)) => invalidate(cmd),
        Some(Command::RemoveKeys(cmd)) => remove_keys(cmd),
        Some(Command::PurgeFailures(cmd)) => purge_failures(cmd),
        Some(Command::Clear(cmd)) => clear(cmd),
        Some(Command::Get(cmd)) => entry::get(cmd),
        Some(Command::Set(cmd)) => entry::set(cmd),
        Some(Command::Languages(cmd)) => languages(cmd),
        Some(Command::Init) => init(),
        Some(Command::Serve) => {
            // Serve command is handled in main.rs before calling run()
            anyhow::bail!("Serve command should be handled before run()")
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
