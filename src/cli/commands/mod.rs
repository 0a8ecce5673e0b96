pub mod clear;
mod command_result;
pub mod context;
pub mod diff;
pub mod entry;
pub mod init;
pub mod invalidate;
pub mod languages;
pub mod purge_failures;
pub mod remove_keys;

pub use command_result::*;
