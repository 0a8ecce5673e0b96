use crate::core::{Difference, InvalidationReport, LoadStatus, RemoveKeysReport};

#[derive(Debug)]
pub enum CommandSummary {
    Diff(DiffSummary),
    Invalidate(InvalidateSummary),
    RemoveKeys(RemoveKeysReport),
    Clear(ClearSummary),
    Get(GetSummary),
    Set(SetSummary),
    Languages(LanguagesSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct DiffSummary {
    pub differences: Vec<Difference>,
}

#[derive(Debug)]
pub struct InvalidateSummary {
    pub differences: Vec<Difference>,
    pub load_status: LoadStatus,
    pub report: InvalidationReport,
}

#[derive(Debug)]
pub struct ClearSummary {
    /// Languages whose cache file was deleted.
    pub cleared: Vec<String>,
    /// Languages that had no cache file.
    pub missing: Vec<String>,
}

#[derive(Debug)]
pub struct GetSummary {
    pub language: String,
    pub key: String,
    pub value: Option<String>,
    pub load_status: LoadStatus,
}

#[derive(Debug)]
pub struct SetSummary {
    pub language: String,
    pub key: String,
    /// Value that was overwritten, if any.
    pub previous: Option<String>,
}

#[derive(Debug)]
pub struct LanguagesSummary {
    pub languages: Vec<LanguageInfo>,
}

#[derive(Debug)]
pub struct LanguageInfo {
    pub language: String,
    pub entry_count: usize,
    pub load_status: LoadStatus,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running a trcache command.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// True when the command looked something up and found nothing.
    pub not_found: bool,
}

impl CommandResult {
    pub fn new(summary: CommandSummary) -> Self {
        Self {
            summary,
            not_found: false,
        }
    }
}
