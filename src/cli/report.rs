//! Report formatting and printing utilities.
//!
//! Separate from the command handlers so trcache can be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use serde_json::Value;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    ClearSummary, CommandResult, CommandSummary, DiffSummary, GetSummary, InitSummary,
    InvalidateSummary, LanguagesSummary, SetSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::core::{Difference, LoadStatus, RemoveKeysReport};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Longest old value shown before it is cut with an ellipsis.
const MAX_VALUE_DISPLAY: usize = 60;

const ROOT_PATH_LABEL: &str = "(root)";

pub fn print(result: &CommandResult, verbose: bool) {
    print_to(result, verbose, &mut io::stdout().lock());
    print_warnings_to(result, &mut io::stderr().lock());
}

/// Print a command result to a custom writer.
pub fn print_to<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) {
    match &result.summary {
        CommandSummary::Diff(summary) => print_diff(summary, writer),
        CommandSummary::Invalidate(summary) => print_invalidate(summary, verbose, writer),
        CommandSummary::RemoveKeys(report) => print_remove_keys(report, verbose, writer),
        CommandSummary::Clear(summary) => print_clear(summary, writer),
        CommandSummary::Get(summary) => print_get(summary, writer),
        CommandSummary::Set(summary) => print_set(summary, writer),
        CommandSummary::Languages(summary) => print_languages(summary, writer),
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
}

/// Warn about cache files that could not be read and were treated as empty.
pub fn print_warnings_to<W: Write>(result: &CommandResult, writer: &mut W) {
    let corrupt: Vec<&str> = match &result.summary {
        CommandSummary::Invalidate(summary) if summary.load_status == LoadStatus::Corrupt => {
            vec![summary.report.language.as_str()]
        }
        CommandSummary::Get(summary) if summary.load_status == LoadStatus::Corrupt => {
            vec![summary.language.as_str()]
        }
        CommandSummary::Languages(summary) => summary
            .languages
            .iter()
            .filter(|info| info.load_status == LoadStatus::Corrupt)
            .map(|info| info.language.as_str())
            .collect(),
        _ => Vec::new(),
    };

    for language in corrupt {
        let _ = writeln!(
            writer,
            "{} cache file for {} could not be read and was treated as empty",
            "warning:".bold().yellow(),
            language.cyan()
        );
    }
}

fn print_diff<W: Write>(summary: &DiffSummary, writer: &mut W) {
    if summary.differences.is_empty() {
        let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), "No differences".green());
        return;
    }

    print_differences(&summary.differences, writer);
    let _ = writeln!(
        writer,
        "\n{} difference(s)",
        summary.differences.len().to_string().bold()
    );
}

fn print_differences<W: Write>(differences: &[Difference], writer: &mut W) {
    let width = differences
        .iter()
        .map(|d| UnicodeWidthStr::width(display_path(&d.path)))
        .max()
        .unwrap_or(0);

    for difference in differences {
        let path = display_path(&difference.path);
        let padding = width - UnicodeWidthStr::width(path);
        match &difference.old_value {
            Some(value) => {
                let _ = writeln!(
                    writer,
                    "{} {}{:padding$}  {}",
                    "-".red(),
                    path,
                    "",
                    display_value(value).dimmed(),
                    padding = padding
                );
            }
            None => {
                let _ = writeln!(
                    writer,
                    "{} {}{:padding$}  {}",
                    "+".green(),
                    path,
                    "",
                    "(added)".dimmed(),
                    padding = padding
                );
            }
        }
    }
}

fn print_invalidate<W: Write>(summary: &InvalidateSummary, verbose: bool, writer: &mut W) {
    let report = &summary.report;
    if verbose && !summary.differences.is_empty() {
        print_differences(&summary.differences, writer);
        let _ = writeln!(writer);
    }

    let _ = writeln!(
        writer,
        "{} {} cache key(s) for {} ({} difference(s), {} key(s) checked)",
        "Removed".green().bold(),
        report.removed_count,
        report.language.cyan(),
        summary.differences.len(),
        report.keys.len()
    );

    if verbose {
        for key in &report.keys {
            let _ = writeln!(writer, "  - {}", quoted(key));
        }
    }
}

fn print_remove_keys<W: Write>(report: &RemoveKeysReport, verbose: bool, writer: &mut W) {
    if report.languages.is_empty() {
        let _ = writeln!(writer, "No cached languages found.");
        return;
    }

    for (language, language_report) in &report.languages {
        let _ = writeln!(
            writer,
            "{}: removed {} of {} key(s)",
            language.cyan(),
            language_report.removed_count,
            language_report.keys.len()
        );
        if verbose {
            for key in &language_report.keys {
                let _ = writeln!(writer, "  - {}", quoted(key));
            }
        }
    }

    let _ = writeln!(
        writer,
        "{} {} cache key(s) across {} language(s)",
        "Removed".green().bold(),
        report.removed_count(),
        report.languages.len()
    );
}

fn print_clear<W: Write>(summary: &ClearSummary, writer: &mut W) {
    for language in &summary.cleared {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Cleared cache for {}", language).green()
        );
    }
    for language in &summary.missing {
        let _ = writeln!(writer, "No cache file for {}", language.cyan());
    }
}

fn print_get<W: Write>(summary: &GetSummary, writer: &mut W) {
    match &summary.value {
        Some(value) => {
            let _ = writeln!(writer, "{}", value);
        }
        None => {
            let _ = writeln!(
                writer,
                "No cached translation for {} ({})",
                quoted(&summary.key),
                summary.language.cyan()
            );
        }
    }
}

fn print_set<W: Write>(summary: &SetSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Stored {} for {}", quoted(&summary.key), summary.language).green()
    );
    if let Some(previous) = &summary.previous {
        let _ = writeln!(writer, "  replaced {}", quoted(previous).dimmed());
    }
}

fn print_languages<W: Write>(summary: &LanguagesSummary, writer: &mut W) {
    if summary.languages.is_empty() {
        let _ = writeln!(writer, "No cached languages found.");
        return;
    }

    let width = summary
        .languages
        .iter()
        .map(|info| UnicodeWidthStr::width(info.language.as_str()))
        .max()
        .unwrap_or(0);

    for info in &summary.languages {
        let status = match info.load_status {
            LoadStatus::Corrupt => format!("  {}", "(unreadable)".yellow()),
            LoadStatus::Loaded | LoadStatus::Missing => String::new(),
        };
        let _ = writeln!(
            writer,
            "{:<width$}  {} entr{}{}",
            info.language,
            info.entry_count,
            if info.entry_count == 1 { "y" } else { "ies" },
            status,
            width = width
        );
    }
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

fn display_path(path: &str) -> &str {
    if path.is_empty() { ROOT_PATH_LABEL } else { path }
}

fn display_value(value: &Value) -> String {
    let rendered = value.to_string();
    if rendered.chars().count() <= MAX_VALUE_DISPLAY {
        return rendered;
    }
    let truncated: String = rendered.chars().take(MAX_VALUE_DISPLAY).collect();
    format!("{}\u{2026}", truncated)
}

fn quoted(text: &str) -> String {
    format!("\"{}\"", text)
}
