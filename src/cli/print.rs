//! Print mode: unified listing or JSON on stdout.

use std::io::{self, Write};

use crossterm::style::{style, Stylize};
use serde::Serialize;

use crate::core::{DiffEntry, DiffResult, DiffStats, EntryKind};

/// Labels for the two compared documents.
#[derive(Debug, Clone, Copy)]
pub struct Labels<'a> {
    /// Label of the `before` document.
    pub before: &'a str,
    /// Label of the `after` document.
    pub after: &'a str,
}

/// Two-character marker preceding each line.
pub fn marker(kind: EntryKind) -> &'static str {
    match kind {
        EntryKind::Unchanged => "  ",
        EntryKind::Added => "+ ",
        EntryKind::Removed => "- ",
    }
}

/// Write the diff as a marked line listing with a header.
pub fn write_listing<W: Write>(
    out: &mut W,
    labels: Labels<'_>,
    result: &DiffResult,
    color: bool,
) -> io::Result<()> {
    let stats = result.stats();
    if color {
        writeln!(out, "{}", style(format!("--- {}", labels.before)).red().bold())?;
        writeln!(out, "{}", style(format!("+++ {}", labels.after)).green().bold())?;
    } else {
        writeln!(out, "--- {}", labels.before)?;
        writeln!(out, "+++ {}", labels.after)?;
    }
    writeln!(out, "{} ({} changed lines)", stats, result.change_count())?;

    for entry in result.entries() {
        let line = format!("{}{}", marker(entry.kind), entry.text);
        if !color {
            writeln!(out, "{}", line)?;
            continue;
        }
        match entry.kind {
            EntryKind::Added => writeln!(out, "{}", style(line).green())?,
            EntryKind::Removed => writeln!(out, "{}", style(line).red())?,
            EntryKind::Unchanged => writeln!(out, "{}", style(line).dim())?,
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    before: &'a str,
    after: &'a str,
    stats: DiffStats,
    entries: &'a [DiffEntry],
}

/// Write the diff as a JSON document.
pub fn write_json<W: Write>(out: &mut W, labels: Labels<'_>, result: &DiffResult) -> io::Result<()> {
    let report = JsonReport {
        before: labels.before,
        after: labels.after,
        stats: result.stats(),
        entries: result.entries(),
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)
}
