//! Line alignment between two documents.
//!
//! The default algorithm is a greedy, line-anchored alignment: both sides are
//! walked in lockstep and, on a mismatch, a small window ahead of each cursor
//! is searched to resynchronize. It is not a minimal diff. A Myers-based
//! minimal diff is available through [`Algorithm::Myers`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use similar::{ChangeTag, TextDiff};
use tracing::debug;

use crate::core::{DiffStats, TextBuffer};

/// Lines searched ahead of each cursor when resynchronizing.
pub const DEFAULT_LOOKAHEAD_WINDOW: usize = 5;

/// Classification of one line in a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Present in both documents.
    Unchanged,
    /// Present only in `after`.
    Added,
    /// Present only in `before`.
    Removed,
}

impl EntryKind {
    /// Whether this kind counts as a change for navigation.
    pub fn is_change(self) -> bool {
        !matches!(self, EntryKind::Unchanged)
    }

    /// Short label used in status lines.
    pub fn label(self) -> &'static str {
        match self {
            EntryKind::Unchanged => "unchanged",
            EntryKind::Added => "added",
            EntryKind::Removed => "removed",
        }
    }
}

/// A single classified line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffEntry {
    /// How the line differs between the two documents.
    pub kind: EntryKind,
    /// The line content (without trailing newline).
    pub text: String,
    /// Line number in `before` (0-indexed), if the line exists there.
    pub old_line: Option<usize>,
    /// Line number in `after` (0-indexed), if the line exists there.
    pub new_line: Option<usize>,
}

impl DiffEntry {
    fn unchanged(text: &str, old_line: usize, new_line: usize) -> Self {
        Self {
            kind: EntryKind::Unchanged,
            text: text.to_string(),
            old_line: Some(old_line),
            new_line: Some(new_line),
        }
    }

    fn added(text: &str, new_line: usize) -> Self {
        Self {
            kind: EntryKind::Added,
            text: text.to_string(),
            old_line: None,
            new_line: Some(new_line),
        }
    }

    fn removed(text: &str, old_line: usize) -> Self {
        Self {
            kind: EntryKind::Removed,
            text: text.to_string(),
            old_line: Some(old_line),
            new_line: None,
        }
    }
}

/// Which side wins when both lookahead searches could resynchronize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TieBreak {
    /// Search `after` first, so insertions win.
    #[default]
    #[serde(rename = "insertion")]
    PreferInsertion,
    /// Search `before` first, so deletions win.
    #[serde(rename = "deletion")]
    PreferDeletion,
}

impl FromStr for TieBreak {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "insertion" | "insert" => Ok(Self::PreferInsertion),
            "deletion" | "delete" => Ok(Self::PreferDeletion),
            other => Err(format!(
                "unknown tie-break '{}', expected 'insertion' or 'deletion'",
                other
            )),
        }
    }
}

/// Alignment algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Greedy lockstep walk with a bounded lookahead window.
    #[default]
    Lookahead,
    /// Minimal line diff (Myers).
    Myers,
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lookahead" => Ok(Self::Lookahead),
            "myers" => Ok(Self::Myers),
            other => Err(format!(
                "unknown algorithm '{}', expected 'lookahead' or 'myers'",
                other
            )),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Lookahead => f.write_str("lookahead"),
            Algorithm::Myers => f.write_str("myers"),
        }
    }
}

/// Tunables for [`DiffResult::compute_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffOptions {
    /// Lines searched ahead on each side (lookahead algorithm only).
    pub lookahead_window: usize,
    /// Search order on a mismatch (lookahead algorithm only).
    pub tie_break: TieBreak,
    /// Alignment algorithm.
    pub algorithm: Algorithm,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            lookahead_window: DEFAULT_LOOKAHEAD_WINDOW,
            tie_break: TieBreak::default(),
            algorithm: Algorithm::default(),
        }
    }
}

/// Ordered line classification of a comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffResult {
    entries: Vec<DiffEntry>,
}

impl DiffResult {
    /// Compute the diff between two text buffers with default options.
    pub fn compute(before: &TextBuffer, after: &TextBuffer) -> Self {
        Self::compute_with(before, after, &DiffOptions::default())
    }

    /// Compute the diff between two text buffers.
    pub fn compute_with(before: &TextBuffer, after: &TextBuffer, options: &DiffOptions) -> Self {
        let before_lines = before.lines();
        let after_lines = after.lines();
        let before_refs: Vec<&str> = before_lines.iter().map(|c| c.as_ref()).collect();
        let after_refs: Vec<&str> = after_lines.iter().map(|c| c.as_ref()).collect();
        Self::from_lines(&before_refs, &after_refs, options)
    }

    /// Compute the diff between two line sequences.
    pub fn from_lines<S: AsRef<str>>(before: &[S], after: &[S], options: &DiffOptions) -> Self {
        let _timer = crate::metrics::Timer::start("diff_compute");

        let before: Vec<&str> = before.iter().map(|s| s.as_ref()).collect();
        let after: Vec<&str> = after.iter().map(|s| s.as_ref()).collect();

        let entries = match options.algorithm {
            Algorithm::Lookahead => {
                lookahead_diff(&before, &after, options.lookahead_window, options.tie_break)
            }
            Algorithm::Myers => myers_diff(&before, &after),
        };

        let result = Self { entries };
        debug!(
            algorithm = %options.algorithm,
            before_lines = before.len(),
            after_lines = after.len(),
            entries = result.len(),
            changes = result.change_count(),
            "computed diff"
        );
        result
    }

    /// All entries in order.
    pub fn entries(&self) -> &[DiffEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when both documents were empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if there are any changes.
    pub fn has_changes(&self) -> bool {
        self.entries.iter().any(|e| e.kind.is_change())
    }

    /// Number of non-unchanged entries.
    pub fn change_count(&self) -> usize {
        self.entries.iter().filter(|e| e.kind.is_change()).count()
    }

    /// Lines of `before`, rebuilt from unchanged and removed entries.
    pub fn before_lines(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|e| e.kind != EntryKind::Added)
            .map(|e| e.text.as_str())
    }

    /// Lines of `after`, rebuilt from unchanged and added entries.
    pub fn after_lines(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|e| e.kind != EntryKind::Removed)
            .map(|e| e.text.as_str())
    }

    /// Approximate change statistics for display.
    pub fn stats(&self) -> DiffStats {
        DiffStats::from_entries(&self.entries)
    }
}

/// Diff two line sequences with default options.
pub fn diff<S: AsRef<str>>(before: &[S], after: &[S]) -> DiffResult {
    DiffResult::from_lines(before, after, &DiffOptions::default())
}

/// Diff two optional line sequences; `None` counts as an empty document.
pub fn diff_optional<S: AsRef<str>>(
    before: Option<&[S]>,
    after: Option<&[S]>,
    options: &DiffOptions,
) -> DiffResult {
    DiffResult::from_lines(before.unwrap_or(&[]), after.unwrap_or(&[]), options)
}

/// What to do at a mismatch.
enum Step {
    Insert(usize),
    Delete(usize),
    Replace,
}

fn lookahead_diff(
    before: &[&str],
    after: &[&str],
    window: usize,
    tie_break: TieBreak,
) -> Vec<DiffEntry> {
    let mut entries = Vec::with_capacity(before.len().max(after.len()));
    let mut i = 0;
    let mut j = 0;

    while i < before.len() || j < after.len() {
        if i >= before.len() {
            entries.extend(
                after[j..]
                    .iter()
                    .enumerate()
                    .map(|(k, line)| DiffEntry::added(line, j + k)),
            );
            j = after.len();
            continue;
        }
        if j >= after.len() {
            entries.extend(
                before[i..]
                    .iter()
                    .enumerate()
                    .map(|(k, line)| DiffEntry::removed(line, i + k)),
            );
            i = before.len();
            continue;
        }
        if before[i] == after[j] {
            entries.push(DiffEntry::unchanged(before[i], i, j));
            i += 1;
            j += 1;
            continue;
        }

        let insert = || find_ahead(after, j, before[i], window).map(Step::Insert);
        let delete = || find_ahead(before, i, after[j], window).map(Step::Delete);
        let step = match tie_break {
            TieBreak::PreferInsertion => insert().or_else(delete),
            TieBreak::PreferDeletion => delete().or_else(insert),
        }
        .unwrap_or(Step::Replace);

        match step {
            Step::Insert(k) => {
                entries.extend((j..j + k).map(|n| DiffEntry::added(after[n], n)));
                j += k;
            }
            Step::Delete(k) => {
                entries.extend((i..i + k).map(|n| DiffEntry::removed(before[n], n)));
                i += k;
            }
            Step::Replace => {
                entries.push(DiffEntry::removed(before[i], i));
                entries.push(DiffEntry::added(after[j], j));
                i += 1;
                j += 1;
            }
        }
    }

    entries
}

/// Offset `k` in `1..=window` such that `lines[from + k] == needle`.
///
/// The window is clamped to the lines left after `from`.
fn find_ahead(lines: &[&str], from: usize, needle: &str, window: usize) -> Option<usize> {
    let remaining = lines.len().saturating_sub(from + 1);
    (1..=window.min(remaining)).find(|&k| lines[from + k] == needle)
}

fn myers_diff(before: &[&str], after: &[&str]) -> Vec<DiffEntry> {
    let diff = TextDiff::configure()
        .algorithm(similar::Algorithm::Myers)
        .diff_slices(before, after);

    let mut entries = Vec::with_capacity(before.len().max(after.len()));
    for change in diff.iter_all_changes() {
        let old_line = change.old_index();
        let new_line = change.new_index();
        let text = change.value();
        let entry = match (change.tag(), old_line, new_line) {
            (ChangeTag::Equal, Some(o), Some(n)) => DiffEntry::unchanged(text, o, n),
            (ChangeTag::Delete, Some(o), _) => DiffEntry::removed(text, o),
            (ChangeTag::Insert, _, Some(n)) => DiffEntry::added(text, n),
            _ => continue,
        };
        entries.push(entry);
    }
    entries
}
