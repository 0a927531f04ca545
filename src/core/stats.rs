//! Change statistics for the summary line.

use std::fmt;

use serde::Serialize;

use crate::core::{DiffEntry, EntryKind};

/// Approximate counts of added, removed and modified lines.
///
/// A removed line directly followed by an added line is counted once as
/// `modified`. Any further removed lines in the same run count as `removed`,
/// and every added line still counts as `added`. Runs of unequal length are
/// therefore only roughly classified; the numbers are meant for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiffStats {
    /// Added lines.
    pub added: usize,
    /// Removed lines not paired with an addition.
    pub removed: usize,
    /// Removed+added pairs.
    pub modified: usize,
    /// Unchanged lines.
    pub unchanged: usize,
}

impl DiffStats {
    /// Bucket a sequence of entries.
    pub fn from_entries(entries: &[DiffEntry]) -> Self {
        let mut stats = Self::default();
        let mut pending_removed = 0usize;

        for entry in entries {
            match entry.kind {
                EntryKind::Added => {
                    if pending_removed > 0 {
                        stats.modified += 1;
                        stats.removed += pending_removed - 1;
                        pending_removed = 0;
                    }
                    stats.added += 1;
                }
                EntryKind::Removed => pending_removed += 1,
                EntryKind::Unchanged => {
                    stats.removed += pending_removed;
                    pending_removed = 0;
                    stats.unchanged += 1;
                }
            }
        }
        stats.removed += pending_removed;
        stats
    }

    /// True when nothing was added, removed or modified.
    pub fn is_clean(&self) -> bool {
        self.added == 0 && self.removed == 0 && self.modified == 0
    }
}

impl fmt::Display for DiffStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{} -{} ~{}", self.added, self.removed, self.modified)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::diff;

    #[test]
    fn clean_diff() {
        let stats = diff(&["a", "b"], &["a", "b"]).stats();
        assert!(stats.is_clean());
        assert_eq!(stats.unchanged, 2);
    }

    #[test]
    fn modification_counts_once() {
        let stats = diff(&["a", "x"], &["a", "y"]).stats();
        assert_eq!(
            stats,
            DiffStats {
                added: 1,
                removed: 0,
                modified: 1,
                unchanged: 1
            }
        );
        assert_eq!(stats.to_string(), "+1 -0 ~1");
    }

    #[test]
    fn trailing_removals_are_removed() {
        let stats = diff(&["a", "b", "c"], &["a"]).stats();
        assert_eq!(stats.removed, 2);
        assert_eq!(stats.modified, 0);
    }

    #[test]
    fn uneven_run_is_approximate() {
        // Removed(a), Added(c), Removed(b): the pair is one modification and
        // the stray removal is counted on its own.
        let stats = diff(&["k", "a", "b"], &["k", "c"]).stats();
        assert_eq!(stats.modified, 1);
        assert_eq!(stats.removed, 1);
        assert_eq!(stats.added, 1);
    }
}
