//! Wrapping cursor over the changed lines of a diff.

use crate::core::{DiffResult, EntryKind};

/// One changed line in the change list.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ChangeRef {
    /// Row of the entry in the diff.
    row: usize,
    kind: EntryKind,
    text: String,
}

/// The change the cursor points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentChange {
    /// Zero-based index in the change list.
    pub index: usize,
    /// Row of the entry in the diff.
    pub row: usize,
    /// Kind of the entry (never `Unchanged`).
    pub kind: EntryKind,
    /// Line content.
    pub text: String,
    /// Number of changes in the list.
    pub total: usize,
}

impl CurrentChange {
    /// One-based position for display.
    pub fn position(&self) -> usize {
        self.index + 1
    }
}

/// Outcome of a navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// The cursor moved to this change.
    At(CurrentChange),
    /// The diff has no changes; there is nothing to navigate.
    Empty,
}

impl Navigation {
    /// The change, if any.
    pub fn change(&self) -> Option<&CurrentChange> {
        match self {
            Navigation::At(change) => Some(change),
            Navigation::Empty => None,
        }
    }

    /// True for [`Navigation::Empty`].
    pub fn is_empty(&self) -> bool {
        matches!(self, Navigation::Empty)
    }
}

/// Cursor over the non-unchanged entries of one [`DiffResult`].
///
/// Owned by whoever renders the comparison. A new comparison needs a new
/// navigator; indices from an old one are meaningless for a new diff.
#[derive(Debug, Clone, Default)]
pub struct ChangeNavigator {
    changes: Vec<ChangeRef>,
    cursor: Option<usize>,
}

impl ChangeNavigator {
    /// Build the change list for a diff. The cursor starts unset.
    pub fn new(diff: &DiffResult) -> Self {
        let changes = diff
            .entries()
            .iter()
            .enumerate()
            .filter(|(_, e)| e.kind.is_change())
            .map(|(row, e)| ChangeRef {
                row,
                kind: e.kind,
                text: e.text.clone(),
            })
            .collect();
        Self {
            changes,
            cursor: None,
        }
    }

    /// Number of changes.
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// True when the diff has no changes.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Current cursor, if a jump has happened.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Move to `index`, wrapping out-of-range values.
    ///
    /// Negative indices go to the last change, indices past the end go to
    /// the first one.
    pub fn jump_to(&mut self, index: isize) -> Navigation {
        if self.changes.is_empty() {
            return Navigation::Empty;
        }
        let len = self.changes.len();
        let index = if index < 0 {
            len - 1
        } else if index as usize >= len {
            0
        } else {
            index as usize
        };
        self.cursor = Some(index);
        self.at(index)
    }

    /// Move to the next change. Before any jump this goes to index 1.
    pub fn next(&mut self) -> Navigation {
        let cursor = self.cursor.unwrap_or(0) as isize;
        self.jump_to(cursor + 1)
    }

    /// Move to the previous change. Before any jump this goes to the last one.
    pub fn previous(&mut self) -> Navigation {
        let cursor = self.cursor.unwrap_or(0) as isize;
        self.jump_to(cursor - 1)
    }

    /// Move to the first change.
    pub fn first(&mut self) -> Navigation {
        self.jump_to(0)
    }

    /// Move to the last change.
    pub fn last(&mut self) -> Navigation {
        self.jump_to(self.changes.len() as isize - 1)
    }

    /// The change under the cursor without moving it.
    pub fn current(&self) -> Navigation {
        match self.cursor {
            Some(index) if index < self.changes.len() => self.at(index),
            _ => Navigation::Empty,
        }
    }

    /// Whether `row` is the change under the cursor.
    pub fn is_current_row(&self, row: usize) -> bool {
        self.cursor
            .and_then(|i| self.changes.get(i))
            .is_some_and(|c| c.row == row)
    }

    fn at(&self, index: usize) -> Navigation {
        let change = &self.changes[index];
        Navigation::At(CurrentChange {
            index,
            row: change.row,
            kind: change.kind,
            text: change.text.clone(),
            total: self.changes.len(),
        })
    }
}
