//! Find-in-diff over the rows of a [`DiffResult`].

use crate::core::DiffResult;

/// The match under the search cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchHit {
    /// Zero-based index in the match list.
    pub index: usize,
    /// Row of the matching entry in the diff.
    pub row: usize,
    /// Number of matching rows.
    pub total: usize,
}

impl SearchHit {
    /// One-based position for display.
    pub fn position(&self) -> usize {
        self.index + 1
    }
}

/// Rows whose text contains a query, with a wrapping cursor.
///
/// Matching is literal and case-insensitive. A row counts once however many
/// times the query occurs in it. Like [`ChangeNavigator`](crate::core::ChangeNavigator),
/// the matches belong to one diff and are rebuilt when the diff changes.
#[derive(Debug, Clone, Default)]
pub struct SearchMatches {
    query: String,
    rows: Vec<usize>,
    cursor: Option<usize>,
}

impl SearchMatches {
    /// Collect the rows of `diff` containing `query`. An empty query matches nothing.
    pub fn new(query: &str, diff: &DiffResult) -> Self {
        let needle = query.to_lowercase();
        let rows = if needle.is_empty() {
            Vec::new()
        } else {
            diff.entries()
                .iter()
                .enumerate()
                .filter(|(_, e)| e.text.to_lowercase().contains(&needle))
                .map(|(row, _)| row)
                .collect()
        };
        Self {
            query: query.to_string(),
            rows,
            cursor: None,
        }
    }

    /// The query as typed.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// True when a non-empty query is set, whether or not it matched.
    pub fn is_active(&self) -> bool {
        !self.query.is_empty()
    }

    /// Number of matching rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when nothing matched.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Move to the first match at or after `row`, wrapping to the first match.
    pub fn seek(&mut self, row: usize) -> Option<SearchHit> {
        if self.rows.is_empty() {
            return None;
        }
        let index = self.rows.partition_point(|&r| r < row);
        self.select(if index == self.rows.len() { 0 } else { index })
    }

    /// Move to the next match, wrapping. Before any move this is the first match.
    pub fn next(&mut self) -> Option<SearchHit> {
        let len = self.rows.len();
        if len == 0 {
            return None;
        }
        let index = self.cursor.map_or(0, |i| (i + 1) % len);
        self.select(index)
    }

    /// Move to the previous match, wrapping. Before any move this is the last match.
    pub fn previous(&mut self) -> Option<SearchHit> {
        let len = self.rows.len();
        if len == 0 {
            return None;
        }
        let index = match self.cursor {
            Some(i) if i > 0 => i - 1,
            _ => len - 1,
        };
        self.select(index)
    }

    /// The match under the cursor.
    pub fn current(&self) -> Option<SearchHit> {
        self.cursor.and_then(|i| self.hit(i))
    }

    /// Whether `row` matches the query.
    pub fn contains_row(&self, row: usize) -> bool {
        self.rows.binary_search(&row).is_ok()
    }

    /// Whether `row` is the match under the cursor.
    pub fn is_current_row(&self, row: usize) -> bool {
        self.current().is_some_and(|hit| hit.row == row)
    }

    fn select(&mut self, index: usize) -> Option<SearchHit> {
        self.cursor = Some(index);
        self.hit(index)
    }

    fn hit(&self, index: usize) -> Option<SearchHit> {
        self.rows.get(index).map(|&row| SearchHit {
            index,
            row,
            total: self.rows.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::diff;

    fn sample() -> DiffResult {
        // rows: 0 name, 1 -Port, 2 +port, 3 host, 4 +report
        diff(
            &["name: api", "Port: 80", "host: x"],
            &["name: api", "port: 8080", "host: x", "report: on"],
        )
    }

    #[test]
    fn case_insensitive_literal_rows() {
        let matches = SearchMatches::new("PORT", &sample());
        assert_eq!(matches.len(), 3);
        assert!(matches.contains_row(1));
        assert!(matches.contains_row(2));
        assert!(matches.contains_row(4));
        assert!(!matches.contains_row(3));
    }

    #[test]
    fn regex_characters_are_literal() {
        let result = diff(&["a.b", "axb"], &["a.b", "axb"]);
        let matches = SearchMatches::new("a.b", &result);
        assert_eq!(matches.len(), 1);
        assert!(matches.contains_row(0));
    }

    #[test]
    fn next_and_previous_wrap() {
        let mut matches = SearchMatches::new("port", &sample());
        assert_eq!(matches.next().map(|h| h.row), Some(1));
        assert_eq!(matches.next().map(|h| h.row), Some(2));
        assert_eq!(matches.next().map(|h| h.row), Some(4));
        assert_eq!(matches.next().map(|h| h.row), Some(1));
        assert_eq!(matches.previous().map(|h| h.row), Some(4));
    }

    #[test]
    fn previous_before_any_move_is_last() {
        let mut matches = SearchMatches::new("port", &sample());
        let hit = matches.previous().unwrap();
        assert_eq!((hit.position(), hit.total), (3, 3));
    }

    #[test]
    fn seek_starts_at_row_and_wraps() {
        let mut matches = SearchMatches::new("port", &sample());
        assert_eq!(matches.seek(2).map(|h| h.row), Some(2));
        assert_eq!(matches.seek(3).map(|h| h.row), Some(4));
        assert_eq!(matches.seek(5).map(|h| h.row), Some(1));
        assert!(matches.is_current_row(1));
    }

    #[test]
    fn no_match_and_empty_query() {
        let mut missing = SearchMatches::new("timeout", &sample());
        assert!(missing.is_active());
        assert!(missing.is_empty());
        assert_eq!(missing.next(), None);
        assert_eq!(missing.seek(0), None);

        let empty = SearchMatches::new("", &sample());
        assert!(!empty.is_active());
        assert!(empty.is_empty());
    }
}
