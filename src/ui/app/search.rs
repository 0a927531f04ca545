use super::{App, Mode};
use crate::core::{SearchHit, SearchMatches};

impl App {
    /// Open the search prompt, prefilled with the last query.
    pub fn start_search(&mut self) {
        self.ui.mode = Mode::Search;
        self.ui.search_input = self.search.query().to_string();
        self.search_origin = self.focus_row();
        self.ui.dirty = true;
    }

    /// Re-run the search as the query is typed.
    pub fn update_search_live(&mut self) {
        self.search = SearchMatches::new(&self.ui.search_input, &self.diff);
        let hit = self.search.seek(self.search_origin);
        self.show_hit(hit);
    }

    /// Close the prompt and keep the matches for `n`/`N`.
    pub fn apply_search(&mut self) {
        self.ui.mode = Mode::Normal;
        if self.ui.search_input.is_empty() {
            self.clear_search();
        }
        self.ui.dirty = true;
    }

    /// Close the prompt and drop the search.
    pub fn cancel_search(&mut self) {
        self.ui.mode = Mode::Normal;
        self.clear_search();
    }

    /// Forget the current search.
    pub fn clear_search(&mut self) {
        self.search = SearchMatches::default();
        self.ui.search_input.clear();
        self.ui.status = None;
        self.ui.error = None;
        self.ui.dirty = true;
    }

    /// Jump to the next match (wraps).
    pub fn next_match(&mut self) {
        let hit = self.search.next();
        self.show_hit(hit);
    }

    /// Jump to the previous match (wraps).
    pub fn prev_match(&mut self) {
        let hit = self.search.previous();
        self.show_hit(hit);
    }

    fn show_hit(&mut self, hit: Option<SearchHit>) {
        match hit {
            Some(hit) => {
                self.center_on_row(hit.row);
                self.ui
                    .set_status(format!("match {}/{}", hit.position(), hit.total));
            }
            None if self.search.is_active() => {
                self.ui.set_error(format!("not found: {}", self.search.query()));
            }
            None => {
                self.ui.status = None;
                self.ui.error = None;
            }
        }
        self.ui.dirty = true;
    }

    /// Row the reviewer is looking at: the current change, else the top row.
    fn focus_row(&self) -> usize {
        self.navigator
            .current()
            .change()
            .map_or(self.viewer.scroll_y, |c| c.row)
    }
}
