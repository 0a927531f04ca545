use super::App;
use crate::core::Navigation;

impl App {
    /// Jump to the next change (wraps to the first).
    pub fn next_change(&mut self) {
        let nav = self.navigator.next();
        self.apply_navigation(nav);
    }

    /// Jump to the previous change (wraps to the last).
    pub fn prev_change(&mut self) {
        let nav = self.navigator.previous();
        self.apply_navigation(nav);
    }

    /// Jump to the first change.
    pub fn first_change(&mut self) {
        let nav = self.navigator.first();
        self.apply_navigation(nav);
    }

    /// Jump to the last change.
    pub fn last_change(&mut self) {
        let nav = self.navigator.last();
        self.apply_navigation(nav);
    }

    fn apply_navigation(&mut self, nav: Navigation) {
        match nav {
            Navigation::At(change) => {
                self.center_on_row(change.row);
                self.ui.status = None;
                self.ui.error = None;
            }
            Navigation::Empty => self.ui.set_status("No changes"),
        }
        self.ui.dirty = true;
    }

    /// Current change position as (1-based index, total).
    pub fn change_info(&self) -> Option<(usize, usize)> {
        self.navigator
            .current()
            .change()
            .map(|c| (c.position(), c.total))
    }

    /// Scroll so that `row` sits in the middle of the viewport.
    pub fn center_on_row(&mut self, row: usize) {
        let half = self.viewer.viewport_height / 2;
        self.viewer.scroll_y = row.saturating_sub(half).min(self.max_scroll());
    }

    /// Scroll the diff by the given deltas.
    pub fn scroll_diff(&mut self, dy: isize, dx: isize) {
        let y = self.viewer.scroll_y as isize + dy;
        self.viewer.scroll_y = (y.max(0) as usize).min(self.max_scroll());
        let x = self.viewer.scroll_x as isize + dx;
        self.viewer.scroll_x = x.max(0) as usize;
        self.ui.dirty = true;
    }

    /// Scroll by half a page; negative goes up.
    pub fn scroll_half_page(&mut self, direction: isize) {
        let step = (self.viewer.viewport_height / 2).max(1) as isize;
        self.scroll_diff(step * direction.signum(), 0);
    }

    /// Go to the first row.
    pub fn scroll_to_top(&mut self) {
        self.viewer.scroll_y = 0;
        self.ui.dirty = true;
    }

    /// Go to the last page.
    pub fn scroll_to_bottom(&mut self) {
        self.viewer.scroll_y = self.max_scroll();
        self.ui.dirty = true;
    }

    /// Largest useful scroll offset.
    pub fn max_scroll(&self) -> usize {
        self.diff.len().saturating_sub(self.viewer.viewport_height.max(1))
    }

    /// Record the visible height, keeping the current change in view.
    pub fn set_viewport_height(&mut self, height: usize) {
        if self.viewer.viewport_height == height {
            return;
        }
        self.viewer.viewport_height = height;
        if let Some(change) = self.navigator.current().change() {
            let row = change.row;
            self.center_on_row(row);
        } else {
            self.viewer.scroll_y = self.viewer.scroll_y.min(self.max_scroll());
        }
    }
}
