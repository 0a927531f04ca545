//! Application state and lifecycle.

use tracing::{debug, info};

use crate::core::{
    ChangeNavigator, DiffOptions, DiffResult, DiffStats, DocumentSource, DocumentWatcher,
    LoadError, SearchMatches, TextBuffer,
};
use crate::theme::Theme;

mod clipboard;
mod navigation;
mod search;
mod settings;
mod state;
mod watcher;

pub use state::{Mode, UiState, ViewerState};

/// Application state for one comparison session.
pub struct App {
    /// Where the `before` document comes from.
    pub before_source: DocumentSource,
    /// Where the `after` document comes from.
    pub after_source: DocumentSource,
    /// Current `before` document.
    pub before: TextBuffer,
    /// Current `after` document.
    pub after: TextBuffer,
    /// Alignment settings.
    pub options: DiffOptions,

    /// Diff of the current documents.
    pub diff: DiffResult,
    /// Summary counts for the current diff.
    pub stats: DiffStats,
    /// Change cursor for the current diff. Replaced on every recompute.
    pub navigator: ChangeNavigator,
    /// Rows matching the search query. Rebuilt with the diff.
    pub search: SearchMatches,

    /// Viewer state (scroll).
    pub viewer: ViewerState,
    /// UI state (mode, messages).
    pub ui: UiState,
    /// Current color theme.
    pub theme: Theme,
    /// Should the app quit?
    pub should_quit: bool,

    /// File watcher, when live reload is on.
    watcher: Option<DocumentWatcher>,
    /// Row a live search starts from.
    search_origin: usize,
}

impl App {
    /// Load both documents and compute the first diff.
    pub fn load(
        before_source: DocumentSource,
        after_source: DocumentSource,
        options: DiffOptions,
        theme: Theme,
    ) -> Result<Self, LoadError> {
        let before = before_source.load()?;
        let after = after_source.load()?;
        Ok(Self::from_buffers(
            before_source,
            after_source,
            before,
            after,
            options,
            theme,
        ))
    }

    /// Build from already loaded documents.
    pub fn from_buffers(
        before_source: DocumentSource,
        after_source: DocumentSource,
        before: TextBuffer,
        after: TextBuffer,
        options: DiffOptions,
        theme: Theme,
    ) -> Self {
        let mut app = Self {
            before_source,
            after_source,
            before: TextBuffer::empty(),
            after: TextBuffer::empty(),
            options,
            diff: DiffResult::default(),
            stats: DiffStats::default(),
            navigator: ChangeNavigator::default(),
            search: SearchMatches::default(),
            viewer: ViewerState::default(),
            ui: UiState::default(),
            theme,
            should_quit: false,
            watcher: None,
            search_origin: 0,
        };
        app.set_documents(before, after);
        app.first_change();
        app.ui.dirty = true;
        app
    }

    /// Replace both documents, recompute the diff and rebuild the navigator.
    pub fn set_documents(&mut self, before: TextBuffer, after: TextBuffer) {
        self.before = before;
        self.after = after;
        self.recompute();
    }

    /// Change alignment settings and recompute.
    pub fn set_options(&mut self, options: DiffOptions) {
        if self.options != options {
            self.options = options;
            self.recompute();
        }
    }

    fn recompute(&mut self) {
        self.diff = DiffResult::compute_with(&self.before, &self.after, &self.options);
        self.stats = self.diff.stats();
        // Indices from the previous diff must never leak into the new one.
        self.navigator = ChangeNavigator::new(&self.diff);
        if self.search.is_active() {
            let query = self.search.query().to_string();
            self.search = SearchMatches::new(&query, &self.diff);
        }
        self.viewer.scroll_y = self.viewer.scroll_y.min(self.max_scroll());
        self.ui.dirty = true;
        debug!(
            rows = self.diff.len(),
            changes = self.navigator.len(),
            "diff recomputed"
        );
    }

    /// Re-read both documents from their sources.
    pub fn reload(&mut self) {
        let loaded = self
            .before_source
            .load()
            .and_then(|before| self.after_source.load().map(|after| (before, after)));
        match loaded {
            Ok((before, after)) => {
                self.set_documents(before, after);
                self.first_change();
                info!(stats = %self.stats, "reloaded documents");
                self.ui.set_status(format!("Reloaded ({})", self.stats));
            }
            Err(e) => self.ui.set_error(format!("Reload failed: {}", e)),
        }
    }

    /// Display label of the `before` document.
    pub fn before_label(&self) -> String {
        self.before_source.label()
    }

    /// Display label of the `after` document.
    pub fn after_label(&self) -> String {
        self.after_source.label()
    }

    /// Mark the UI as needing redraw.
    pub fn mark_dirty(&mut self) {
        self.ui.dirty = true;
    }

    /// Clear the dirty flag after drawing.
    pub fn clear_dirty(&mut self) {
        self.ui.dirty = false;
    }

    /// Whether a redraw is pending.
    pub fn is_dirty(&self) -> bool {
        self.ui.dirty
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.ui.mode = match self.ui.mode {
            Mode::Help => Mode::Normal,
            Mode::Normal | Mode::Search => Mode::Help,
        };
        self.ui.dirty = true;
    }
}
