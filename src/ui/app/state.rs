/// UI mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Normal navigation mode.
    #[default]
    Normal,
    /// Viewing help overlay.
    Help,
    /// Typing a search query.
    Search,
}

/// Diff viewer viewport state.
#[derive(Debug, Default)]
pub struct ViewerState {
    /// Vertical scroll offset (first visible diff row).
    pub scroll_y: usize,
    /// Horizontal scroll offset in characters.
    pub scroll_x: usize,
    /// Rows visible in the diff pane, updated on every render.
    pub viewport_height: usize,
}

/// UI mode and message state.
#[derive(Debug, Default)]
pub struct UiState {
    /// Current mode.
    pub mode: Mode,
    /// Error message.
    pub error: Option<String>,
    /// Status message.
    pub status: Option<String>,
    /// Search query being typed.
    pub search_input: String,
    /// Dirty flag for redraw.
    pub dirty: bool,
}

impl UiState {
    /// Show a status message, clearing any error.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status = Some(msg.into());
        self.error = None;
        self.dirty = true;
    }

    /// Show an error message.
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error = Some(msg.into());
        self.status = None;
        self.dirty = true;
    }
}
