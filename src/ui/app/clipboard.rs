use super::App;
use arboard::Clipboard;

impl App {
    /// Copy the text of the current change to the clipboard.
    pub fn copy_current_change(&mut self) {
        let Some(change) = self.navigator.current().change().cloned() else {
            self.ui.set_error("No change selected");
            return;
        };
        let what = format!(
            "{} line {}/{}",
            change.kind.label(),
            change.position(),
            change.total
        );
        self.copy_to_clipboard(change.text, &what);
    }

    /// Copy the whole `after` document to the clipboard.
    pub fn copy_after_document(&mut self) {
        let text = self.after.to_text();
        let what = self.after_label();
        self.copy_to_clipboard(text, &what);
    }

    fn copy_to_clipboard(&mut self, text: String, what: &str) {
        match Clipboard::new() {
            Ok(mut clipboard) => {
                if let Err(e) = clipboard.set_text(text) {
                    self.ui.set_error(format!("Clipboard error: {}", e));
                } else {
                    self.ui.set_status(format!("Copied {} to clipboard", what));
                }
            }
            Err(e) => {
                self.ui.set_error(format!("Clipboard unavailable: {}", e));
            }
        }
    }
}
