use std::path::Path;

use tracing::warn;

use super::App;
use crate::core::DocumentWatcher;

impl App {
    /// Start watching the documents that live on disk.
    pub fn enable_watch(&mut self) -> Result<(), notify::Error> {
        let paths: Vec<&Path> = [self.before_source.path(), self.after_source.path()]
            .into_iter()
            .flatten()
            .collect();
        if paths.is_empty() {
            warn!("nothing to watch: both documents come from stdin");
            return Ok(());
        }
        self.watcher = Some(DocumentWatcher::new(&paths)?);
        Ok(())
    }

    /// Whether live reload is active.
    pub fn is_watching(&self) -> bool {
        self.watcher.is_some()
    }

    /// Poll the file watcher and reload when a document changed.
    pub fn poll_watcher(&mut self) -> bool {
        let Some(ref watcher) = self.watcher else {
            return false;
        };

        if watcher.poll().is_some() {
            self.reload();
            true
        } else {
            false
        }
    }
}
