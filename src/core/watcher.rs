//! File system watching for live reload.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::time::Duration;

use notify::RecursiveMode;
use notify_debouncer_mini::{new_debouncer, DebounceEventResult};
use tracing::{debug, warn};

/// Events emitted by the document watcher.
#[derive(Debug, Clone)]
pub enum WatchEvent {
    /// A watched document changed, reload needed.
    Changed,
}

/// Watches the compared documents for changes.
pub struct DocumentWatcher {
    /// Receiver for watch events.
    rx: Receiver<WatchEvent>,
    /// Keep watcher alive. Dropping this stops watching.
    _watcher: notify_debouncer_mini::Debouncer<notify::RecommendedWatcher>,
}

impl DocumentWatcher {
    /// Watch the given files.
    ///
    /// The parent directory of each file is watched (non-recursively) so that
    /// editors that save by rename are still picked up. Events are debounced
    /// (200ms window) and coalesced into `WatchEvent::Changed`.
    pub fn new(files: &[&Path]) -> Result<Self, notify::Error> {
        let (tx, rx) = mpsc::channel();
        let targets: Vec<PathBuf> = files.iter().map(|p| absolute(p)).collect();
        let filter = targets.clone();

        let mut debouncer = new_debouncer(
            Duration::from_millis(200),
            move |res: DebounceEventResult| match res {
                Ok(events) => {
                    if events.iter().any(|e| is_watched(&e.path, &filter)) {
                        let _ = tx.send(WatchEvent::Changed);
                    }
                }
                Err(e) => warn!(error = %e, "watch error"),
            },
        )?;

        let mut dirs: Vec<PathBuf> = targets
            .iter()
            .filter_map(|p| p.parent().map(Path::to_path_buf))
            .collect();
        dirs.sort();
        dirs.dedup();
        for dir in &dirs {
            debouncer.watcher().watch(dir, RecursiveMode::NonRecursive)?;
            debug!(dir = %dir.display(), "watching");
        }

        Ok(Self {
            rx,
            _watcher: debouncer,
        })
    }

    /// Poll for watch events without blocking.
    ///
    /// Returns `Some(WatchEvent)` if a document changed, `None` if no events pending.
    pub fn poll(&self) -> Option<WatchEvent> {
        match self.rx.try_recv() {
            Ok(event) => {
                // Drain any additional pending events (debouncer may send multiple)
                while self.rx.try_recv().is_ok() {}
                Some(event)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => None,
        }
    }
}

fn absolute(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    })
}

/// Whether an event path refers to one of the watched documents.
fn is_watched(path: &Path, targets: &[PathBuf]) -> bool {
    targets.iter().any(|t| t == path) || {
        let canonical = std::fs::canonicalize(path).ok();
        canonical.is_some_and(|c| targets.iter().any(|t| *t == c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_watched() {
        let targets = vec![
            PathBuf::from("/cfg/before.yaml"),
            PathBuf::from("/cfg/after.yaml"),
        ];

        assert!(is_watched(Path::new("/cfg/before.yaml"), &targets));
        assert!(is_watched(Path::new("/cfg/after.yaml"), &targets));

        assert!(!is_watched(Path::new("/cfg/other.yaml"), &targets));
        assert!(!is_watched(Path::new("/cfg/.after.yaml.swp"), &targets));
    }
}
