//! Core primitives for confdiff (no TUI dependencies).

mod config;
mod diff;
mod navigator;
mod search;
mod source;
mod stats;
mod text;
mod watcher;

pub use config::*;
pub use diff::*;
pub use navigator::*;
pub use search::*;
pub use source::*;
pub use stats::*;
pub use text::*;
pub use watcher::*;
