//! Common re-exports for convenient importing.
//!
//! # Example
//!
//! ```rust,ignore
//! use confdiff::prelude::*;
//! ```

pub use crate::core::{
    Algorithm, ChangeNavigator, Config, CurrentChange, DiffEntry, DiffOptions, DiffResult,
    DiffStats, DocumentSource, EntryKind, LoadError, Navigation, SearchHit, SearchMatches,
    TextBuffer, TieBreak,
};
