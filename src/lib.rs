//! confdiff - review configuration changes before publishing them.
//!
//! Aligns two versions of a configuration document line by line and lets
//! the reviewer step through the changes, either in a terminal UI or as a
//! plain listing.
//!
//! # Quick Start
//!
//! ```rust
//! use confdiff::prelude::*;
//!
//! let result = confdiff::core::diff(&["a", "d"], &["a", "b", "c", "d"]);
//! let mut nav = ChangeNavigator::new(&result);
//! let change = nav.first();
//! assert_eq!(change.change().map(|c| c.text.as_str()), Some("b"));
//! ```

#![deny(missing_docs)]

pub mod cli;
pub mod core;
pub mod logging;
pub mod metrics;
pub mod prelude;
pub mod theme;
pub mod ui;
