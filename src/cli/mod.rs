//! Non-interactive output.

mod print;

pub use print::*;
