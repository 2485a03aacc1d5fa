//! Shared terminal utilities.
//!
//! Box drawing, ANSI helpers and the raw mode screen guard.

mod output;
mod raw_mode;

pub use output::*;
pub use raw_mode::*;
