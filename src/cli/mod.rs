//! Non-interactive flag-driven mode.

mod context;
mod flags;
mod help;
mod parse;
mod prompts;

pub use context::{Context, MAX_CLIPBOARD_BATCH, Request, generate_batch, write_passwords};
pub use flags::CliFlags;
pub use help::{help_lines, print_help};
pub use parse::{ParseError, parse};

use crate::exits;
use crate::settings::Settings;

/// Run with command-line arguments; returns the process exit code.
pub fn run(args: Vec<String>) -> i32 {
    let mut ctx = match Context::new(&args, Settings::load_or_default()) {
        Ok(ctx) => ctx,
        Err(e) => {
            prompts::error(&e.to_string());
            prompts::error("Try 'passgen --help'");
            return exits::USAGE;
        }
    };

    match ctx.run() {
        Ok(()) => exits::SUCCESS,
        Err(e) => {
            prompts::error(&e.to_string());
            exits::FAILURE
        }
    }
}
