//! Centralized warning and status messages for CLI output.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::terminal::{RED, RESET, YELLOW};

/// Suppresses warnings and confirmations.
static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Yellow, to stderr. Suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Red, to stderr. Always shown.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

pub fn clipboard_copied(count: usize) {
    if !quiet() {
        println!("*** {count} password(s) COPIED TO CLIPBOARD ***");
    }
}

pub fn clipboard_fallback(err: &str) {
    warn(&format!("Clipboard unavailable ({err}), printing instead"));
}

pub fn settings_saved() {
    if !quiet() {
        println!("Defaults saved");
    }
}
