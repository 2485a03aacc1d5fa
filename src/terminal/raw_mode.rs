//! Raw mode RAII guard.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};

/// Set while a `ScreenGuard` holds the alternate screen.
static SCREEN_ACTIVE: AtomicBool = AtomicBool::new(false);

pub fn screen_active() -> bool {
    SCREEN_ACTIVE.load(Ordering::SeqCst)
}

/// Raw mode on the alternate screen with the cursor hidden.
/// Everything is restored when the guard drops.
pub struct ScreenGuard {
    active: bool,
}

impl ScreenGuard {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        SCREEN_ACTIVE.store(true, Ordering::SeqCst);
        Ok(Self { active: true })
    }

    /// Restore the terminal early (also happens on drop).
    pub fn restore(&mut self) {
        if self.active {
            let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            SCREEN_ACTIVE.store(false, Ordering::SeqCst);
            self.active = false;
        }
    }
}

impl Drop for ScreenGuard {
    fn drop(&mut self) {
        self.restore();
    }
}
