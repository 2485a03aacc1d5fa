//! Exit handling: exit codes, signal handlers and terminal restore.

use crate::terminal;

pub const SUCCESS: i32 = 0;
/// Validation, generation or I/O failure.
pub const FAILURE: i32 = 1;
/// Bad command-line arguments.
pub const USAGE: i32 = 2;

/// Restore cooked mode using termios directly (async-signal-safe).
fn reset_terminal_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(0, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(0, libc::TCSANOW, &termios);
        }
    }
}

/// Escape codes to restore the terminal at exit. Leaving the alternate screen
/// also restores the saved cursor, so it is only sent while the screen is up.
fn restore_sequence(screen_active: bool) -> &'static [u8] {
    const SCREEN: &[u8] = b"\x1b[0m\x1b[?1049l\x1b[?25h";
    const PLAIN: &[u8] = b"\x1b[0m\x1b[?25h";
    if screen_active { SCREEN } else { PLAIN }
}

/// Registered with atexit; runs on every normal exit path.
extern "C" fn cleanup_on_exit() {
    reset_terminal_termios();
    let restore = restore_sequence(terminal::screen_active());
    unsafe {
        if libc::isatty(1) == 1 {
            libc::write(1, restore.as_ptr() as *const libc::c_void, restore.len());
        }
    }
}

/// SIGINT/SIGTERM/SIGHUP: exit, letting atexit restore the terminal.
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// Call early in main().
pub fn install_handlers() {
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
        // Keep generated passwords out of core dumps
        #[cfg(target_os = "linux")]
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }
}
