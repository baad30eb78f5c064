//! Exit handling: signal handlers, terminal cleanup, and graceful shutdown.

use std::sync::atomic::{AtomicBool, Ordering};

/// Set while the TUI owns the alternate screen.
static SCREEN_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Record whether the alternate screen is in use, so an abrupt exit can
/// leave it.
pub fn set_screen_active(active: bool) {
    SCREEN_ACTIVE.store(active, Ordering::SeqCst);
}

/// Reset terminal to sane state using termios directly.
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

/// Async-signal-safe: only termios calls and raw writes.
fn restore_screen() {
    reset_terminal_termios();
    if !SCREEN_ACTIVE.load(Ordering::Relaxed) {
        return;
    }
    const SEQ: &[u8] = b"\x1b[0m\x1b[?25h\x1b[?1049l";
    unsafe {
        if libc::isatty(1) == 1 {
            libc::write(1, SEQ.as_ptr() as *const libc::c_void, SEQ.len());
        }
    }
}

/// Registered with atexit; runs on every normal exit.
extern "C" fn cleanup_on_exit() {
    restore_screen();
}

/// SIGINT/SIGTERM/SIGHUP: exit through atexit so cleanup runs.
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// SIGSEGV/SIGABRT: restore the terminal, then re-raise for a core dump.
extern "C" fn crash_handler(sig: libc::c_int) {
    restore_screen();
    unsafe {
        libc::signal(sig, libc::SIG_DFL);
        libc::raise(sig);
    }
}

/// Install all signal handlers and register atexit cleanup.
/// Call this early in main().
pub fn install_handlers() {
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
        for sig in [libc::SIGSEGV, libc::SIGABRT] {
            libc::signal(sig, crash_handler as *const () as libc::sighandler_t);
        }
    }
}

/// Keep generated passwords out of core dumps.
pub fn disable_core_dumps() {
    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }
}
