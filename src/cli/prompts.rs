//! Warnings and confirmations printed by the CLI.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::clipboard::CopyPath;
use crate::pass::CharacterClass;
use crate::terminal::{RED, RESET, YELLOW};

/// Suppresses warnings and confirmations. Errors are always shown.
static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

fn quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Color only when stderr is a terminal.
fn stderr_is_tty() -> bool {
    unsafe { libc::isatty(2) == 1 }
}

fn colored(color: &str, msg: &str) -> String {
    if stderr_is_tty() {
        format!("{color}{msg}{RESET}")
    } else {
        msg.to_string()
    }
}

/// Yellow on stderr; suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet() {
        eprintln!("{}", colored(YELLOW, msg));
    }
}

/// Red on stderr; never suppressed.
pub fn error(msg: &str) {
    eprintln!("{}", colored(RED, msg));
}

pub fn no_classes_selected(fallback: CharacterClass) {
    warn(&format!(
        "Warning: no character types selected; using {}",
        fallback.label()
    ));
}

pub fn clipboard_copied(count: usize, path: CopyPath) {
    if quiet() {
        return;
    }
    let what = if count == 1 {
        "Password".to_string()
    } else {
        format!("{count} passwords")
    };
    match path {
        CopyPath::Primary => eprintln!("{what} copied to clipboard."),
        CopyPath::Fallback => eprintln!("{what} sent to the terminal clipboard (OSC 52)."),
    }
}

pub fn preferences_saved() {
    if !quiet() {
        eprintln!("Preferences saved.");
    }
}
