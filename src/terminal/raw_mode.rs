//! Raw mode RAII guard.

use std::io::{self, Write};

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};

use crate::exits;

/// Raw mode on an alternate screen with the cursor hidden.
/// Everything is restored when the guard is dropped.
pub struct RawModeGuard {
    was_enabled: bool,
}

impl RawModeGuard {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        exits::set_screen_active(true);
        Ok(Self { was_enabled: true })
    }

    /// Manually restore the terminal (also happens on drop).
    pub fn disable(&mut self) {
        if self.was_enabled {
            let mut out = io::stdout();
            let _ = execute!(out, Show, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            let _ = out.flush();
            exits::set_screen_active(false);
            self.was_enabled = false;
        }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        self.disable();
    }
}
