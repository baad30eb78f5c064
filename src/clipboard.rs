//! Clipboard access with a terminal fallback.
//!
//! The system clipboard is tried first. When it is unavailable or rejects the
//! write, the text is sent to the terminal emulator as an OSC 52 sequence,
//! which most modern terminals (and tmux with `set-clipboard on`) honor.

use std::io::{self, Write};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroizing;

use crate::error::{Error, Result};

/// Which path ended up holding the copied text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyPath {
    Primary,
    Fallback,
}

pub trait ClipboardBackend {
    fn name(&self) -> &'static str;
    fn set(&mut self, text: &str) -> Result<()>;
}

/// Desktop clipboard through `copypasta`. Connects lazily on first write.
#[derive(Default)]
pub struct SystemClipboard {
    ctx: Option<ClipboardContext>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardBackend for SystemClipboard {
    fn name(&self) -> &'static str {
        "system clipboard"
    }

    fn set(&mut self, text: &str) -> Result<()> {
        if self.ctx.is_none() {
            let ctx = ClipboardContext::new().map_err(|e| Error::Clipboard(e.to_string()))?;
            self.ctx = Some(ctx);
        }
        let Some(ctx) = self.ctx.as_mut() else {
            return Err(Error::Clipboard("clipboard not initialized".into()));
        };
        ctx.set_contents(text.to_owned())
            .map_err(|e| Error::Clipboard(e.to_string()))
    }
}

/// OSC 52 escape sequence written to stdout.
#[derive(Debug, Default)]
pub struct Osc52;

impl Osc52 {
    fn sequence(text: &str) -> Zeroizing<String> {
        let encoded = Zeroizing::new(STANDARD.encode(text.as_bytes()));
        Zeroizing::new(format!("\x1b]52;c;{}\x07", encoded.as_str()))
    }
}

impl ClipboardBackend for Osc52 {
    fn name(&self) -> &'static str {
        "terminal (OSC 52)"
    }

    fn set(&mut self, text: &str) -> Result<()> {
        if unsafe { libc::isatty(1) } != 1 {
            return Err(Error::Clipboard("stdout is not a terminal".into()));
        }
        let seq = Osc52::sequence(text);
        let mut out = io::stdout().lock();
        out.write_all(seq.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

/// Primary backend with a synchronous fallback.
pub struct Clipboard {
    primary: Box<dyn ClipboardBackend>,
    fallback: Box<dyn ClipboardBackend>,
}

impl Clipboard {
    pub fn new(primary: Box<dyn ClipboardBackend>, fallback: Box<dyn ClipboardBackend>) -> Self {
        Self { primary, fallback }
    }

    pub fn system() -> Self {
        Self::new(Box::new(SystemClipboard::new()), Box::new(Osc52))
    }

    /// Copy `text`, falling back when the primary backend fails.
    /// Errors only when both backends fail.
    pub fn copy(&mut self, text: &str) -> Result<CopyPath> {
        let primary_err = match self.primary.set(text) {
            Ok(()) => return Ok(CopyPath::Primary),
            Err(e) => e,
        };
        log::info!(
            "{} failed ({primary_err}); trying {}",
            self.primary.name(),
            self.fallback.name()
        );
        match self.fallback.set(text) {
            Ok(()) => Ok(CopyPath::Fallback),
            Err(fallback_err) => Err(Error::CopyFailed {
                primary: primary_err.to_string(),
                fallback: fallback_err.to_string(),
            }),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    /// Records writes into a shared buffer; optionally always fails.
    #[derive(Clone, Default)]
    pub struct Recording {
        pub writes: Rc<RefCell<Vec<String>>>,
        pub fail: bool,
    }

    impl Recording {
        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Default::default()
            }
        }
    }

    impl ClipboardBackend for Recording {
        fn name(&self) -> &'static str {
            "recording"
        }

        fn set(&mut self, text: &str) -> Result<()> {
            if self.fail {
                return Err(Error::Clipboard("rejected".into()));
            }
            self.writes.borrow_mut().push(text.to_string());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::Recording;
    use super::*;

    #[test]
    fn primary_success_skips_fallback() {
        let primary = Recording::default();
        let fallback = Recording::default();
        let mut cb = Clipboard::new(Box::new(primary.clone()), Box::new(fallback.clone()));
        assert_eq!(cb.copy("secret").unwrap(), CopyPath::Primary);
        assert_eq!(primary.writes.borrow().as_slice(), ["secret"]);
        assert!(fallback.writes.borrow().is_empty());
    }

    #[test]
    fn primary_failure_uses_fallback() {
        let fallback = Recording::default();
        let mut cb = Clipboard::new(Box::new(Recording::failing()), Box::new(fallback.clone()));
        assert_eq!(cb.copy("secret").unwrap(), CopyPath::Fallback);
        assert_eq!(fallback.writes.borrow().as_slice(), ["secret"]);
    }

    #[test]
    fn both_failing_is_an_error() {
        let mut cb = Clipboard::new(Box::new(Recording::failing()), Box::new(Recording::failing()));
        assert!(matches!(cb.copy("secret"), Err(Error::CopyFailed { .. })));
    }

    #[test]
    fn osc52_sequence_is_base64() {
        assert_eq!(Osc52::sequence("hi").as_str(), "\x1b]52;c;aGk=\x07");
    }
}
