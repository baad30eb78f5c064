//! Boundary between the application and whatever renders it.

use crate::pass::{CharacterClass, StrengthColor};
use crate::settings::{Accent, Theme};

/// Text-bearing elements of the interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    PasswordField,
    LengthValue,
    StrengthLabel,
    CrackTime,
    Entropy,
    CopyButton,
    /// Live region read out by assistive technology.
    Announcer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    LengthChanged(usize),
    LengthStep(i32),
    ClassToggled(CharacterClass),
    Generate,
    Copy,
    PasswordEdited(String),
    ThemeToggled,
    AccentCycled,
    /// Idle wake-up, used to expire transient feedback.
    Tick,
    Quit,
}

/// Rendering and input surface driven by [`App`](super::App).
pub trait UiSurface {
    /// Block until the next event. `None` ends the session.
    fn next_event(&mut self) -> Option<UiEvent>;

    fn set_text(&mut self, element: Element, text: &str);

    fn set_checked(&mut self, class: CharacterClass, checked: bool);

    fn set_strength(&mut self, width_percent: u8, color: StrengthColor);

    fn apply_theme(&mut self, theme: Theme, accent: Accent);

    /// Blocking, user-acknowledged message.
    fn alert(&mut self, message: &str);

    /// Called once after each handled event.
    fn flush(&mut self) {}
}
