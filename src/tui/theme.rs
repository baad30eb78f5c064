//! Light/dark palettes and accent colors, as 256-color codes.

use crate::pass::StrengthColor;
use crate::settings::{Accent, Theme};
use crate::terminal::{RESET, bg, fg};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: u8,
    pub fg: u8,
    pub dim: u8,
    pub accent: u8,
}

impl Palette {
    pub fn new(theme: Theme, accent: Accent) -> Self {
        let (bg, fg, dim) = match theme {
            Theme::Dark => (235, 252, 242),
            Theme::Light => (255, 236, 247),
        };
        Self {
            bg,
            fg,
            dim,
            accent: accent_code(accent),
        }
    }

    /// Full line in palette colors.
    pub fn paint(&self, line: &str) -> String {
        format!("{}{}{line}{RESET}", bg(self.bg), fg(self.fg))
    }

    /// `text` in the accent color, returning to the base foreground.
    pub fn accent(&self, text: &str) -> String {
        self.colored(self.accent, text)
    }

    pub fn dim(&self, text: &str) -> String {
        self.colored(self.dim, text)
    }

    pub fn colored(&self, code: u8, text: &str) -> String {
        format!("{}{text}{}", fg(code), fg(self.fg))
    }

    pub fn base(&self) -> String {
        fg(self.fg)
    }
}

fn accent_code(accent: Accent) -> u8 {
    match accent {
        Accent::Purple => 135,
        Accent::Blue => 33,
        Accent::Green => 35,
        Accent::Orange => 208,
        Accent::Pink => 205,
        Accent::Red => 196,
    }
}

/// Meter color for a strength tier. `None` falls back to the dim track color.
pub fn strength_code(color: StrengthColor, palette: &Palette) -> u8 {
    match color {
        StrengthColor::None => palette.dim,
        StrengthColor::Red => 196,
        StrengthColor::Orange => 208,
        StrengthColor::Amber => 214,
        StrengthColor::Lime => 148,
        StrengthColor::Green => 34,
        StrengthColor::Blue => 33,
        StrengthColor::Violet => 99,
    }
}
