//! Display preferences: theme and accent color.

mod file;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

pub use file::{FileStore, MemoryStore, PreferenceStore};

use crate::error::Result;

pub const THEME_KEY: &str = "theme";
pub const ACCENT_KEY: &str = "accentColor";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("Unknown theme: {other}")),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Accent {
    #[default]
    Purple,
    Blue,
    Green,
    Orange,
    Pink,
    Red,
}

impl Accent {
    pub const ALL: [Accent; 6] = [
        Accent::Purple,
        Accent::Blue,
        Accent::Green,
        Accent::Orange,
        Accent::Pink,
        Accent::Red,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Accent::Purple => "purple",
            Accent::Blue => "blue",
            Accent::Green => "green",
            Accent::Orange => "orange",
            Accent::Pink => "pink",
            Accent::Red => "red",
        }
    }

    /// Next accent in [`Accent::ALL`], wrapping around.
    pub fn next(self) -> Self {
        let idx = Accent::ALL.iter().position(|a| *a == self).unwrap_or(0);
        Accent::ALL[(idx + 1) % Accent::ALL.len()]
    }
}

impl FromStr for Accent {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        Accent::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| format!("Unknown accent color: {s}"))
    }
}

impl fmt::Display for Accent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preferences {
    pub theme: Theme,
    pub accent: Accent,
}

impl Preferences {
    /// Read preferences, using defaults for missing or unrecognized values.
    pub fn load(store: &dyn PreferenceStore) -> Self {
        let theme = read_or_default(store, THEME_KEY);
        let accent = read_or_default(store, ACCENT_KEY);
        Self { theme, accent }
    }

    pub fn set_theme(&mut self, store: &mut dyn PreferenceStore, theme: Theme) -> Result<()> {
        self.theme = theme;
        store.set(THEME_KEY, theme.as_str())
    }

    pub fn set_accent(&mut self, store: &mut dyn PreferenceStore, accent: Accent) -> Result<()> {
        self.accent = accent;
        store.set(ACCENT_KEY, accent.as_str())
    }
}

fn read_or_default<T>(store: &dyn PreferenceStore, key: &str) -> T
where
    T: FromStr<Err = String> + Default,
{
    match store.get(key) {
        Some(raw) => raw.parse().unwrap_or_else(|e| {
            log::warn!("ignoring stored {key}: {e}");
            T::default()
        }),
        None => T::default(),
    }
}

/// Open the on-disk store, or an in-memory one if the directory is unusable.
pub fn open_store(dir: Option<&Path>) -> Box<dyn PreferenceStore> {
    let Some(dir) = dir else {
        log::warn!("no config directory; preferences will not persist");
        return Box::new(MemoryStore::new());
    };
    match FileStore::open(dir) {
        Ok(store) => Box::new(store),
        Err(e) => {
            log::warn!("failed to open preferences in {}: {e}", dir.display());
            Box::new(MemoryStore::new())
        }
    }
}
