//! Runtime configuration shared by the CLI and the TUI.

use std::path::PathBuf;
use std::time::Duration;

use crate::pass::{ClassSet, clamp_length};

pub const DEFAULT_LENGTH: usize = 16;
const COPY_FEEDBACK: Duration = Duration::from_secs(2);

#[derive(Debug, Clone)]
pub struct Config {
    /// Initial password length, already clamped.
    pub length: usize,
    /// Initial character classes.
    pub classes: ClassSet,
    /// How long copy confirmation stays visible.
    pub copy_feedback: Duration,
    /// Where preferences and the TUI log live. `None` disables persistence.
    pub config_dir: Option<PathBuf>,
}

impl Config {
    pub fn new(length: usize, classes: ClassSet, config_dir: Option<PathBuf>) -> Self {
        Self {
            length: clamp_length(length),
            classes,
            copy_feedback: COPY_FEEDBACK,
            config_dir,
        }
    }

    /// `<platform config dir>/passforge`, e.g. `~/.config/passforge`.
    pub fn default_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("passforge"))
    }
}
