mod context;
mod flags;
mod prompts;

pub use context::Context;
pub use flags::CliFlags;
pub use prompts::error;

use std::io;

use crate::config::Config;
use crate::error::Result;

/// Configuration for either mode, from parsed flags.
pub fn config(flags: &CliFlags) -> Config {
    let dir = flags.config_dir.clone().or_else(Config::default_dir);
    Config::new(flags.length, flags.classes(), dir)
}

/// Run one CLI command to completion.
pub fn run(flags: CliFlags) -> Result<()> {
    let mut ctx = Context::new(flags);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    ctx.run(&mut out)
}
