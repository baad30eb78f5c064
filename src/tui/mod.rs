//! Interactive terminal UI.

mod input;
mod surface;
mod text;
mod theme;

pub use surface::TerminalUi;

use crate::app::App;
use crate::clipboard::Clipboard;
use crate::config::Config;
use crate::error::Result;
use crate::rand::{OsRandom, source_name};
use crate::settings;

/// Run TUI interactive mode until the user quits.
pub fn run(config: &Config) -> Result<()> {
    let store = settings::open_store(config.config_dir.as_deref());
    let ui = TerminalUi::new()?;
    log::info!("starting interactive session, entropy from {}", source_name());

    let app = App::init(ui, store, Clipboard::system(), OsRandom, config);
    drop(app.run());

    log::info!("interactive session ended");
    Ok(())
}
