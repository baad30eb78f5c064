use std::env;
use std::process::ExitCode;

use clap::Parser;

mod app;
mod cli;
mod clipboard;
mod config;
mod error;
mod exits;
mod logging;
mod pass;
mod rand;
mod settings;
mod terminal;
mod tui;

use cli::CliFlags;

fn main() -> ExitCode {
    exits::install_handlers();
    exits::disable_core_dumps();

    let interactive = env::args_os().len() == 1;
    let flags = CliFlags::parse();

    let result = if interactive {
        let config = cli::config(&flags);
        logging::init(flags.verbose, logging::Sink::File(config.config_dir.as_deref()));
        tui::run(&config)
    } else {
        logging::init(flags.verbose, logging::Sink::Stderr);
        cli::run(flags)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            cli::error(&format!("Error: {e}"));
            ExitCode::FAILURE
        }
    }
}
