//! env_logger setup.
//!
//! `RUST_LOG` always wins. Otherwise the level is `warn`, raised to `debug`
//! by `--verbose`. The TUI owns the screen, so its log goes to a file.

use std::fs::OpenOptions;
use std::path::Path;

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

const LOG_FILE: &str = "passforge.log";

pub enum Sink<'a> {
    Stderr,
    /// Append to `passforge.log` in this directory; silent if unavailable.
    File(Option<&'a Path>),
}

pub fn init(verbose: bool, sink: Sink<'_>) {
    let default = if verbose { "debug" } else { "warn" };
    let mut builder = Builder::from_env(Env::default().default_filter_or(default));

    match sink {
        Sink::Stderr => {
            builder.target(Target::Stderr);
        }
        Sink::File(dir) => {
            let file = dir.and_then(|dir| {
                std::fs::create_dir_all(dir).ok()?;
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(dir.join(LOG_FILE))
                    .ok()
            });
            match file {
                Some(file) => {
                    builder.target(Target::Pipe(Box::new(file)));
                }
                None => {
                    builder.filter_level(LevelFilter::Off);
                }
            }
        }
    }

    // A second init (tests, embedding) is harmless.
    let _ = builder.try_init();
}
