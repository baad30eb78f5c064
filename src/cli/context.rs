//! CLI context - bundles flags, configuration, preferences and clipboard.

use std::io::{self, Write};
use std::ops::ControlFlow;

use zeroize::Zeroizing;

use super::{CliFlags, prompts};
use crate::app::FALLBACK_CLASS;
use crate::clipboard::Clipboard;
use crate::config::Config;
use crate::error::Result;
use crate::pass::strength::MAX_SCORE;
use crate::pass::{self, Estimator, GenerationRequest, Password, StrengthAssessment};
use crate::rand::{OsRandom, RandomSource};
use crate::settings::{self, PreferenceStore, Preferences};

/// Application context for CLI mode.
pub struct Context {
    pub flags: CliFlags,
    config: Config,
    store: Box<dyn PreferenceStore>,
    clipboard: Clipboard,
    rng: Box<dyn RandomSource>,
}

impl Context {
    pub fn new(flags: CliFlags) -> Self {
        let config = super::config(&flags);
        let store = settings::open_store(config.config_dir.as_deref());
        Self::with_parts(flags, config, store, Clipboard::system(), Box::new(OsRandom))
    }

    pub(crate) fn with_parts(
        flags: CliFlags,
        config: Config,
        store: Box<dyn PreferenceStore>,
        clipboard: Clipboard,
        rng: Box<dyn RandomSource>,
    ) -> Self {
        Self {
            flags,
            config,
            store,
            clipboard,
            rng,
        }
    }

    /// Run the command the flags describe, writing results to `out`.
    pub fn run(&mut self, out: &mut dyn Write) -> Result<()> {
        prompts::set_quiet(self.flags.quiet);
        if self.handle_prefs(out)?.is_break() {
            return Ok(());
        }
        if self.handle_assess(out)?.is_break() {
            return Ok(());
        }
        self.generate_output(out)
    }

    fn handle_prefs(&mut self, out: &mut dyn Write) -> Result<ControlFlow<()>> {
        if !self.flags.touches_prefs() {
            return Ok(ControlFlow::Continue(()));
        }

        let mut prefs = Preferences::load(&*self.store);
        if let Some(theme) = self.flags.theme {
            prefs.set_theme(&mut *self.store, theme)?;
        }
        if let Some(accent) = self.flags.accent {
            prefs.set_accent(&mut *self.store, accent)?;
        }
        if self.flags.theme.is_some() || self.flags.accent.is_some() {
            log::debug!("saved preferences: {prefs:?}");
            prompts::preferences_saved();
        }
        if self.flags.prefs {
            writeln!(out, "theme:  {}", prefs.theme)?;
            writeln!(out, "accent: {}", prefs.accent)?;
        }
        Ok(ControlFlow::Break(()))
    }

    fn handle_assess(&mut self, out: &mut dyn Write) -> Result<ControlFlow<()>> {
        let Some(arg) = self.flags.assess.as_deref() else {
            return Ok(ControlFlow::Continue(()));
        };
        let password = if arg == "-" {
            read_password(&mut io::stdin().lock())?
        } else {
            Password::new(arg.to_string())
        };

        write_assessment(out, &pass::assess(&password))?;
        Ok(ControlFlow::Break(()))
    }

    /// Generate passwords and print or copy them.
    pub fn generate_output(&mut self, out: &mut dyn Write) -> Result<()> {
        let mut classes = self.config.classes;
        if classes.is_empty() {
            prompts::no_classes_selected(FALLBACK_CLASS);
            classes.insert(FALLBACK_CLASS);
        }
        let request = GenerationRequest::new(self.config.length, classes);
        let count = self.flags.number;
        log::debug!(
            "generating {count} password(s) of length {} from {} class(es)",
            request.length,
            classes.len()
        );

        let Some(passwords) = pass::generate_batch(&request, count, &mut *self.rng) else {
            log::error!("no character classes available");
            return Ok(());
        };
        let mut estimator = Estimator::new();

        if self.flags.clipboard {
            let joined = Zeroizing::new(
                passwords
                    .iter()
                    .map(|p| p.as_str())
                    .collect::<Vec<_>>()
                    .join("\n"),
            );
            let path = self.clipboard.copy(&joined)?;
            prompts::clipboard_copied(passwords.len(), path);
            if self.flags.strength {
                for password in &passwords {
                    writeln!(out, "{}", estimator.assess(password))?;
                }
            }
            return Ok(());
        }

        for password in &passwords {
            writeln!(out, "{}", password.as_str())?;
            if self.flags.strength {
                writeln!(out, "  {}", estimator.assess(password))?;
            }
        }
        Ok(())
    }
}

/// One line from `input`, without the trailing newline.
fn read_password(input: &mut impl io::BufRead) -> Result<Password> {
    let mut line = Password::default();
    input.read_line(&mut line)?;
    let len = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(len);
    Ok(line)
}

fn write_assessment(out: &mut dyn Write, assessment: &StrengthAssessment) -> io::Result<()> {
    let label = if assessment.label.is_empty() {
        "-"
    } else {
        assessment.label
    };
    writeln!(out, "Strength:   {label} ({}/{MAX_SCORE})", assessment.score)?;
    writeln!(out, "Entropy:    {:.1} bits", assessment.entropy_bits)?;
    writeln!(out, "Crack time: {}", assessment.crack_time)
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use tempfile::TempDir;

    use super::*;
    use crate::clipboard::testing::Recording;
    use crate::pass::{CharacterClass, ClassSet};
    use crate::rand::testing::Scripted;
    use crate::settings::{Accent, FileStore, MemoryStore, Theme};

    fn flags(args: &[&str]) -> CliFlags {
        CliFlags::try_parse_from(std::iter::once("passforge").chain(args.iter().copied()))
            .unwrap()
    }

    fn context(args: &[&str], clipboard: Recording) -> Context {
        let flags = flags(args);
        let config = Config::new(flags.length, flags.classes(), None);
        Context::with_parts(
            flags,
            config,
            Box::new(MemoryStore::new()),
            Clipboard::new(Box::new(clipboard), Box::new(Recording::failing())),
            Box::new(Scripted::new(vec![0, 7, 13, 42, 99, 1234])),
        )
    }

    fn run(ctx: &mut Context) -> String {
        let mut out = Vec::new();
        ctx.run(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn prints_requested_passwords() {
        let mut ctx = context(&["-l", "20", "-n", "3"], Recording::default());
        let out = run(&mut ctx);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.chars().count() == 20));
    }

    #[test]
    fn strength_follows_each_password() {
        let mut ctx = context(&["-n", "2", "-s"], Recording::default());
        let out = run(&mut ctx);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("  ") && lines[1].contains("bits"));
        assert!(lines[3].contains("crack time"));
    }

    #[test]
    fn empty_selection_falls_back_to_lowercase() {
        let args = ["--no-upper", "--no-lower", "--no-digits", "--no-symbols", "-q"];
        let mut ctx = context(&args, Recording::default());
        let out = run(&mut ctx);
        let password = out.trim_end();
        assert_eq!(password.len(), 16);
        assert!(password.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn excluded_classes_do_not_appear() {
        let mut ctx = context(&["--no-symbols", "--no-digits", "-l", "64"], Recording::default());
        let out = run(&mut ctx);
        assert!(out.trim_end().chars().all(|c| c.is_ascii_alphabetic()));
    }

    #[test]
    fn clipboard_receives_passwords_instead_of_stdout() {
        let clipboard = Recording::default();
        let writes = clipboard.writes.clone();
        let mut ctx = context(&["-b", "-n", "2", "-q"], clipboard);
        let out = run(&mut ctx);

        assert!(out.is_empty());
        let writes = writes.borrow();
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].lines().count(), 2);
    }

    #[test]
    fn clipboard_failure_is_an_error() {
        let mut ctx = context(&["-b"], Recording::failing());
        let mut out = Vec::new();
        assert!(ctx.run(&mut out).is_err());
    }

    #[test]
    fn assess_prints_three_lines() {
        let mut ctx = context(&["-a", "Tr0ub4dor&3xyzw"], Recording::default());
        let out = run(&mut ctx);
        assert_eq!(
            out.lines().next(),
            Some("Strength:   Very Strong (7/8)")
        );
        assert!(out.contains("Entropy:"));
        assert!(out.contains("Crack time:"));
    }

    #[test]
    fn assess_empty_password() {
        let mut ctx = context(&["-a", ""], Recording::default());
        let out = run(&mut ctx);
        assert!(out.starts_with("Strength:   - (0/8)"));
        assert!(out.contains("Crack time: N/A"));
    }

    #[test]
    fn read_password_strips_line_ending() {
        let mut input = io::Cursor::new(b"secret pass\r\nnext".to_vec());
        assert_eq!(read_password(&mut input).unwrap().as_str(), "secret pass");

        let mut empty = io::Cursor::new(Vec::new());
        assert_eq!(read_password(&mut empty).unwrap().as_str(), "");
    }

    #[test]
    fn preferences_persist_and_show() {
        let dir = TempDir::new().unwrap();
        let store = || Box::new(FileStore::open(dir.path()).unwrap());

        let set = flags(&["--theme", "light", "--accent", "blue", "-q"]);
        let config = Config::new(16, ClassSet::all(), Some(dir.path().to_path_buf()));
        let mut ctx = Context::with_parts(
            set,
            config.clone(),
            store(),
            Clipboard::new(Box::new(Recording::default()), Box::new(Recording::default())),
            Box::new(Scripted::new(vec![0])),
        );
        assert_eq!(run(&mut ctx), "");

        let reopened = Preferences::load(&*store());
        assert_eq!(reopened.theme, Theme::Light);
        assert_eq!(reopened.accent, Accent::Blue);

        let mut show = Context::with_parts(
            flags(&["--prefs"]),
            config,
            store(),
            Clipboard::new(Box::new(Recording::default()), Box::new(Recording::default())),
            Box::new(Scripted::new(vec![0])),
        );
        assert_eq!(run(&mut show), "theme:  light\naccent: blue\n");
    }

    #[test]
    fn config_carries_flags() {
        let flags = flags(&["-l", "30", "--no-symbols", "--config-dir", "/tmp/pf"]);
        let config = crate::cli::config(&flags);
        assert_eq!(config.length, 30);
        assert!(!config.classes.contains(CharacterClass::Symbol));
        assert_eq!(config.config_dir.as_deref(), Some(std::path::Path::new("/tmp/pf")));
    }
}
