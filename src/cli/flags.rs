use std::path::PathBuf;

use clap::Parser;

use crate::config::DEFAULT_LENGTH;
use crate::pass::{CharacterClass, ClassSet, MAX_LENGTH, MIN_LENGTH};
use crate::settings::{Accent, Theme};

/// Generate strong random passwords and estimate how hard they are to crack.
///
/// Run without arguments for the interactive terminal UI.
#[derive(Debug, Parser)]
#[command(name = "passforge", version, about, long_about = None)]
pub struct CliFlags {
    /// Password length
    #[arg(
        short,
        long,
        env = "PASSFORGE_LENGTH",
        default_value_t = DEFAULT_LENGTH,
        value_parser = parse_length,
    )]
    pub length: usize,

    /// Number of passwords to generate
    #[arg(short, long, default_value_t = 1, value_parser = parse_count)]
    pub number: usize,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_upper: bool,

    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lower: bool,

    /// Leave out digits
    #[arg(long)]
    pub no_digits: bool,

    /// Leave out symbols
    #[arg(long)]
    pub no_symbols: bool,

    /// Copy to the clipboard instead of printing
    #[arg(short = 'b', long = "board")]
    pub clipboard: bool,

    /// Print a strength assessment after each password
    #[arg(short, long)]
    pub strength: bool,

    /// Assess an existing password instead of generating ("-" reads stdin)
    #[arg(short, long, value_name = "PASSWORD")]
    pub assess: Option<String>,

    /// Save the preferred UI theme
    #[arg(long, value_name = "light|dark")]
    pub theme: Option<Theme>,

    /// Save the preferred UI accent color
    #[arg(long, value_name = "COLOR")]
    pub accent: Option<Accent>,

    /// Show saved preferences
    #[arg(long)]
    pub prefs: bool,

    /// Directory for preferences and the UI log
    #[arg(long, env = "PASSFORGE_CONFIG_DIR", value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Suppress warnings and confirmations
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliFlags {
    /// Classes left after the `--no-*` flags. May be empty.
    pub fn classes(&self) -> ClassSet {
        let excluded = [
            (CharacterClass::Uppercase, self.no_upper),
            (CharacterClass::Lowercase, self.no_lower),
            (CharacterClass::Digit, self.no_digits),
            (CharacterClass::Symbol, self.no_symbols),
        ];
        excluded
            .into_iter()
            .filter(|&(_, off)| !off)
            .map(|(class, _)| class)
            .collect()
    }

    /// True when a preference command was given; those run instead of
    /// generation.
    pub fn touches_prefs(&self) -> bool {
        self.prefs || self.theme.is_some() || self.accent.is_some()
    }
}

fn parse_length(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|_| format!("`{s}` is not a number"))?;
    if (MIN_LENGTH..=MAX_LENGTH).contains(&n) {
        Ok(n)
    } else {
        Err(format!("length must be between {MIN_LENGTH} and {MAX_LENGTH}"))
    }
}

fn parse_count(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("count must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("`{s}` is not a number")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliFlags, clap::Error> {
        CliFlags::try_parse_from(std::iter::once("passforge").chain(args.iter().copied()))
    }

    #[test]
    fn defaults() {
        let flags = parse(&[]).unwrap();
        assert_eq!(flags.number, 1);
        assert_eq!(flags.classes(), ClassSet::all());
        assert!(!flags.clipboard);
        assert!(!flags.touches_prefs());
    }

    #[test]
    fn short_flags() {
        let flags = parse(&["-l", "24", "-n", "3", "-b", "-s", "-q"]).unwrap();
        assert_eq!(flags.length, 24);
        assert_eq!(flags.number, 3);
        assert!(flags.clipboard && flags.strength && flags.quiet);
    }

    #[test]
    fn length_out_of_range_is_rejected() {
        assert!(parse(&["-l", "3"]).is_err());
        assert!(parse(&["-l", "129"]).is_err());
        assert!(parse(&["-l", "abc"]).is_err());
        assert_eq!(parse(&["-l", "128"]).unwrap().length, 128);
    }

    #[test]
    fn zero_count_is_rejected() {
        assert!(parse(&["-n", "0"]).is_err());
    }

    #[test]
    fn class_exclusions() {
        let flags = parse(&["--no-symbols", "--no-upper"]).unwrap();
        let classes = flags.classes();
        assert!(classes.contains(CharacterClass::Lowercase));
        assert!(classes.contains(CharacterClass::Digit));
        assert!(!classes.contains(CharacterClass::Symbol));
        assert!(!classes.contains(CharacterClass::Uppercase));

        let none = parse(&["--no-upper", "--no-lower", "--no-digits", "--no-symbols"]).unwrap();
        assert!(none.classes().is_empty());
    }

    #[test]
    fn preference_values() {
        let flags = parse(&["--theme", "light", "--accent", "green"]).unwrap();
        assert_eq!(flags.theme, Some(Theme::Light));
        assert_eq!(flags.accent, Some(Accent::Green));
        assert!(flags.touches_prefs());

        assert!(parse(&["--theme", "sepia"]).is_err());
    }

    #[test]
    fn assess_takes_a_value() {
        let flags = parse(&["-a", "hunter2"]).unwrap();
        assert_eq!(flags.assess.as_deref(), Some("hunter2"));
    }
}
