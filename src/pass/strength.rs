//! Password strength scoring.
//!
//! Scores are integers in `0..=8`. The score drives a fixed table of labels,
//! bar widths and colors; the crack-time estimate is computed separately from
//! the detected alphabet and length.

use std::fmt;

use super::crack_time::{self, CrackTimeCache};

/// Highest possible score.
pub const MAX_SCORE: u8 = 8;

/// Single-class passwords up to this length are always scored 1.
const SINGLE_CLASS_WEAK_LENGTH: usize = 12;

/// Length thresholds that each add one point.
const LENGTH_STEPS: [usize; 4] = [8, 12, 16, 20];

/// Lowercased substrings that cost two points when present.
const DENYLIST: &[&str] = &[
    "password", "passw0rd", "123456", "qwerty", "abc123", "111111", "letmein", "admin",
    "welcome", "iloveyou", "monkey", "dragon", "football", "abcdef", "123123",
];

const DENYLIST_PENALTY: i32 = 2;
const MAX_RUN_PENALTY: i32 = 2;

// Per-class alphabet sizes used for the crack-time keyspace.
const LOWER_SPACE: u32 = 26;
const UPPER_SPACE: u32 = 26;
const DIGIT_SPACE: u32 = 10;
const SYMBOL_SPACE: u32 = 32;

/// Which character classes a password draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Composition {
    pub has_lower: bool,
    pub has_upper: bool,
    pub has_digit: bool,
    pub has_symbol: bool,
}

impl Composition {
    /// Anything that is not an ASCII letter or digit counts as a symbol.
    pub fn of(password: &str) -> Self {
        let mut comp = Composition::default();
        for c in password.chars() {
            if c.is_ascii_lowercase() {
                comp.has_lower = true;
            } else if c.is_ascii_uppercase() {
                comp.has_upper = true;
            } else if c.is_ascii_digit() {
                comp.has_digit = true;
            } else {
                comp.has_symbol = true;
            }
        }
        comp
    }

    pub fn type_count(&self) -> usize {
        [self.has_lower, self.has_upper, self.has_digit, self.has_symbol]
            .iter()
            .filter(|b| **b)
            .count()
    }

    /// Estimated alphabet an attacker has to search.
    pub fn alphabet_size(&self) -> u32 {
        let mut size = 0;
        if self.has_lower {
            size += LOWER_SPACE;
        }
        if self.has_upper {
            size += UPPER_SPACE;
        }
        if self.has_digit {
            size += DIGIT_SPACE;
        }
        if self.has_symbol {
            size += SYMBOL_SPACE;
        }
        size
    }
}

/// Qualitative color for the strength bar, red through violet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthColor {
    None,
    Red,
    Orange,
    Amber,
    Lime,
    Green,
    Blue,
    Violet,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StrengthAssessment {
    pub score: u8,
    pub label: &'static str,
    pub width_percent: u8,
    pub color: StrengthColor,
    pub crack_time: String,
    pub entropy_bits: f64,
}

impl StrengthAssessment {
    fn empty() -> Self {
        Self {
            score: 0,
            label: "",
            width_percent: 0,
            color: StrengthColor::None,
            crack_time: crack_time::NOT_APPLICABLE.to_string(),
            entropy_bits: 0.0,
        }
    }
}

impl fmt::Display for StrengthAssessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}/{}) • {:.1} bits • crack time: {}",
            self.label, self.score, MAX_SCORE, self.entropy_bits, self.crack_time
        )
    }
}

/// Label, bar width and color for a clamped score.
pub fn tier(score: u8) -> (&'static str, u8, StrengthColor) {
    match score {
        0 => ("Very Weak", 5, StrengthColor::Red),
        1 => ("Very Weak", 12, StrengthColor::Red),
        2 => ("Weak", 25, StrengthColor::Orange),
        3 => ("Weak", 37, StrengthColor::Orange),
        4 => ("Fair", 50, StrengthColor::Amber),
        5 => ("Good", 62, StrengthColor::Lime),
        6 => ("Strong", 75, StrengthColor::Green),
        7 => ("Very Strong", 88, StrengthColor::Blue),
        _ => ("Excellent", 100, StrengthColor::Violet),
    }
}

/// Password entropy in bits.
pub fn entropy_bits(length: usize, alphabet_size: u32) -> f64 {
    if alphabet_size == 0 {
        return 0.0;
    }
    length as f64 * f64::from(alphabet_size).log2()
}

/// Discrete score for a non-empty password.
pub fn score(password: &str) -> u8 {
    let comp = Composition::of(password);
    let length = password.chars().count();
    let types = comp.type_count();

    if types == 1 && length <= SINGLE_CLASS_WEAK_LENGTH {
        return 1;
    }

    let mut score = LENGTH_STEPS.iter().filter(|step| length >= **step).count() as i32;
    score += types as i32;
    score -= repeated_runs(password).min(MAX_RUN_PENALTY as usize) as i32;
    if contains_common_sequence(password) {
        score -= DENYLIST_PENALTY;
    }
    if length >= 12 && types >= 3 {
        score += 1;
    }
    if length >= 16 && types == 4 {
        score += 1;
    }

    score.clamp(0, i32::from(MAX_SCORE)) as u8
}

/// Number of runs of three or more identical consecutive characters.
fn repeated_runs(password: &str) -> usize {
    let mut runs = 0;
    let mut prev = None;
    let mut len = 0;
    for c in password.chars() {
        if Some(c) == prev {
            len += 1;
            if len == 3 {
                runs += 1;
            }
        } else {
            prev = Some(c);
            len = 1;
        }
    }
    runs
}

fn contains_common_sequence(password: &str) -> bool {
    let lower = password.to_lowercase();
    DENYLIST.iter().any(|entry| lower.contains(entry))
}

/// Assess a password without memoization.
pub fn assess(password: &str) -> StrengthAssessment {
    assess_with(password, crack_time::estimate)
}

fn assess_with(
    password: &str,
    crack: impl FnOnce(usize, u32) -> String,
) -> StrengthAssessment {
    if password.is_empty() {
        return StrengthAssessment::empty();
    }

    let comp = Composition::of(password);
    let length = password.chars().count();
    let alphabet = comp.alphabet_size();
    let score = score(password);
    let (label, width_percent, color) = tier(score);

    StrengthAssessment {
        score,
        label,
        width_percent,
        color,
        crack_time: crack(length, alphabet),
        entropy_bits: entropy_bits(length, alphabet),
    }
}

/// Strength estimator with a bounded crack-time cache.
#[derive(Debug, Default)]
pub struct Estimator {
    cache: CrackTimeCache,
}

impl Estimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assess(&mut self, password: &str) -> StrengthAssessment {
        let cache = &mut self.cache;
        assess_with(password, |length, alphabet| cache.get(length, alphabet))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::{ClassSet, GenerationRequest, generate};
    use crate::rand::OsRandom;

    #[test]
    fn empty_password() {
        let a = assess("");
        assert_eq!(a.score, 0);
        assert_eq!(a.label, "");
        assert_eq!(a.width_percent, 0);
        assert_eq!(a.crack_time, crack_time::NOT_APPLICABLE);
    }

    #[test]
    fn short_single_class_is_forced_to_one() {
        let a = assess("aaaaaaaaaaaa");
        assert_eq!(a.score, 1);
        assert_eq!(a.label, "Very Weak");

        for pw in ["abcdefghijkl", "ABCDEFGH", "123456789012", "!@#$%^&*()_+", "x"] {
            assert_eq!(score(pw), 1, "{pw}");
        }
    }

    #[test]
    fn long_single_class_uses_general_path() {
        // 13 chars: +2 length, +1 type, -1 for the run.
        assert_eq!(score("aaaaaaaaaaaaa"), 2);
        assert_eq!(score("correcthorsebatterystaple"), 5);
    }

    #[test]
    fn four_class_password_scores_near_top() {
        let a = assess("Tr0ub4dor&3xyzw");
        assert_eq!(a.score, 7);
        assert_eq!(a.label, "Very Strong");
        assert_eq!(a.color, StrengthColor::Blue);
    }

    #[test]
    fn long_diverse_password_clamps_to_max() {
        let a = assess("Tr0ub4dor&3xyzw!Q9#kLm");
        assert_eq!(a.score, MAX_SCORE);
        assert_eq!(a.label, "Excellent");
        assert_eq!(a.width_percent, 100);
    }

    #[test]
    fn denylist_is_case_insensitive() {
        assert_eq!(score("Xy7!Zq2@Wv9#"), score("PassWord7!#@") + DENYLIST_PENALTY as u8);
        assert!(contains_common_sequence("myQWERTYkeys"));
        assert!(!contains_common_sequence("Tr0ub4dor&3"));
    }

    #[test]
    fn repeated_runs_are_counted_once_each() {
        assert_eq!(repeated_runs("aab"), 0);
        assert_eq!(repeated_runs("aaab"), 1);
        assert_eq!(repeated_runs("aaaaaa"), 1);
        assert_eq!(repeated_runs("aaabbbccc"), 3);
    }

    #[test]
    fn run_penalty_is_capped() {
        // 16 chars, lower+upper+digit: +3 length, +3 types, +1 bonus, -2 capped runs.
        assert_eq!(score("aaaBBB111cccDDxy"), 5);
    }

    #[test]
    fn score_never_leaves_range() {
        for pw in ["password", "passwordpassword123456", "aaaaaaaaaaaaaaaaaaaaaaaa"] {
            assert!(score(pw) <= MAX_SCORE);
        }
    }

    #[test]
    fn generated_passwords_keep_length_in_assessment() {
        let pw = generate(&GenerationRequest::new(20, ClassSet::all()), &mut OsRandom).unwrap();
        let a = assess(&pw);
        assert!(a.score >= 1);
        assert!(a.entropy_bits > 0.0);
    }

    #[test]
    fn widths_increase_with_score() {
        let widths: Vec<u8> = (0..=MAX_SCORE).map(|s| tier(s).1).collect();
        assert!(widths.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn estimator_cache_does_not_change_output() {
        let mut estimator = Estimator::new();
        for pw in ["", "abc", "Tr0ub4dor&3xyzw", "Tr0ub4dor&3xyzw", "zzzzzzzzzzzzzzzzzzzzz"] {
            assert_eq!(estimator.assess(pw), assess(pw));
        }
    }

    #[test]
    fn non_ascii_counts_as_symbol() {
        let comp = Composition::of("contraseña");
        assert!(comp.has_lower && comp.has_symbol);
        assert_eq!(comp.alphabet_size(), LOWER_SPACE + SYMBOL_SPACE);
    }
}
