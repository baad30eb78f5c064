//! Brute-force crack time estimation.

use std::collections::HashMap;

/// Guesses per second assumed for an offline attacker.
pub const ATTEMPTS_PER_SECOND: f64 = 1e12;

/// Shown in place of a time for an empty password.
pub const NOT_APPLICABLE: &str = "N/A";

const MINUTE: f64 = 60.0;
const HOUR: f64 = 60.0 * MINUTE;
const DAY: f64 = 24.0 * HOUR;
const YEAR: f64 = 365.25 * DAY;

const CACHE_CAPACITY: usize = 512;

/// Coarse time bands, ordered from fastest to slowest crack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Bucket {
    Instant,
    Seconds,
    Minutes,
    Hours,
    Days,
    Years,
    ThousandsOfYears,
    MillionsOfYears,
    Astronomical,
}

/// Expected seconds to find the password: half the keyspace at
/// [`ATTEMPTS_PER_SECOND`]. Computed in log space; very large keyspaces come
/// back as infinity.
pub fn expected_seconds(length: usize, alphabet_size: u32) -> f64 {
    if length == 0 || alphabet_size == 0 {
        return 0.0;
    }
    let log10 = length as f64 * f64::from(alphabet_size).log10()
        - (2.0 * ATTEMPTS_PER_SECOND).log10();
    10f64.powf(log10)
}

pub fn bucket(seconds: f64) -> Bucket {
    let years = seconds / YEAR;
    match seconds {
        s if s < 1.0 => Bucket::Instant,
        s if s < MINUTE => Bucket::Seconds,
        s if s < HOUR => Bucket::Minutes,
        s if s < DAY => Bucket::Hours,
        s if s < YEAR => Bucket::Days,
        _ if years < 1e3 => Bucket::Years,
        _ if years < 1e6 => Bucket::ThousandsOfYears,
        _ if years < 1e9 => Bucket::MillionsOfYears,
        _ => Bucket::Astronomical,
    }
}

/// Human-readable form of `seconds`.
pub fn format(seconds: f64) -> String {
    let count = |unit: f64| (seconds / unit).floor() as u64;
    match bucket(seconds) {
        Bucket::Instant => "Instantly".to_string(),
        Bucket::Seconds => plural(count(1.0), "second"),
        Bucket::Minutes => plural(count(MINUTE), "minute"),
        Bucket::Hours => plural(count(HOUR), "hour"),
        Bucket::Days => plural(count(DAY), "day"),
        Bucket::Years => plural(count(YEAR), "year"),
        Bucket::ThousandsOfYears => format!("{} thousand years", count(YEAR * 1e3)),
        Bucket::MillionsOfYears => format!("{} million years", count(YEAR * 1e6)),
        Bucket::Astronomical => "Astronomically large".to_string(),
    }
}

fn plural(n: u64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

/// Crack-time string for a password of `length` characters over an alphabet
/// of `alphabet_size` symbols.
pub fn estimate(length: usize, alphabet_size: u32) -> String {
    if length == 0 {
        return NOT_APPLICABLE.to_string();
    }
    format(expected_seconds(length, alphabet_size))
}

/// Memoizes [`estimate`]. Cleared wholesale once it outgrows its capacity.
#[derive(Debug)]
pub struct CrackTimeCache {
    entries: HashMap<(usize, u32), String>,
    capacity: usize,
}

impl CrackTimeCache {
    pub fn new() -> Self {
        Self::with_capacity(CACHE_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            capacity,
        }
    }

    pub fn get(&mut self, length: usize, alphabet_size: u32) -> String {
        if let Some(hit) = self.entries.get(&(length, alphabet_size)) {
            return hit.clone();
        }
        if self.entries.len() >= self.capacity {
            log::trace!("crack time cache full ({} entries), clearing", self.entries.len());
            self.entries.clear();
        }
        let value = estimate(length, alphabet_size);
        self.entries.insert((length, alphabet_size), value.clone());
        value
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Default for CrackTimeCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_not_applicable() {
        assert_eq!(estimate(0, 94), NOT_APPLICABLE);
    }

    #[test]
    fn short_passwords_fall_instantly() {
        assert_eq!(estimate(4, 26), "Instantly");
        assert_eq!(estimate(8, 10), "Instantly");
    }

    #[test]
    fn bucket_boundaries() {
        assert_eq!(format(1.0), "1 second");
        assert_eq!(format(59.9), "59 seconds");
        assert_eq!(format(60.0), "1 minute");
        assert_eq!(format(2.0 * HOUR), "2 hours");
        assert_eq!(format(3.0 * DAY), "3 days");
        assert_eq!(format(10.0 * YEAR), "10 years");
        assert_eq!(format(5e3 * YEAR), "5 thousand years");
        assert_eq!(format(7e6 * YEAR), "7 million years");
        assert_eq!(format(2e9 * YEAR), "Astronomically large");
        assert_eq!(format(f64::INFINITY), "Astronomically large");
    }

    #[test]
    fn huge_keyspace_does_not_overflow() {
        assert_eq!(estimate(128, 94), "Astronomically large");
        assert_eq!(estimate(1000, 94), "Astronomically large");
    }

    #[test]
    fn bucket_is_monotonic_in_keyspace() {
        for alphabet in [10, 26, 36, 52, 62, 94] {
            let mut last = Bucket::Instant;
            for length in 1..=64 {
                let b = bucket(expected_seconds(length, alphabet));
                assert!(b >= last, "length {length} alphabet {alphabet}");
                last = b;
            }
        }
        for length in 1..=32 {
            let mut last = Bucket::Instant;
            for alphabet in [10, 26, 36, 52, 62, 68, 94] {
                let b = bucket(expected_seconds(length, alphabet));
                assert!(b >= last);
                last = b;
            }
        }
    }

    #[test]
    fn cache_matches_uncached_and_clears_when_full() {
        let mut cache = CrackTimeCache::with_capacity(4);
        for length in 1..=4 {
            assert_eq!(cache.get(length, 62), estimate(length, 62));
        }
        assert_eq!(cache.len(), 4);
        assert_eq!(cache.get(2, 62), estimate(2, 62));
        assert_eq!(cache.len(), 4);
        assert_eq!(cache.get(20, 94), estimate(20, 94));
        assert_eq!(cache.len(), 1);
    }
}
