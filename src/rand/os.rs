//! Operating-system entropy.

use rand::RngCore;
use rand::rngs::OsRng;

use super::RandomSource;

/// Reads from the operating system CSPRNG (`getrandom`) on every draw.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        OsRng.next_u32()
    }
}

/// Name of the entropy source, for display.
pub fn source_name() -> &'static str {
    "OS CSPRNG (getrandom)"
}
