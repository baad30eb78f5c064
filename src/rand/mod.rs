//! Cryptographically secure random numbers for password generation.

mod os;

pub use os::{OsRandom, source_name};

/// Source of uniform 32-bit integers.
///
/// Production code uses [`OsRandom`]; tests plug in scripted sources.
pub trait RandomSource {
    fn next_u32(&mut self) -> u32;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

/// Uniform index in `0..bound` without modulo bias.
///
/// Draws are rejected when they fall in the tail of the `u32` range that does
/// not divide evenly by `bound`, so each draw is rejected with probability
/// below `bound / 2^32`.
///
/// # Panics
///
/// Panics if `bound` is zero.
pub fn uniform_index<R: RandomSource + ?Sized>(rng: &mut R, bound: usize) -> usize {
    assert!(bound > 0, "uniform_index called with empty range");
    let bound = bound as u32;
    // Largest multiple of `bound` that fits in u32's range, expressed as a cutoff.
    let zone = u32::MAX - (u32::MAX - bound + 1) % bound;
    loop {
        let v = rng.next_u32();
        if v <= zone {
            return (v % bound) as usize;
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::RandomSource;

    /// Replays a fixed list of values, cycling when exhausted.
    pub struct Scripted {
        values: Vec<u32>,
        pos: usize,
    }

    impl Scripted {
        pub fn new(values: Vec<u32>) -> Self {
            Self { values, pos: 0 }
        }
    }

    impl RandomSource for Scripted {
        fn next_u32(&mut self) -> u32 {
            let v = self.values[self.pos % self.values.len()];
            self.pos += 1;
            v
        }
    }
}
