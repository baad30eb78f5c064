//! Password generation.

use zeroize::{Zeroize, Zeroizing};

use super::charset::ClassSet;
use crate::rand::{RandomSource, uniform_index};

/// Shortest length callers should request.
pub const MIN_LENGTH: usize = 4;
/// Longest length callers should request.
pub const MAX_LENGTH: usize = 128;

/// A generated or user-entered password. Wiped from memory on drop.
pub type Password = Zeroizing<String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    pub length: usize,
    pub classes: ClassSet,
}

impl GenerationRequest {
    pub fn new(length: usize, classes: ClassSet) -> Self {
        Self { length, classes }
    }
}

/// Clamp a requested length into the supported range.
pub fn clamp_length(length: usize) -> usize {
    length.clamp(MIN_LENGTH, MAX_LENGTH)
}

/// Generate a single password.
///
/// Returns `None` when no character class is enabled. That is an expected
/// outcome: the caller asks the user to pick at least one class.
pub fn generate<R: RandomSource + ?Sized>(
    request: &GenerationRequest,
    rng: &mut R,
) -> Option<Password> {
    if request.classes.is_empty() {
        return None;
    }

    let chars = Zeroizing::new(request.classes.alphabet());
    let mut buf = Vec::with_capacity(request.length);
    generate_from_charset(&chars, request.length, &mut buf, rng);

    // Alphabets are ASCII, so the buffer is valid UTF-8.
    let password = String::from_utf8_lossy(&buf).into_owned();
    buf.zeroize();
    Some(Zeroizing::new(password))
}

/// Generate `count` passwords from the same request.
pub fn generate_batch<R: RandomSource + ?Sized>(
    request: &GenerationRequest,
    count: usize,
    rng: &mut R,
) -> Option<Vec<Password>> {
    if request.classes.is_empty() {
        return None;
    }
    (0..count).map(|_| generate(request, rng)).collect()
}

/// Fill `buf` with `length` characters drawn uniformly from `chars`.
/// Caller owns the buffer and wipes it between calls.
#[inline]
pub fn generate_from_charset<R: RandomSource + ?Sized>(
    chars: &[u8],
    length: usize,
    buf: &mut Vec<u8>,
    rng: &mut R,
) {
    buf.clear();
    buf.extend((0..length).map(|_| chars[uniform_index(rng, chars.len())]));
}
