//! xoshiro128++ pseudo-random number generator
//!
//! This generator must exactly match the reference xoshiro128++ by Blackman
//! and Vigna so that text generated from a seed is identical across
//! implementations. All arithmetic is modulo 2^32.
//!
//! Reference: https://prng.di.unimi.it/xoshiro128plusplus.c

use crate::error::Error;

/// Largest value returned by [`Xoshiro128pp::next_u32`].
pub const MAX: u32 = u32::MAX;

/// xoshiro128++ generator with four 32-bit state words.
///
/// The state is never all-zero: zero is a fixed point of the transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xoshiro128pp {
    state: [u32; 4],
}

impl Xoshiro128pp {
    /// Create a generator from raw state words.
    ///
    /// Returns [`Error::InvalidState`] if all four words are zero.
    pub fn new(state: [u32; 4]) -> Result<Self, Error> {
        if state == [0; 4] {
            return Err(Error::InvalidState);
        }
        Ok(Self { state })
    }

    /// Create a generator whose state is derived from an MT19937 stream.
    ///
    /// Matches the reference seeding path: the seed feeds MT19937 and the
    /// first four outputs become `(s0, s1, s2, s3)`.
    pub fn from_seed(seed: u32) -> Self {
        let mut mt = crate::seed::Mt19937::new(seed);
        loop {
            let state = [mt.next_u32(), mt.next_u32(), mt.next_u32(), mt.next_u32()];
            if let Ok(rng) = Self::new(state) {
                return rng;
            }
        }
    }

    /// Create a generator seeded from OS entropy.
    #[cfg(feature = "std")]
    pub fn from_entropy() -> Self {
        Self::from_seed(crate::seed::entropy_seed())
    }

    /// Current state words, e.g. to snapshot and later resume a stream.
    pub fn state(&self) -> [u32; 4] {
        self.state
    }

    /// Advance the state and return the next output in `[0, MAX]`.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        let s = &mut self.state;
        let result = s[0].wrapping_add(s[3]).rotate_left(7).wrapping_add(s[0]);

        let t = s[1] << 9;

        s[2] ^= s[0];
        s[3] ^= s[1];
        s[1] ^= s[2];
        s[0] ^= s[3];

        s[2] ^= t;

        s[3] = s[3].rotate_left(11);

        result
    }
}
