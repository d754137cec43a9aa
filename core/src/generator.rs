//! Random primitives built on top of the xoshiro128++ stream.
//!
//! Every helper here consumes the underlying stream in a fixed pattern.
//! Seeded output stays reproducible only as long as that pattern does.

use core::cmp::Ordering;

use crate::error::Error;
use crate::rng::{Xoshiro128pp, MAX};
use crate::sort::hybrid_sort_by;

/// Seeded placeholder-text generator.
///
/// Owns the PRNG state plus the last word emitted by a previous word batch,
/// which is used to avoid repeating a word across call boundaries. Not
/// meant to be shared between threads; clone it to fork a stream.
#[derive(Debug, Clone)]
pub struct TextGenerator {
    rng: Xoshiro128pp,
    pub(crate) last_word: &'static str,
}

impl TextGenerator {
    /// Create a generator from a seed, or from OS entropy if `None`.
    pub fn new(seed: Option<u32>) -> Self {
        let rng = match seed {
            Some(seed) => Xoshiro128pp::from_seed(seed),
            None => Xoshiro128pp::from_entropy(),
        };
        Self::from_rng(rng)
    }

    /// Create a generator around an existing PRNG.
    pub fn from_rng(rng: Xoshiro128pp) -> Self {
        Self { rng, last_word: "" }
    }

    /// The underlying PRNG. Cloning it snapshots the stream; pass the clone
    /// to [`from_rng`](Self::from_rng) to resume from that point.
    pub fn rng(&self) -> &Xoshiro128pp {
        &self.rng
    }

    /// Next unprocessed output of the PRNG, in `[0, 2^32)`.
    pub fn raw_int(&mut self) -> u32 {
        self.rng.next_u32()
    }

    /// Uniform number in `[0, 1]`, or `[0, 1)` when `inclusive` is false.
    pub fn factor(&mut self, inclusive: bool) -> f64 {
        let value = f64::from(self.raw_int());
        let divisor = f64::from(MAX) + if inclusive { 0.0 } else { 1.0 };
        value / divisor
    }

    /// Normally distributed number (Marsaglia polar method).
    ///
    /// Only one of the two values the method yields is used.
    pub fn gauss(&mut self, mean: f64, deviation: f64) -> f64 {
        let (x, s) = loop {
            let x = self.factor(true) * 2.0 - 1.0;
            let y = self.factor(true) * 2.0 - 1.0;
            let s = x * x + y * y;
            if s > 0.0 && s < 1.0 {
                break (x, s);
            }
        };

        let t = (-2.0 * s.ln() / s).sqrt();
        mean + x * t * deviation
    }

    /// Uniform integer in `[min, max]`.
    pub fn int(&mut self, min: i64, max: i64) -> Result<i64, Error> {
        if max < min {
            return Err(Error::InvalidRange { min, max });
        }

        let span = (i128::from(max) - i128::from(min) + 1) as f64;
        let offset = (self.factor(false) * span) as i128;
        // Only reachable through f64 rounding on spans wider than 2^53
        let offset = offset.min(i128::from(max) - i128::from(min));
        Ok((i128::from(min) + offset) as i64)
    }

    /// `true` with probability `1 - probability`.
    pub fn bool(&mut self, probability: f64) -> bool {
        self.factor(true) >= probability
    }

    /// Uniform index into a non-empty collection of `len` elements.
    fn index(&mut self, len: usize) -> Result<usize, Error> {
        if len == 0 {
            return Err(Error::EmptyCollection);
        }
        let idx = self.int(0, len as i64 - 1)?;
        Ok(idx as usize)
    }

    /// Uniform index into `items`.
    pub fn pick_index<T>(&mut self, items: &[T]) -> Result<usize, Error> {
        self.index(items.len())
    }

    /// Uniform element of `items`.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T, Error> {
        let idx = self.index(items.len())?;
        Ok(&items[idx])
    }

    /// Uniform key of a mapping, indexed in iteration order.
    pub fn pick_key<'a, K: 'a, V: 'a, I>(&mut self, entries: I) -> Result<&'a K, Error>
    where
        I: IntoIterator<Item = (&'a K, &'a V)>,
        I::IntoIter: ExactSizeIterator,
    {
        let mut entries = entries.into_iter();
        let idx = self.index(entries.len())?;
        entries.nth(idx).map(|(k, _)| k).ok_or(Error::EmptyCollection)
    }

    /// Uniform value of a mapping, indexed in iteration order.
    pub fn pick_value<'a, K: 'a, V: 'a, I>(&mut self, entries: I) -> Result<&'a V, Error>
    where
        I: IntoIterator<Item = (&'a K, &'a V)>,
        I::IntoIter: ExactSizeIterator,
    {
        let mut entries = entries.into_iter();
        let idx = self.index(entries.len())?;
        entries.nth(idx).map(|(_, v)| v).ok_or(Error::EmptyCollection)
    }

    /// Biased shuffle: a comparison sort whose comparator flips a coin.
    ///
    /// The resulting permutation is not uniform. Its distribution and the
    /// number of coin flips it consumes are fixed by the sort, and seeded
    /// text depends on both.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        hybrid_sort_by(items, &mut |_: &T, _: &T| {
            if self.bool(0.5) {
                Ordering::Less
            } else {
                Ordering::Greater
            }
        });
    }
}
