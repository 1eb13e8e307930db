//! Random sources for analysis synthesis
//!
//! Every numeric field of a [`crate::CaseAnalysis`] is drawn through a
//! [`RandomProvider`], so callers can swap the thread RNG for a seeded
//! source.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Source of uniform integers
pub trait RandomProvider {
    /// Uniform integer in `[0, upper)`. Returns 0 when `upper` is 0.
    fn below(&mut self, upper: u32) -> u32;
}

impl<R: RandomProvider + ?Sized> RandomProvider for &mut R {
    fn below(&mut self, upper: u32) -> u32 {
        (**self).below(upper)
    }
}

/// Unseeded source backed by the thread-local RNG
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomProvider for ThreadRandom {
    fn below(&mut self, upper: u32) -> u32 {
        if upper == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..upper)
    }
}

/// Deterministic source for reproducible analyses
#[derive(Debug, Clone)]
pub struct SeededRandom {
    seed: u64,
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomProvider for SeededRandom {
    fn below(&mut self, upper: u32) -> u32 {
        if upper == 0 {
            return 0;
        }
        self.rng.gen_range(0..upper)
    }
}

/// Replays a fixed sequence of raw values, cycling when exhausted.
///
/// Each value is reduced modulo the requested bound, which makes it easy to
/// pin a draw to the bottom (`0`) or top (`u32::MAX`) of its band.
#[cfg(test)]
#[derive(Debug, Clone)]
pub(crate) struct ScriptedRandom {
    values: Vec<u32>,
    cursor: usize,
}

#[cfg(test)]
impl ScriptedRandom {
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, cursor: 0 }
    }

    /// Always yields the same raw value
    pub fn constant(value: u32) -> Self {
        Self::new(vec![value])
    }

    /// Number of draws served so far
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

#[cfg(test)]
impl RandomProvider for ScriptedRandom {
    fn below(&mut self, upper: u32) -> u32 {
        if upper == 0 || self.values.is_empty() {
            self.cursor += 1;
            return 0;
        }
        let raw = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        raw % upper
    }
}

/// Half-open integer band `[min, min + range)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Band {
    pub min: u32,
    pub range: u32,
}

impl Band {
    pub const fn new(min: u32, range: u32) -> Self {
        Self { min, range }
    }

    /// Exclusive upper bound
    pub const fn end(&self) -> u32 {
        self.min + self.range
    }

    pub fn contains(&self, value: u32) -> bool {
        value >= self.min && value < self.end()
    }

    pub fn draw<R: RandomProvider + ?Sized>(&self, rng: &mut R) -> u32 {
        self.min + rng.below(self.range)
    }
}

impl std::fmt::Display for Band {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.min, self.end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = SeededRandom::new(42);
        let mut b = SeededRandom::new(42);
        let xs: Vec<u32> = (0..32).map(|_| a.below(100)).collect();
        let ys: Vec<u32> = (0..32).map(|_| b.below(100)).collect();
        assert_eq!(xs, ys);
        assert_eq!(a.seed(), 42);
    }

    #[test]
    fn test_zero_upper_bound() {
        assert_eq!(ThreadRandom.below(0), 0);
        assert_eq!(SeededRandom::new(1).below(0), 0);
        assert_eq!(ScriptedRandom::constant(9).below(0), 0);
    }

    #[test]
    fn test_scripted_cycles_and_reduces() {
        let mut rng = ScriptedRandom::new(vec![3, 25]);
        assert_eq!(rng.below(10), 3);
        assert_eq!(rng.below(10), 5);
        assert_eq!(rng.below(10), 3);
        assert_eq!(rng.draws(), 3);
    }

    #[test]
    fn test_band_edges() {
        let band = Band::new(6, 24);
        assert_eq!(band.end(), 30);
        assert_eq!(band.draw(&mut ScriptedRandom::constant(0)), 6);
        assert_eq!(
            band.draw(&mut ScriptedRandom::constant(u32::MAX)),
            6 + (u32::MAX % 24)
        );
        assert_eq!(band.draw(&mut ScriptedRandom::constant(23)), 29);
        assert!(band.contains(6));
        assert!(band.contains(29));
        assert!(!band.contains(30));
        assert_eq!(band.to_string(), "[6, 30)");
    }

    #[test]
    fn test_thread_random_in_range() {
        let mut rng = ThreadRandom;
        for _ in 0..200 {
            assert!(rng.below(7) < 7);
        }
    }
}
