//! RNG module - the single random source of a generation run
//!
//! A small seeded generator so that the same seed always yields the same book.
//! It is owned by exactly one [`BookGenerator`](crate::BookGenerator) and is
//! never shared.
//!
//! Also provides [`entropy_seed`] for callers that do not care about
//! reproducibility.

use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hasher};
use std::time::{SystemTime, UNIX_EPOCH};

/// Simple 64-bit LCG RNG
/// Uses Knuth's MMIX constants and returns the high 32 bits of the state
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        // Scramble so that neighbouring seeds start far apart
        Self {
            state: splitmix64(seed),
        }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod 2^64
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.state >> 32) as u32
    }

    /// Generate random value in range [0, max)
    ///
    /// Draws that fall in the short final bucket of the u32 space are
    /// rejected so every value in range is equally likely.
    pub fn next_range(&mut self, max: u32) -> u32 {
        assert!(max > 0, "next_range called with an empty range");
        let threshold = max.wrapping_neg() % max;
        loop {
            let x = self.next_u32();
            if x >= threshold {
                return x % max;
            }
        }
    }

    /// Random index into a collection of `len` elements
    pub fn next_index(&mut self, len: usize) -> usize {
        self.next_range(len as u32) as usize
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_index(i + 1);
            slice.swap(i, j);
        }
    }

    /// `0..N` in a fresh random order
    pub fn shuffled_indices<const N: usize>(&mut self) -> [usize; N] {
        let mut out = [0usize; N];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = i;
        }
        self.shuffle(&mut out);
        out
    }

    /// Get the current RNG state (for logging and debugging)
    pub fn state(&self) -> u64 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

fn splitmix64(seed: u64) -> u64 {
    let mut z = seed.wrapping_add(0x9E3779B97F4A7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

/// A seed that differs between runs
///
/// Mixes the per-process random keys of `RandomState` with the wall clock.
pub fn entropy_seed() -> u64 {
    let mut hasher = RandomState::new().build_hasher();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    hasher.write_u64(nanos);
    hasher.finish()
}
