//! Seeded random source for a run
//!
//! All randomness in the simulation goes through one `GameRng`, so a run is
//! reproducible from its seed and input trace.

use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Seedable uniform and weighted sampling
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: Pcg32,
}

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Uniform float in `[lo, hi)`
    pub fn uniform(&mut self, lo: f32, hi: f32) -> f32 {
        if hi <= lo {
            return lo;
        }
        self.rng.random_range(lo..hi)
    }

    /// Uniform integer in `[lo, hi)`
    pub fn below(&mut self, lo: i64, hi: i64) -> i64 {
        if hi <= lo {
            return lo;
        }
        self.rng.random_range(lo..hi)
    }

    /// Uniform integer in `[lo, hi]`
    pub fn inclusive(&mut self, lo: u32, hi: u32) -> u32 {
        if hi <= lo {
            return lo;
        }
        self.rng.random_range(lo..=hi)
    }

    /// Pick one item with probability proportional to its weight
    ///
    /// Returns `None` for an empty table or all-zero weights.
    pub fn weighted<T: Copy>(&mut self, table: &[(T, u32)]) -> Option<T> {
        table
            .choose_weighted(&mut self.rng, |(_, weight)| *weight)
            .ok()
            .map(|(item, _)| *item)
    }

    /// Pick one item uniformly
    pub fn pick<T: Copy>(&mut self, items: &[T]) -> Option<T> {
        items.choose(&mut self.rng).copied()
    }

    /// Sample `min(count, items.len())` distinct items, without replacement
    pub fn sample<T: Clone>(&mut self, items: &[T], count: usize) -> Vec<T> {
        items.choose_multiple(&mut self.rng, count).cloned().collect()
    }
}
