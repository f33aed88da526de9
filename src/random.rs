//! Sources of random draws for the simulation.

use std::ops::Range;

use rand::prelude::*;
use rand_pcg::Pcg64;

/// Source of uniform integer draws used by a car.
pub trait RandomSource {
    /// Returns a value from the half-open `range`.
    fn gen_range(&mut self, range: Range<i32>) -> i32;
}

/// Pseudo-random source initialized with a user-defined seed.
///
/// Runs created with the same seed produce the same sequence of events.
pub struct SeededSource {
    rand: Pcg64,
}

impl SeededSource {
    /// Creates a source with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rand: Pcg64::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededSource {
    fn gen_range(&mut self, range: Range<i32>) -> i32 {
        self.rand.gen_range(range)
    }
}

/// Source replaying a fixed list of draws.
///
/// The script is repeated from the start once exhausted. Each value is clamped into the requested range, and an
/// empty script always returns the lower bound of the range.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    draws: Vec<i32>,
    pos: usize,
}

impl ScriptedSource {
    /// Creates a source replaying `draws`.
    pub fn new(draws: impl IntoIterator<Item = i32>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            pos: 0,
        }
    }

    /// Returns the number of draws made so far.
    pub fn draws_made(&self) -> usize {
        self.pos
    }
}

impl RandomSource for ScriptedSource {
    fn gen_range(&mut self, range: Range<i32>) -> i32 {
        let max = (range.end - 1).max(range.start);
        if self.draws.is_empty() {
            return range.start;
        }
        let value = self.draws[self.pos % self.draws.len()];
        self.pos += 1;
        value.clamp(range.start, max)
    }
}
