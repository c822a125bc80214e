//! Deterministic workload generation.
//!
//! Every benchmark input comes from a seeded uniform stream so that repeated
//! runs, and runs of different dispatch mechanisms, see bit-identical draws.
//! Each source owns an independent PRNG; two sources built with the same seed
//! produce the same sequence, mirroring how the benchmarks feed every
//! mechanism the same workload.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Fixed seed shared by both benchmark programs.
pub const WORKLOAD_SEED: u64 = 957_546;

/// Uniform `f32` draws from an inclusive range.
pub struct FloatSource {
    rng: StdRng,
    lo: f32,
    hi: f32,
}

impl FloatSource {
    pub fn new(seed: u64, lo: f32, hi: f32) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            lo,
            hi,
        }
    }

    pub fn sample(&mut self) -> f32 {
        self.rng.random_range(self.lo..=self.hi)
    }
}

/// Uniform `i32` draws from an inclusive range.
pub struct IntSource {
    rng: StdRng,
    lo: i32,
    hi: i32,
}

impl IntSource {
    pub fn new(seed: u64, lo: i32, hi: i32) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            lo,
            hi,
        }
    }

    pub fn sample(&mut self) -> i32 {
        self.rng.random_range(self.lo..=self.hi)
    }
}

/// Uniform index draws in `0..choices`, used to pick an action kind.
pub struct ChoiceSource {
    rng: StdRng,
    choices: usize,
}

impl ChoiceSource {
    pub fn new(seed: u64, choices: usize) -> Self {
        assert!(choices > 0, "choice source needs at least one choice");
        Self {
            rng: StdRng::seed_from_u64(seed),
            choices,
        }
    }

    pub fn sample(&mut self) -> usize {
        self.rng.random_range(0..self.choices)
    }
}
