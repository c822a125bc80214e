//! Timed driver: one sequential pass of `apply` over aligned input and action
//! arrays.
//!
//! The measurement window contains the dispatch loop only. The result vector
//! is allocated before the clock starts, and action teardown (dropping boxed
//! payloads, trait objects, closures) happens after the caller is done with
//! the run, so neither allocation nor release is timed.

use std::hint::black_box;
use std::time::{Duration, Instant};

/// Result of one timed pass.
pub struct TimedRun<O> {
    /// `results[i]` is the transformation of `inputs[i]` by `actions[i]`.
    pub results: Vec<O>,
    /// Wall time of the dispatch loop, from a monotonic clock.
    pub elapsed: Duration,
}

impl<O> TimedRun<O> {
    /// Elapsed time as integer nanoseconds, the unit reported by the CLI.
    pub fn elapsed_nanos(&self) -> u128 {
        self.elapsed.as_nanos()
    }
}

/// Apply `apply(inputs[i], &actions[i])` for `i` in strictly increasing order
/// and time the loop.
pub fn run_timed<I, A, O, F>(inputs: &[I], actions: &[A], mut apply: F) -> TimedRun<O>
where
    I: Copy,
    O: Default + Clone,
    F: FnMut(I, &A) -> O,
{
    assert_eq!(
        inputs.len(),
        actions.len(),
        "inputs and actions must be aligned"
    );

    let mut results = vec![O::default(); inputs.len()];

    let start = Instant::now();
    for index in 0..inputs.len() {
        results[index] = black_box(apply(inputs[index], &actions[index]));
    }
    let elapsed = start.elapsed();

    TimedRun { results, elapsed }
}
