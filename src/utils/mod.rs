//! Shared benchmark plumbing: workload generation and the timed driver.

pub mod driver;
pub mod workload;

pub use driver::{run_timed, TimedRun};
pub use workload::{ChoiceSource, FloatSource, IntSource, WORKLOAD_SEED};
