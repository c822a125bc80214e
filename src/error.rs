//! Error taxonomy for the benchmark binaries.
//!
//! Only argument errors are recoverable enough to surface as values; an
//! invalid action discriminant or a zero divisor inside the hot loop is a
//! configuration bug and panics instead.

use std::num::ParseIntError;

use thiserror::Error;

/// Errors reported by the CLI entry points. Rendered as a single line on
/// stderr; any of these aborts the run with a non-zero exit code.
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("not enough arguments: expected <mechanism> <count>")]
    NotEnoughArguments,

    #[error("invalid mechanism selector: {0} (expected 0..=4)")]
    InvalidSelector(u64),

    #[error("invalid number '{arg}': {source}")]
    InvalidNumber {
        arg: String,
        #[source]
        source: ParseIntError,
    },
}
