//! Benchmark binary for the pure-actions comparison.
//!
//! Usage:
//!   pure-actions <mechanism> <count>
//!
//! where `<mechanism>` is 0=enums, 1=function pointers, 2=trait objects,
//! 3=boxed closures, 4=sum types, and `<count>` is the number of array
//! elements to dispatch over.

use action_array_bench::{cli, pure_actions, BenchError};

fn main() {
    if let Err(error) = run() {
        eprintln!("{error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), BenchError> {
    let (mechanism, count) = cli::parse_args(std::env::args().skip(1))?;

    println!("Testing for {}...", mechanism.name());
    let timed = pure_actions::run(mechanism, count);
    println!("Completed in {}ns", timed.elapsed_nanos());

    Ok(())
}
