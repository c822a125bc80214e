//! Benchmark binary for the actions-with-data comparison.
//!
//! Usage:
//!   actions-with-data <mechanism> <count>
//!
//! where `<mechanism>` is 0=enums, 1=function pointers, 2=trait objects,
//! 3=boxed closures, 4=sum types, and `<count>` is the number of array
//! elements to dispatch over.

use action_array_bench::{actions_with_data, cli, BenchError};

fn main() {
    if let Err(error) = run() {
        eprintln!("{error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), BenchError> {
    let (mechanism, count) = cli::parse_args(std::env::args().skip(1))?;

    println!("Testing for {}...", mechanism.name());
    let timed = actions_with_data::run(mechanism, count);
    println!("Completed in {}ns", timed.elapsed_nanos());

    Ok(())
}
