//! Argument parsing shared by the two benchmark binaries.
//!
//! Both take exactly two positional arguments: a mechanism selector and an
//! element count. Everything is validated before any benchmark output is
//! written, so a bad invocation produces nothing but the error line.

use std::num::ParseIntError;
use std::str::FromStr;

use crate::error::BenchError;
use crate::mechanism::Mechanism;

/// Parse `<mechanism> <count>` from an argument iterator (binary name already
/// stripped). Extra trailing arguments are ignored.
pub fn parse_args<I>(mut args: I) -> Result<(Mechanism, usize), BenchError>
where
    I: Iterator<Item = String>,
{
    let selector_arg = args.next().ok_or(BenchError::NotEnoughArguments)?;
    let count_arg = args.next().ok_or(BenchError::NotEnoughArguments)?;

    let selector: u64 = parse_number(&selector_arg)?;
    let mechanism =
        Mechanism::from_selector(selector).ok_or(BenchError::InvalidSelector(selector))?;
    let count: usize = parse_number(&count_arg)?;

    Ok((mechanism, count))
}

fn parse_number<T>(arg: &str) -> Result<T, BenchError>
where
    T: FromStr<Err = ParseIntError>,
{
    arg.parse().map_err(|source| BenchError::InvalidNumber {
        arg: arg.to_string(),
        source,
    })
}
