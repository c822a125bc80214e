//! # Array of pure actions
//!
//! Benchmarks five representations of a payload-free action over integer
//! operand pairs: Multiply is `lhs * rhs`, Divide is truncating `lhs / rhs`.
//! Operands are drawn from `[1, 10_000]`, so a zero divisor never occurs in
//! a generated workload; if one is ever applied, the checked integer division
//! panics rather than producing a poisoned result.

pub mod code;

#[cfg(test)]
pub mod test;

use crate::mechanism::Mechanism;
use crate::utils::driver::{run_timed, TimedRun};
use crate::utils::workload::{ChoiceSource, IntSource, WORKLOAD_SEED};

/// Inclusive range for generated operands. The lower bound of 1 keeps
/// divisors non-zero.
pub const OPERAND_RANGE: (i32, i32) = (1, 10_000);

/// One input element: the two operands an action combines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Operands {
    pub lhs: i32,
    pub rhs: i32,
}

/// The closed set of operation kinds, independent of representation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpKind {
    Multiply,
    Divide,
}

impl OpKind {
    pub const COUNT: usize = 2;

    pub fn from_index(index: usize) -> OpKind {
        match index {
            0 => OpKind::Multiply,
            1 => OpKind::Divide,
            _ => panic!("generated an invalid operation index: {index}"),
        }
    }
}

/// Generate the operand array and operation script for a run of `count`
/// elements. All left operands are drawn first, then all right operands,
/// from one value stream; kinds come from an independently seeded choice
/// stream.
pub fn generate_workload(count: usize) -> (Vec<Operands>, Vec<OpKind>) {
    let (lo, hi) = OPERAND_RANGE;
    let mut values = IntSource::new(WORKLOAD_SEED, lo, hi);

    let lhs: Vec<i32> = (0..count).map(|_| values.sample()).collect();
    let rhs: Vec<i32> = (0..count).map(|_| values.sample()).collect();
    let operands = lhs
        .into_iter()
        .zip(rhs)
        .map(|(lhs, rhs)| Operands { lhs, rhs })
        .collect();

    let mut kinds = ChoiceSource::new(WORKLOAD_SEED, OpKind::COUNT);
    let script = (0..count).map(|_| OpKind::from_index(kinds.sample())).collect();

    (operands, script)
}

/// Generate the workload, encode it for `mechanism` and run one timed pass.
pub fn run(mechanism: Mechanism, count: usize) -> TimedRun<i32> {
    let (operands, script) = generate_workload(count);

    match mechanism {
        Mechanism::Enums => {
            let actions: Vec<_> = script.iter().copied().map(code::enums::encode).collect();
            run_timed(&operands, &actions, code::enums::apply)
        }
        Mechanism::FunctionPointers => {
            let actions: Vec<_> = script
                .iter()
                .copied()
                .map(code::function_pointers::encode)
                .collect();
            run_timed(&operands, &actions, code::function_pointers::apply)
        }
        Mechanism::PolymorphicObjects => {
            let actions: Vec<_> = script
                .iter()
                .copied()
                .map(code::polymorphic::encode)
                .collect();
            run_timed(&operands, &actions, code::polymorphic::apply)
        }
        Mechanism::Closures => {
            let actions: Vec<_> = script.iter().copied().map(code::closures::encode).collect();
            run_timed(&operands, &actions, code::closures::apply)
        }
        Mechanism::SumTypes => {
            let actions: Vec<_> = script.iter().copied().map(code::sum_type::encode).collect();
            run_timed(&operands, &actions, code::sum_type::apply)
        }
    }
}
