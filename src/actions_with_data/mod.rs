//! # Array of actions with data
//!
//! Benchmarks five representations of a payload-carrying action applied to a
//! two-field character record. The action set is Damage (subtract from
//! health), Heal (add to health) and Buff (add to attack); every mechanism is
//! held to this one contract so their timings measure dispatch, not
//! divergent arithmetic.

pub mod code;

#[cfg(test)]
pub mod test;

use crate::mechanism::Mechanism;
use crate::utils::driver::{run_timed, TimedRun};
use crate::utils::workload::{ChoiceSource, FloatSource, WORKLOAD_SEED};

/// Inclusive range for generated health, attack and action amounts.
pub const VALUE_RANGE: (f32, f32) = (1.0, 10_000.0);

/// The record every action transforms. Transformations are functional
/// updates; inputs are never mutated in place.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Character {
    pub health: f32,
    pub attack: f32,
}

/// The closed set of action kinds, independent of representation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionKind {
    Damage,
    Heal,
    Buff,
}

impl ActionKind {
    pub const COUNT: usize = 3;

    pub fn from_index(index: usize) -> ActionKind {
        match index {
            0 => ActionKind::Damage,
            1 => ActionKind::Heal,
            2 => ActionKind::Buff,
            _ => panic!("generated an invalid action index: {index}"),
        }
    }
}

/// One generated action before encoding: which kind, and how much. Every
/// mechanism encodes the same script, so all five see identical workloads.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActionSpec {
    pub kind: ActionKind,
    pub amount: f32,
}

/// Generate the character array and action script for a run of `count`
/// elements. Characters consume the value stream first (health then attack,
/// per element), then action amounts continue on the same stream; kinds come
/// from an independently seeded choice stream.
pub fn generate_workload(count: usize) -> (Vec<Character>, Vec<ActionSpec>) {
    let (lo, hi) = VALUE_RANGE;
    let mut values = FloatSource::new(WORKLOAD_SEED, lo, hi);

    let characters = (0..count)
        .map(|_| Character {
            health: values.sample(),
            attack: values.sample(),
        })
        .collect();

    let mut kinds = ChoiceSource::new(WORKLOAD_SEED, ActionKind::COUNT);
    let script = (0..count)
        .map(|_| ActionSpec {
            kind: ActionKind::from_index(kinds.sample()),
            amount: values.sample(),
        })
        .collect();

    (characters, script)
}

/// Generate the workload, encode it for `mechanism` and run one timed pass.
/// Encoding and teardown stay outside the measurement window.
pub fn run(mechanism: Mechanism, count: usize) -> TimedRun<Character> {
    let (characters, script) = generate_workload(count);

    match mechanism {
        Mechanism::Enums => {
            let actions: Vec<_> = script.iter().map(code::enums::encode).collect();
            run_timed(&characters, &actions, code::enums::apply)
        }
        Mechanism::FunctionPointers => {
            let actions: Vec<_> = script.iter().map(code::function_pointers::encode).collect();
            run_timed(&characters, &actions, code::function_pointers::apply)
        }
        Mechanism::PolymorphicObjects => {
            let actions: Vec<_> = script.iter().map(code::polymorphic::encode).collect();
            run_timed(&characters, &actions, code::polymorphic::apply)
        }
        Mechanism::Closures => {
            let actions: Vec<_> = script.iter().map(code::closures::encode).collect();
            run_timed(&characters, &actions, code::closures::apply)
        }
        Mechanism::SumTypes => {
            let actions: Vec<_> = script.iter().map(code::sum_type::encode).collect();
            run_timed(&characters, &actions, code::sum_type::apply)
        }
    }
}
