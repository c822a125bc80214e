//! # Action-Array-Bench
//!
//! Microbenchmarks comparing five ways of representing "a polymorphic action
//! applied to data", timed over large arrays of generated inputs:
//!
//! - tagged discriminant with an explicit branch chain
//! - raw function pointers
//! - trait objects (virtual dispatch)
//! - boxed closures (type-erased callables)
//! - sum types with exhaustive pattern matching
//!
//! Two benchmark programs share this crate: [`actions_with_data`] transforms
//! `{health, attack}` records with payload-carrying actions, and
//! [`pure_actions`] combines integer operand pairs with payload-free actions.

pub mod actions_with_data;
pub mod cli;
pub mod error;
pub mod mechanism;
pub mod pure_actions;
pub mod utils;

pub use error::BenchError;
pub use mechanism::Mechanism;
