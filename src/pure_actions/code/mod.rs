//! The five operation representations under test.
//!
//! Each module encodes an [`OpKind`](super::OpKind) into its own
//! representation and exposes `apply(operands, action) -> i32`. The actions
//! carry no payload; everything they need is in the operand pair.

pub mod closures;
pub mod enums;
pub mod function_pointers;
pub mod polymorphic;
pub mod sum_type;
