//! Trait-object representation. The operations carry no state, so every
//! action is a reference to one of two shared static objects, dispatched
//! through the trait vtable.

use crate::pure_actions::{OpKind, Operands};

pub trait Op: Sync {
    fn apply(&self, lhs: i32, rhs: i32) -> i32;
}

pub type OpRef = &'static dyn Op;

struct Multiply;
struct Divide;

static MULTIPLY: Multiply = Multiply;
static DIVIDE: Divide = Divide;

impl Op for Multiply {
    fn apply(&self, lhs: i32, rhs: i32) -> i32 {
        lhs * rhs
    }
}

impl Op for Divide {
    fn apply(&self, lhs: i32, rhs: i32) -> i32 {
        lhs / rhs
    }
}

pub fn encode(kind: OpKind) -> OpRef {
    match kind {
        OpKind::Multiply => &MULTIPLY,
        OpKind::Divide => &DIVIDE,
    }
}

pub fn apply(operands: Operands, object: &OpRef) -> i32 {
    object.apply(operands.lhs, operands.rhs)
}
