//! Type-erased closure representation. The closures capture nothing; the
//! point of the variant is the cost of calling through the erased wrapper.

use crate::pure_actions::{OpKind, Operands};

pub type OpClosure = Box<dyn Fn(i32, i32) -> i32>;

pub fn encode(kind: OpKind) -> OpClosure {
    match kind {
        OpKind::Multiply => Box::new(|lhs, rhs| lhs * rhs),
        OpKind::Divide => Box::new(|lhs, rhs| lhs / rhs),
    }
}

pub fn apply(operands: Operands, closure: &OpClosure) -> i32 {
    closure(operands.lhs, operands.rhs)
}
