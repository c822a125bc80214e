//! Tagged-discriminant representation with an explicit branch chain on a raw
//! tag byte. The out-of-range arm is a fatal internal error.

use crate::pure_actions::{OpKind, Operands};

pub const MULTIPLY: u8 = 0;
pub const DIVIDE: u8 = 1;

pub type OpTag = u8;

pub fn encode(kind: OpKind) -> OpTag {
    match kind {
        OpKind::Multiply => MULTIPLY,
        OpKind::Divide => DIVIDE,
    }
}

pub fn apply(operands: Operands, tag: &OpTag) -> i32 {
    if *tag == MULTIPLY {
        operands.lhs * operands.rhs
    } else if *tag == DIVIDE {
        operands.lhs / operands.rhs
    } else {
        panic!("generated an invalid operation tag: {tag}");
    }
}
