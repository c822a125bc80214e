//! Function-pointer representation: the action is the address of the
//! operation itself, dispatch is an indirect call.

use crate::pure_actions::{OpKind, Operands};

pub type OpFn = fn(i32, i32) -> i32;

fn multiply(lhs: i32, rhs: i32) -> i32 {
    lhs * rhs
}

fn divide(lhs: i32, rhs: i32) -> i32 {
    lhs / rhs
}

pub fn encode(kind: OpKind) -> OpFn {
    match kind {
        OpKind::Multiply => multiply,
        OpKind::Divide => divide,
    }
}

pub fn apply(operands: Operands, function: &OpFn) -> i32 {
    function(operands.lhs, operands.rhs)
}
