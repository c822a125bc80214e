//! Sum-type representation: a payload-free enum dispatched by an exhaustive
//! match. Canonical reference for the other four representations.

use crate::pure_actions::{OpKind, Operands};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpAction {
    Multiply,
    Divide,
}

pub fn encode(kind: OpKind) -> OpAction {
    match kind {
        OpKind::Multiply => OpAction::Multiply,
        OpKind::Divide => OpAction::Divide,
    }
}

pub fn apply(operands: Operands, action: &OpAction) -> i32 {
    match action {
        OpAction::Multiply => operands.lhs * operands.rhs,
        OpAction::Divide => operands.lhs / operands.rhs,
    }
}
