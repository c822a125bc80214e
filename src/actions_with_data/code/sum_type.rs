//! Sum-type representation: a payload-carrying enum dispatched by an
//! exhaustive match. The compiler checks the variant set is closed, so there
//! is no defensive arm. This is also the canonical reference the other four
//! representations are verified against.

use crate::actions_with_data::{ActionKind, ActionSpec, Character};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SumAction {
    Damage(f32),
    Heal(f32),
    Buff(f32),
}

pub fn encode(spec: &ActionSpec) -> SumAction {
    match spec.kind {
        ActionKind::Damage => SumAction::Damage(spec.amount),
        ActionKind::Heal => SumAction::Heal(spec.amount),
        ActionKind::Buff => SumAction::Buff(spec.amount),
    }
}

pub fn apply(subject: Character, action: &SumAction) -> Character {
    match *action {
        SumAction::Damage(amount) => Character {
            health: subject.health - amount,
            attack: subject.attack,
        },
        SumAction::Heal(amount) => Character {
            health: subject.health + amount,
            attack: subject.attack,
        },
        SumAction::Buff(amount) => Character {
            health: subject.health,
            attack: subject.attack + amount,
        },
    }
}
