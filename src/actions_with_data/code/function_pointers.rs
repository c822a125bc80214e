//! Function-pointer representation: each action stores the address of the
//! function to call plus its boxed payload, and dispatch is an indirect call
//! through the stored pointer.

use crate::actions_with_data::{ActionKind, ActionSpec, Character};

pub type ActionFn = fn(Character, &f32) -> Character;

/// Function pointer plus individually boxed payload.
pub struct FnAction {
    pub function: ActionFn,
    pub amount: Box<f32>,
}

fn damage(subject: Character, amount: &f32) -> Character {
    Character {
        health: subject.health - amount,
        attack: subject.attack,
    }
}

fn heal(subject: Character, amount: &f32) -> Character {
    Character {
        health: subject.health + amount,
        attack: subject.attack,
    }
}

fn buff(subject: Character, amount: &f32) -> Character {
    Character {
        health: subject.health,
        attack: subject.attack + amount,
    }
}

pub fn encode(spec: &ActionSpec) -> FnAction {
    let function: ActionFn = match spec.kind {
        ActionKind::Damage => damage,
        ActionKind::Heal => heal,
        ActionKind::Buff => buff,
    };
    FnAction {
        function,
        amount: Box::new(spec.amount),
    }
}

pub fn apply(subject: Character, action: &FnAction) -> Character {
    (action.function)(subject, &action.amount)
}
