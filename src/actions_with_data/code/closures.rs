//! Type-erased closure representation: each action is a boxed `Fn` capturing
//! its amount by value, dispatched through the erased call wrapper.

use crate::actions_with_data::{ActionKind, ActionSpec, Character};

pub type ClosureAction = Box<dyn Fn(Character) -> Character>;

pub fn encode(spec: &ActionSpec) -> ClosureAction {
    let amount = spec.amount;
    match spec.kind {
        ActionKind::Damage => Box::new(move |subject| Character {
            health: subject.health - amount,
            attack: subject.attack,
        }),
        ActionKind::Heal => Box::new(move |subject| Character {
            health: subject.health + amount,
            attack: subject.attack,
        }),
        ActionKind::Buff => Box::new(move |subject| Character {
            health: subject.health,
            attack: subject.attack + amount,
        }),
    }
}

pub fn apply(subject: Character, action: &ClosureAction) -> Character {
    action(subject)
}
