//! Trait-object representation: one boxed object per action, dispatched
//! through the vtable of a single-method trait. This is the Rust rendering of
//! an abstract base class with a virtual `apply`.

use crate::actions_with_data::{ActionKind, ActionSpec, Character};

/// The one capability every action object exposes.
pub trait Action {
    fn apply(&self, subject: Character) -> Character;
}

pub type BoxedAction = Box<dyn Action>;

struct Damage(f32);
struct Heal(f32);
struct Buff(f32);

impl Action for Damage {
    fn apply(&self, subject: Character) -> Character {
        Character {
            health: subject.health - self.0,
            attack: subject.attack,
        }
    }
}

impl Action for Heal {
    fn apply(&self, subject: Character) -> Character {
        Character {
            health: subject.health + self.0,
            attack: subject.attack,
        }
    }
}

impl Action for Buff {
    fn apply(&self, subject: Character) -> Character {
        Character {
            health: subject.health,
            attack: subject.attack + self.0,
        }
    }
}

pub fn encode(spec: &ActionSpec) -> BoxedAction {
    match spec.kind {
        ActionKind::Damage => Box::new(Damage(spec.amount)),
        ActionKind::Heal => Box::new(Heal(spec.amount)),
        ActionKind::Buff => Box::new(Buff(spec.amount)),
    }
}

pub fn apply(subject: Character, action: &BoxedAction) -> Character {
    action.apply(subject)
}
