//! Tagged-discriminant representation with an explicit branch chain.
//!
//! The tag is a raw byte rather than a Rust enum so the dispatch really is an
//! open branch on a discriminant, with the out-of-range case checked at run
//! time. The payload is an owned boxed float, freed when the action drops.

use crate::actions_with_data::{ActionKind, ActionSpec, Character};

pub const DAMAGE: u8 = 0;
pub const HEAL: u8 = 1;
pub const BUFF: u8 = 2;

/// Tag byte plus individually boxed payload.
pub struct TaggedAction {
    pub tag: u8,
    pub amount: Box<f32>,
}

pub fn encode(spec: &ActionSpec) -> TaggedAction {
    let tag = match spec.kind {
        ActionKind::Damage => DAMAGE,
        ActionKind::Heal => HEAL,
        ActionKind::Buff => BUFF,
    };
    TaggedAction {
        tag,
        amount: Box::new(spec.amount),
    }
}

/// Branch on the tag. A tag outside the known set is a fatal internal error:
/// the generator can never produce one, so reaching the final arm means the
/// workload was corrupted.
pub fn apply(subject: Character, action: &TaggedAction) -> Character {
    if action.tag == DAMAGE {
        Character {
            health: subject.health - *action.amount,
            attack: subject.attack,
        }
    } else if action.tag == HEAL {
        Character {
            health: subject.health + *action.amount,
            attack: subject.attack,
        }
    } else if action.tag == BUFF {
        Character {
            health: subject.health,
            attack: subject.attack + *action.amount,
        }
    } else {
        panic!("generated an invalid action tag: {}", action.tag);
    }
}
