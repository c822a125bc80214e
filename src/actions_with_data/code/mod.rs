//! The five action representations under test.
//!
//! Each module encodes an [`ActionSpec`](super::ActionSpec) into its own
//! representation and exposes `apply(subject, action) -> Character` using
//! that representation's dispatch mechanism. All five implement the same
//! arithmetic contract; only the dispatch differs.

pub mod closures;
pub mod enums;
pub mod function_pointers;
pub mod polymorphic;
pub mod sum_type;
