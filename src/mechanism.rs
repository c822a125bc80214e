//! Runtime selection of the dispatch mechanism under test.
//!
//! All five mechanisms are compiled into every binary; the CLI picks one by
//! numeric selector so runs of different mechanisms are directly comparable.

/// One of the five action representations being benchmarked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mechanism {
    /// Raw tag byte plus boxed payload, dispatched by an if/else-if chain.
    Enums,
    /// Struct of function pointer plus boxed payload, indirect call.
    FunctionPointers,
    /// One boxed trait object per action, virtual dispatch.
    PolymorphicObjects,
    /// Type-erased boxed closure capturing its payload by value.
    Closures,
    /// Payload-carrying enum, exhaustive match.
    SumTypes,
}

impl Mechanism {
    /// All mechanisms, indexed by their CLI selector.
    pub const ALL: [Mechanism; 5] = [
        Mechanism::Enums,
        Mechanism::FunctionPointers,
        Mechanism::PolymorphicObjects,
        Mechanism::Closures,
        Mechanism::SumTypes,
    ];

    /// Map a CLI selector to a mechanism. `None` for anything outside 0..=4.
    pub fn from_selector(selector: u64) -> Option<Mechanism> {
        Self::ALL.get(selector as usize).copied()
    }

    /// Human-readable name used in the test banner.
    pub fn name(&self) -> &'static str {
        match self {
            Mechanism::Enums => "enums",
            Mechanism::FunctionPointers => "function pointers",
            Mechanism::PolymorphicObjects => "trait objects",
            Mechanism::Closures => "boxed closures",
            Mechanism::SumTypes => "sum types",
        }
    }
}
