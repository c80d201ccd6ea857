pub mod atom;
pub mod bindings;
pub mod grounded;

pub use atom::{Atom, AtomKind, GroundedRef, E, S, V};
pub use bindings::Bindings;
pub use grounded::{GroundedAtom, ValueAtom};

/// The two symmetric binding maps produced by a match.
///
/// `a_bindings` binds variables that occur on the `a` (queried) side,
/// `b_bindings` variables that occur on the `b` (pattern) side. Space-level
/// matching consumes `b_bindings` after composing it through `a_bindings`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchResult {
    pub a_bindings: Bindings,
    pub b_bindings: Bindings,
}
