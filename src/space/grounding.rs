//! The grounding space.
//!
//! An ordered multiset of atoms serving simultaneously as knowledge base
//! and as the interpreter's working stack: `interpret_step` pops from the
//! end and pushes back at the end, so callers observing intermediate states
//! see a stack, not a queue.

use std::any::Any;
use std::fmt;

use crate::errors::SpaceError;
use crate::models::Atom;

use super::SpaceApi;

/// The single concrete space type of the kernel.
///
/// Content is an ordered list: duplicates are permitted and insertion order
/// matters. The space exclusively owns its content vector.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroundingSpace {
    content: Vec<Atom>,
}

impl GroundingSpace {
    /// Type tag for grounding spaces.
    pub const TYPE: &'static str = "GroundingSpace";

    pub fn new() -> Self {
        GroundingSpace::default()
    }

    pub fn from_atoms(content: Vec<Atom>) -> Self {
        GroundingSpace { content }
    }

    /// Append an atom to the content list. Amortized O(1).
    pub fn add(&mut self, atom: Atom) {
        self.content.push(atom);
    }

    /// The ordered content. The tail is the top of the interpreter's stack.
    pub fn content(&self) -> &[Atom] {
        &self.content
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Pop the top of the stack, i.e. the last atom of the content list.
    pub(crate) fn pop(&mut self) -> Option<Atom> {
        self.content.pop()
    }

    /// Space equality: same type tag and pairwise-equal content.
    pub fn eq_space(&self, other: &dyn SpaceApi) -> bool {
        other.get_type() == Self::TYPE
            && other
                .as_any()
                .downcast_ref::<GroundingSpace>()
                .map_or(false, |other| other.content == self.content)
    }
}

impl SpaceApi for GroundingSpace {
    fn get_type(&self) -> &str {
        Self::TYPE
    }

    fn add_from(&mut self, other: &dyn SpaceApi) -> Result<(), SpaceError> {
        Err(SpaceError::NotImplemented(format!(
            "adding content of a {} space into a {} space",
            other.get_type(),
            Self::TYPE
        )))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl From<Vec<Atom>> for GroundingSpace {
    fn from(content: Vec<Atom>) -> Self {
        GroundingSpace::from_atoms(content)
    }
}

impl FromIterator<Atom> for GroundingSpace {
    fn from_iter<I: IntoIterator<Item = Atom>>(iter: I) -> Self {
        GroundingSpace::from_atoms(iter.into_iter().collect())
    }
}

impl fmt::Display for GroundingSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<")?;
        for (i, atom) in self.content.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", atom)?;
        }
        write!(f, ">")
    }
}
