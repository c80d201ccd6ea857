//! The atom data model.
//!
//! An atom is one of four variants: a symbol, a variable, an expression
//! over child atoms, or a grounded value supplied by host code. Atoms are
//! immutable after construction and compare structurally; grounded atoms
//! delegate equality and rendering to their payload.

use std::fmt;
use std::sync::Arc;

use super::grounded::{GroundedAtom, ValueAtom};

/// Shared handle to a grounded payload.
///
/// Grounded payloads sit behind an `Arc` so the atom tree stays cheaply
/// clonable; the reference count is the only shared mutable datum in the
/// model.
pub type GroundedRef = Arc<dyn GroundedAtom>;

/// Discriminator tag for the four atom variants. Exhaustive: there is no
/// "other" kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AtomKind {
    Symbol,
    Grounded,
    Expression,
    Variable,
}

impl fmt::Display for AtomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AtomKind::Symbol => write!(f, "S"),
            AtomKind::Grounded => write!(f, "G"),
            AtomKind::Expression => write!(f, "E"),
            AtomKind::Variable => write!(f, "V"),
        }
    }
}

/// A term of the atomspace algebra.
#[derive(Debug, Clone)]
pub enum Atom {
    /// A named symbol; compares by name.
    Symbol(String),
    /// A named variable; compares by name and renders with a `$` prefix.
    Variable(String),
    /// An ordered sequence of child atoms. The empty expression is legal.
    Expression(Vec<Atom>),
    /// An opaque value with host-supplied execute/equality/rendering.
    Grounded(GroundedRef),
}

impl Atom {
    /// The variant tag of this atom.
    pub fn kind(&self) -> AtomKind {
        match self {
            Atom::Symbol(_) => AtomKind::Symbol,
            Atom::Variable(_) => AtomKind::Variable,
            Atom::Expression(_) => AtomKind::Expression,
            Atom::Grounded(_) => AtomKind::Grounded,
        }
    }

    pub fn is_expression(&self) -> bool {
        matches!(self, Atom::Expression(_))
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Atom::Variable(_))
    }

    /// The child atoms, if this is an expression.
    pub fn as_expression(&self) -> Option<&[Atom]> {
        match self {
            Atom::Expression(children) => Some(children),
            _ => None,
        }
    }

    /// Wrap a grounded payload into an atom.
    pub fn gnd(payload: impl GroundedAtom + 'static) -> Atom {
        Atom::Grounded(Arc::new(payload))
    }

    /// Wrap a plain value into a grounded atom via [`ValueAtom`].
    pub fn value<T>(value: T) -> Atom
    where
        T: PartialEq + Clone + fmt::Debug + fmt::Display + Send + Sync + 'static,
    {
        Atom::gnd(ValueAtom::new(value))
    }

    /// Extract a [`ValueAtom`] payload of type `T`, if this atom holds one.
    pub fn as_value<T: 'static>(&self) -> Option<&T> {
        match self {
            Atom::Grounded(payload) => payload
                .as_any()
                .downcast_ref::<ValueAtom<T>>()
                .map(ValueAtom::get),
            _ => None,
        }
    }
}

impl PartialEq for Atom {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Atom::Symbol(a), Atom::Symbol(b)) => a == b,
            (Atom::Variable(a), Atom::Variable(b)) => a == b,
            (Atom::Expression(a), Atom::Expression(b)) => a == b,
            (Atom::Grounded(a), Atom::Grounded(b)) => a.eq_gnd(b.as_ref()),
            _ => false,
        }
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Atom::Symbol(name) => write!(f, "{}", name),
            Atom::Variable(name) => write!(f, "${}", name),
            Atom::Expression(children) => {
                write!(f, "(")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", child)?;
                }
                write!(f, ")")
            }
            Atom::Grounded(payload) => write!(f, "{}", payload),
        }
    }
}

/// Construct a symbol atom.
#[allow(non_snake_case)]
pub fn S(name: impl Into<String>) -> Atom {
    Atom::Symbol(name.into())
}

/// Construct a variable atom.
#[allow(non_snake_case)]
pub fn V(name: impl Into<String>) -> Atom {
    Atom::Variable(name.into())
}

/// Construct an expression atom.
#[allow(non_snake_case)]
pub fn E(children: impl Into<Vec<Atom>>) -> Atom {
    Atom::Expression(children.into())
}
