//! Grounded atoms: the host extension point.
//!
//! A grounded atom carries an opaque payload implementing the capability
//! set `{execute, equality, rendering}`. The kernel owns the payload behind
//! a shared handle and dispatches through the trait; there is no
//! inheritance surface.

use std::any::Any;
use std::fmt;

use crate::errors::SpaceError;
use crate::space::GroundingSpace;

/// Capability set a grounded payload must expose.
///
/// `execute` receives an arguments space (the whole child list of the
/// calling expression, operator included at index 0) and writes zero or
/// more result atoms into `result`. The pluralized contract anticipates
/// multi-value returns; see the interpreter for the arity currently
/// accepted in nested positions.
pub trait GroundedAtom: fmt::Debug + fmt::Display + Send + Sync {
    /// Execute the atom against `args`, appending results to `result`.
    ///
    /// The default implementation declines: plain values are grounded atoms
    /// too and most of them are not callable.
    fn execute(
        &self,
        _args: &GroundingSpace,
        _result: &mut GroundingSpace,
    ) -> Result<(), SpaceError> {
        Err(SpaceError::NotImplemented(format!(
            "grounded atom {} is not executable",
            self
        )))
    }

    /// Payload equality. Two grounded atoms are equal iff they are of the
    /// same concrete type and their payloads compare equal.
    fn eq_gnd(&self, other: &dyn GroundedAtom) -> bool;

    /// Concrete-type access for payload downcasts.
    fn as_any(&self) -> &dyn Any;
}

/// A typed value wrapped as a grounded atom.
///
/// Equality compares payloads after a type-checked downcast; rendering and
/// debug formatting delegate to the payload. `execute` keeps the default
/// refusal.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueAtom<T> {
    value: T,
}

impl<T> ValueAtom<T> {
    pub fn new(value: T) -> Self {
        ValueAtom { value }
    }

    pub fn get(&self) -> &T {
        &self.value
    }
}

impl<T: fmt::Display> fmt::Display for ValueAtom<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> GroundedAtom for ValueAtom<T>
where
    T: PartialEq + Clone + fmt::Debug + fmt::Display + Send + Sync + 'static,
{
    fn eq_gnd(&self, other: &dyn GroundedAtom) -> bool {
        other
            .as_any()
            .downcast_ref::<ValueAtom<T>>()
            .map_or(false, |other| other.value == self.value)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
