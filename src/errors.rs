//! Error taxonomy for space operations and the interpreter.

use std::fmt;

/// Errors surfaced by space operations, matching and interpretation.
///
/// The kernel never catches its own errors: there is no retry and no
/// rollback. A grounded payload failing mid-step leaves the space as it was
/// immediately before the step, minus the popped atom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    /// A foreign space type was passed where a grounding space is required,
    /// or an argument space has the wrong shape (e.g. pattern clause count).
    InvalidArgument(String),

    /// The operation is part of the contract but has no implementation:
    /// `add_from`, sub-expression reductions with other than one result,
    /// the default grounded `execute`.
    NotImplemented(String),

    /// Internal invariant violation. Indicates corruption, not misuse.
    Logic(String),

    /// Raised by a grounded payload's `execute`; propagated unchanged.
    User(String),
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpaceError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            SpaceError::NotImplemented(msg) => write!(f, "not implemented: {}", msg),
            SpaceError::Logic(msg) => write!(f, "logic error: {}", msg),
            SpaceError::User(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for SpaceError {}
