//! Integer arithmetic grounded atoms.
//!
//! Provides the standard binary operations over `ValueAtom<i64>` arguments:
//! - `AddOp` - Addition (+)
//! - `SubOp` - Subtraction (-)
//! - `MulOp` - Multiplication (*)
//!
//! Each operation reads its two arguments from the argument space (index 0
//! is the operation itself) and pushes a single integer result. Arity and
//! type mismatches, as well as overflow, surface as `SpaceError::User`.

use std::any::Any;
use std::fmt;

use crate::errors::SpaceError;
use crate::models::{Atom, GroundedAtom};
use crate::space::GroundingSpace;

fn int_args(name: &str, args: &GroundingSpace) -> Result<(i64, i64), SpaceError> {
    let operands = args.content().get(1..).unwrap_or_default();
    if operands.len() != 2 {
        return Err(SpaceError::User(format!(
            "{} requires 2 arguments, got {}",
            name,
            operands.len()
        )));
    }
    let int = |atom: &Atom| {
        atom.as_value::<i64>().copied().ok_or_else(|| {
            SpaceError::User(format!("{} expects integer arguments, got {}", name, atom))
        })
    };
    Ok((int(&operands[0])?, int(&operands[1])?))
}

fn checked(name: &str, a: i64, b: i64, value: Option<i64>) -> Result<i64, SpaceError> {
    value.ok_or_else(|| SpaceError::User(format!("integer overflow: {} {} {}", a, name, b)))
}

/// Addition operation: (+ a b)
#[derive(Debug, Clone, PartialEq)]
pub struct AddOp;

impl GroundedAtom for AddOp {
    fn execute(&self, args: &GroundingSpace, result: &mut GroundingSpace) -> Result<(), SpaceError> {
        let (a, b) = int_args("+", args)?;
        result.add(Atom::value(checked("+", a, b, a.checked_add(b))?));
        Ok(())
    }

    fn eq_gnd(&self, other: &dyn GroundedAtom) -> bool {
        other.as_any().is::<AddOp>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl fmt::Display for AddOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+")
    }
}

/// Subtraction operation: (- a b)
#[derive(Debug, Clone, PartialEq)]
pub struct SubOp;

impl GroundedAtom for SubOp {
    fn execute(&self, args: &GroundingSpace, result: &mut GroundingSpace) -> Result<(), SpaceError> {
        let (a, b) = int_args("-", args)?;
        result.add(Atom::value(checked("-", a, b, a.checked_sub(b))?));
        Ok(())
    }

    fn eq_gnd(&self, other: &dyn GroundedAtom) -> bool {
        other.as_any().is::<SubOp>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl fmt::Display for SubOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "-")
    }
}

/// Multiplication operation: (* a b)
#[derive(Debug, Clone, PartialEq)]
pub struct MulOp;

impl GroundedAtom for MulOp {
    fn execute(&self, args: &GroundingSpace, result: &mut GroundingSpace) -> Result<(), SpaceError> {
        let (a, b) = int_args("*", args)?;
        result.add(Atom::value(checked("*", a, b, a.checked_mul(b))?));
        Ok(())
    }

    fn eq_gnd(&self, other: &dyn GroundedAtom) -> bool {
        other.as_any().is::<MulOp>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl fmt::Display for MulOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "*")
    }
}
