//! Shared fixtures for the integration tests: a foreign space type and a
//! few purpose-built grounded atoms.

// Not every test binary uses every fixture.
#![allow(dead_code)]

use std::any::Any;
use std::fmt;

use atomspace::{Atom, GroundedAtom, GroundingSpace, SpaceApi, SpaceError};

/// A space of a type the kernel does not recognize.
#[derive(Debug, Default)]
pub struct ForeignSpace;

impl SpaceApi for ForeignSpace {
    fn get_type(&self) -> &str {
        "ForeignSpace"
    }

    fn add_from(&mut self, _other: &dyn SpaceApi) -> Result<(), SpaceError> {
        Err(SpaceError::NotImplemented("add_from on a foreign space".into()))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A grounded atom whose execution always fails.
#[derive(Debug, Clone, PartialEq)]
pub struct FailOp;

impl GroundedAtom for FailOp {
    fn execute(
        &self,
        _args: &GroundingSpace,
        _result: &mut GroundingSpace,
    ) -> Result<(), SpaceError> {
        Err(SpaceError::User("boom".into()))
    }

    fn eq_gnd(&self, other: &dyn GroundedAtom) -> bool {
        other.as_any().is::<FailOp>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl fmt::Display for FailOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fail")
    }
}

/// A grounded atom that pushes each of its arguments back as a separate
/// result, producing as many result atoms as it received arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct SpreadOp;

impl GroundedAtom for SpreadOp {
    fn execute(
        &self,
        args: &GroundingSpace,
        result: &mut GroundingSpace,
    ) -> Result<(), SpaceError> {
        for atom in args.content().iter().skip(1) {
            result.add(atom.clone());
        }
        Ok(())
    }

    fn eq_gnd(&self, other: &dyn GroundedAtom) -> bool {
        other.as_any().is::<SpreadOp>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl fmt::Display for SpreadOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "spread")
    }
}

pub fn int(value: i64) -> Atom {
    Atom::value(value)
}
