//! The single-step interpreter.
//!
//! `interpret_step` treats the space's content list as a stack: it pops the
//! top atom and either discards it (already a value), executes it (a plain
//! expression with a grounded operator), or defers it by wrapping it in a
//! simplifier continuation that drives bottom-up reduction across
//! subsequent steps.

use tracing::{debug, trace};

use crate::errors::SpaceError;
use crate::models::Atom;
use crate::space::{GroundingSpace, SpaceApi};

use super::simplifier::Simplifier;

/// A plain expression has no expression children. The empty expression is
/// plain.
fn is_plain(children: &[Atom]) -> bool {
    !children.iter().any(Atom::is_expression)
}

/// Reduce a plain expression into `result`.
///
/// Executes the expression when its operator (child 0) is grounded and no
/// child is a variable: the whole child list, operator included, becomes
/// the arguments space. Returns `Ok(false)` when the expression is not
/// interpretable (operator not grounded, an unbound variable present, or
/// no children at all); the caller decides what to do with the declined
/// atom. Errors from the grounded `execute` propagate unchanged.
pub(crate) fn handle_plain(
    expr: &Atom,
    result: &mut GroundingSpace,
) -> Result<bool, SpaceError> {
    let Atom::Expression(children) = expr else {
        return Err(SpaceError::Logic(format!(
            "plain handler applied to a non-expression: {}",
            expr
        )));
    };
    let Some(Atom::Grounded(op)) = children.first() else {
        debug!(
            target: "atomspace::eval::handle_plain",
            expr = %expr,
            "omit non-interpretable expression"
        );
        return Ok(false);
    };
    if children.iter().any(Atom::is_variable) {
        debug!(
            target: "atomspace::eval::handle_plain",
            expr = %expr,
            "omit expression with unbound variables"
        );
        return Ok(false);
    }
    let args = GroundingSpace::from_atoms(children.clone());
    trace!(target: "atomspace::eval::handle_plain", args = %args, "executing grounded atom");
    op.execute(&args, result)?;
    trace!(target: "atomspace::eval::handle_plain", result = %result, "grounded atom result");
    Ok(true)
}

impl GroundingSpace {
    /// Reduce at most one atom from the top of this space's stack.
    ///
    /// An empty space is a no-op. A non-expression top atom is discarded:
    /// it has reduced to a value, and capturing results between steps is
    /// the caller's responsibility. A plain expression executes when its
    /// operator is grounded and no child is a variable; a declined
    /// expression is dropped from the stack rather than pushed back. A
    /// compound expression is replaced by a single-child expression
    /// wrapping a simplifier continuation, which later steps execute one
    /// sub-expression at a time.
    ///
    /// `kb` must be a grounding space; beyond that validation the knowledge
    /// base is not consulted. Matching reducible expressions against it is
    /// an extension point.
    pub fn interpret_step(&mut self, kb: &dyn SpaceApi) -> Result<(), SpaceError> {
        if kb.get_type() != GroundingSpace::TYPE {
            return Err(SpaceError::InvalidArgument(format!(
                "only {} knowledge bases are supported, got {}",
                GroundingSpace::TYPE,
                kb.get_type()
            )));
        }

        let Some(atom) = self.pop() else {
            return Ok(());
        };
        debug!(target: "atomspace::eval::interpret_step", atom = %atom, "atom on top");

        let Some(plain) = atom.as_expression().map(is_plain) else {
            // Not an expression: already a value.
            return Ok(());
        };
        if plain {
            trace!(target: "atomspace::eval::interpret_step", "handle plain expression");
            handle_plain(&atom, self)?;
        } else {
            trace!(target: "atomspace::eval::interpret_step", "prepare to simplify expression");
            self.add(Simplifier::new(atom).into_atom());
        }
        Ok(())
    }
}
