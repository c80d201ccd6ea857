//! Bottom-up reduction of compound expressions.
//!
//! A [`Simplifier`] is an internal grounded atom carrying a compound
//! expression together with a stack of paths to its expression sub-nodes.
//! Each `execute` reduces the deepest remaining sub-expression and yields a
//! successor simplifier with a shorter stack, so a compound expression
//! reduces across repeated interpreter steps, one plain reduction per step.
//!
//! The simplifier is value-semantic: every step rebuilds the carried
//! expression with the reduced child replaced and produces a fresh
//! continuation. Nothing reachable from the stack is ever mutated in
//! place.

use std::any::Any;
use std::fmt;

use smallvec::SmallVec;
use tracing::debug;

use crate::errors::SpaceError;
use crate::models::{Atom, GroundedAtom};
use crate::space::GroundingSpace;

use super::interpret::handle_plain;

/// Child-index path from the carried expression's root to a sub-expression.
/// The root itself has the empty path.
type SubPath = SmallVec<[usize; 4]>;

#[derive(Debug, Clone)]
pub(crate) struct Simplifier {
    /// The compound expression being reduced.
    full: Atom,
    /// Paths of `full` and its expression descendants, collected in
    /// pre-order. Every descendant sits above its parent, so the back of
    /// the stack is always the deepest unreduced sub-expression; `full`
    /// (the empty path) is at the bottom.
    subs: SmallVec<[SubPath; 8]>,
}

impl Simplifier {
    /// Wrap a compound expression for step-by-step reduction.
    pub(crate) fn new(full: Atom) -> Self {
        let mut subs = SmallVec::new();
        collect_sub_paths(&full, &mut SubPath::new(), &mut subs);
        Simplifier { full, subs }
    }

    /// The successor continuation: same expression, top of the stack gone.
    fn popped(&self, full: Atom) -> Self {
        let mut subs = self.subs.clone();
        subs.pop();
        Simplifier { full, subs }
    }

    /// The single-child expression the interpreter keeps on its stack.
    pub(crate) fn into_atom(self) -> Atom {
        Atom::Expression(vec![Atom::gnd(self)])
    }
}

fn collect_sub_paths(atom: &Atom, path: &mut SubPath, out: &mut SmallVec<[SubPath; 8]>) {
    if let Atom::Expression(children) = atom {
        out.push(path.clone());
        for (index, child) in children.iter().enumerate() {
            path.push(index);
            collect_sub_paths(child, path, out);
            path.pop();
        }
    }
}

fn corrupt_path(full: &Atom, path: &[usize]) -> SpaceError {
    SpaceError::Logic(format!(
        "simplifier path {:?} points outside of {}",
        path, full
    ))
}

/// Resolve the sub-expression at `path`.
fn sub_at<'a>(full: &'a Atom, path: &[usize]) -> Result<&'a Atom, SpaceError> {
    let mut atom = full;
    for &index in path {
        let Atom::Expression(children) = atom else {
            return Err(corrupt_path(full, path));
        };
        atom = children.get(index).ok_or_else(|| corrupt_path(full, path))?;
    }
    Ok(atom)
}

/// Rebuild `full` with the atom at `path` replaced. Pure: shares no
/// structure with the slot being replaced.
fn replace_at(full: &Atom, path: &[usize], replacement: Atom) -> Result<Atom, SpaceError> {
    let Some((&index, rest)) = path.split_first() else {
        return Ok(replacement);
    };
    let Atom::Expression(children) = full else {
        return Err(corrupt_path(full, path));
    };
    let mut children = children.clone();
    let slot = children
        .get_mut(index)
        .ok_or_else(|| corrupt_path(full, path))?;
    *slot = replace_at(slot, rest, replacement)?;
    Ok(Atom::Expression(children))
}

impl GroundedAtom for Simplifier {
    fn execute(
        &self,
        _args: &GroundingSpace,
        result: &mut GroundingSpace,
    ) -> Result<(), SpaceError> {
        let Some(path) = self.subs.last() else {
            return Err(SpaceError::Logic(
                "simplifier with an empty sub-expression stack".into(),
            ));
        };

        if path.is_empty() {
            // The remaining work is the full expression itself.
            debug!(target: "atomspace::eval::simplifier", full = %self.full, "reducing full expression");
            if !handle_plain(&self.full, result)? {
                result.add(self.full.clone());
            }
            return Ok(());
        }

        let sub = sub_at(&self.full, path)?;
        debug!(target: "atomspace::eval::simplifier", sub = %sub, "reducing sub-expression");
        let mut reduced = GroundingSpace::new();
        if !handle_plain(sub, &mut reduced)? {
            reduced.add(sub.clone());
        }
        let [replacement] = reduced.content() else {
            return Err(SpaceError::NotImplemented(format!(
                "sub-expression {} reduced to {} atoms; only single-atom results are supported",
                sub,
                reduced.len()
            )));
        };
        let full = replace_at(&self.full, path, replacement.clone())?;
        result.add(self.popped(full).into_atom());
        Ok(())
    }

    fn eq_gnd(&self, other: &dyn GroundedAtom) -> bool {
        other
            .as_any()
            .downcast_ref::<Simplifier>()
            .map_or(false, |other| other.full == self.full)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl fmt::Display for Simplifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(simplify {})", self.full)
    }
}
