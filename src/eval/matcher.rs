//! One-sided structural matching and substitution.
//!
//! This module implements the matching algorithm that powers rewrites:
//! `match_atoms` produces two symmetric binding maps, `apply_bindings`
//! instantiates a template under a binding map, and the space-level
//! operations compose the two.

use tracing::{debug, trace};

use crate::errors::SpaceError;
use crate::models::{Atom, Bindings, MatchResult};
use crate::space::{GroundingSpace, SpaceApi};

/// Match `a` against `b`, accumulating bindings for both sides.
///
/// The matcher is one-sided with a directional asymmetry: a variable on the
/// `b` side captures `a` regardless of `a`'s variant, including when `a` is
/// itself a variable, so matching `$x` against `$y` records only `y ↦ x`
/// in `b_bindings`. A variable on the `a` side captures `b` in
/// `a_bindings`. Symbols and grounded atoms match by equality; expressions
/// recurse pairwise and any child failure aborts the whole match.
///
/// A variable bound twice is not checked against its earlier witness; the
/// last binding wins (see [`Bindings::insert`]).
pub fn match_atoms(a: &Atom, b: &Atom, result: &mut MatchResult) -> bool {
    trace!(target: "atomspace::eval::match_atoms", %a, %b);
    // The b-side variable case comes before the dispatch on a's tag.
    if let Atom::Variable(name) = b {
        result.b_bindings.insert(name.clone(), a.clone());
        return true;
    }
    match a {
        Atom::Symbol(_) | Atom::Grounded(_) => a == b,
        Atom::Variable(name) => {
            result.a_bindings.insert(name.clone(), b.clone());
            true
        }
        Atom::Expression(children_a) => match b {
            Atom::Expression(children_b) if children_a.len() == children_b.len() => children_a
                .iter()
                .zip(children_b.iter())
                .all(|(child_a, child_b)| match_atoms(child_a, child_b, result)),
            _ => false,
        },
    }
}

/// Instantiate `atom` under `bindings`.
///
/// Symbols and grounded atoms pass through unchanged, variables are
/// replaced by their binding when present, expressions are rebuilt
/// child-by-child into a fresh expression.
pub fn apply_bindings(atom: &Atom, bindings: &Bindings) -> Atom {
    match atom {
        Atom::Symbol(_) | Atom::Grounded(_) => atom.clone(),
        Atom::Variable(name) => bindings
            .get(name)
            .cloned()
            .unwrap_or_else(|| atom.clone()),
        Atom::Expression(children) => Atom::Expression(
            children
                .iter()
                .map(|child| apply_bindings(child, bindings))
                .collect(),
        ),
    }
}

/// Compose the pattern-side bindings through the queried-side ones.
///
/// Resolves the case where a pattern variable was matched against a
/// knowledge-base variable which in turn got bound.
fn compose_bindings(result: &MatchResult) -> Bindings {
    let mut composed = Bindings::new();
    for (name, atom) in result.b_bindings.iter() {
        composed.insert(name, apply_bindings(atom, &result.a_bindings));
    }
    composed
}

fn require_grounding<'a>(
    space: &'a dyn SpaceApi,
    role: &str,
) -> Result<&'a GroundingSpace, SpaceError> {
    space
        .as_any()
        .downcast_ref::<GroundingSpace>()
        .ok_or_else(|| {
            SpaceError::InvalidArgument(format!(
                "{} is expected to be a {} space, got {}",
                role,
                GroundingSpace::TYPE,
                space.get_type()
            ))
        })
}

impl GroundingSpace {
    /// Match every content atom against `pattern`, collecting the composed
    /// pattern-side bindings of each success in content order.
    pub fn query(&self, pattern: &Atom) -> Vec<Bindings> {
        self.content()
            .iter()
            .filter_map(|kb_atom| {
                let mut result = MatchResult::default();
                match_atoms(kb_atom, pattern, &mut result).then(|| compose_bindings(&result))
            })
            .collect()
    }

    /// Match a single-clause pattern space against this space's content and
    /// append instantiated template atoms to `out`.
    ///
    /// For each content atom matching the pattern clause, every template
    /// atom is instantiated under the composed bindings and appended to
    /// `out`; results appear in content order, template atoms in declared
    /// order. Both argument spaces must be grounding spaces and the pattern
    /// space must contain exactly one clause.
    pub fn match_into(
        &self,
        pattern: &dyn SpaceApi,
        templ: &dyn SpaceApi,
        out: &mut GroundingSpace,
    ) -> Result<(), SpaceError> {
        let pattern = require_grounding(pattern, "pattern")?;
        let templ = require_grounding(templ, "template")?;
        let clause = match pattern.content() {
            [clause] => clause,
            content => {
                return Err(SpaceError::InvalidArgument(format!(
                    "pattern space must contain exactly one clause, got {}",
                    content.len()
                )))
            }
        };
        debug!(target: "atomspace::eval::match_into", pattern = %pattern, templ = %templ);

        for kb_atom in self.content() {
            let mut result = MatchResult::default();
            if !match_atoms(kb_atom, clause, &mut result) {
                continue;
            }
            let bindings = compose_bindings(&result);
            for template_atom in templ.content() {
                let instantiated = apply_bindings(template_atom, &bindings);
                trace!(target: "atomspace::eval::match_into", result = %instantiated);
                out.add(instantiated);
            }
        }
        Ok(())
    }
}
