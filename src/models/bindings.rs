//! Variable bindings with deterministic iteration order.
//!
//! Entries are kept sorted by variable name so that iteration, and
//! therefore rewriting, is reproducible regardless of the order in which
//! the matcher discovered the bindings. Bindings stay inline for the small
//! maps pattern matching produces in practice.

use smallvec::SmallVec;

use super::Atom;

/// A finite map from variable name to atom.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bindings {
    entries: SmallVec<[(String, Atom); 8]>,
}

impl Bindings {
    pub fn new() -> Self {
        Bindings {
            entries: SmallVec::new(),
        }
    }

    /// Look up the binding for `name`.
    pub fn get(&self, name: &str) -> Option<&Atom> {
        self.entries
            .binary_search_by(|(n, _)| n.as_str().cmp(name))
            .ok()
            .map(|i| &self.entries[i].1)
    }

    /// Insert a binding for `name`.
    ///
    /// Inserting the same variable twice replaces the earlier binding; the
    /// matcher does not reconcile a second witness against the first. This
    /// is a known weakness kept for compatibility with the matching
    /// semantics callers rely on.
    pub fn insert(&mut self, name: impl Into<String>, atom: Atom) {
        let name = name.into();
        match self
            .entries
            .binary_search_by(|(n, _)| n.as_str().cmp(&name))
        {
            Ok(i) => self.entries[i].1 = atom,
            Err(i) => self.entries.insert(i, (name, atom)),
        }
    }

    /// Iterate entries in variable-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Atom)> {
        self.entries.iter().map(|(name, atom)| (name.as_str(), atom))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
