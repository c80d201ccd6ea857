//! Single-step interpretation and pattern matching over grounding spaces.

mod interpret;
mod matcher;
mod simplifier;

pub use matcher::{apply_bindings, match_atoms};
