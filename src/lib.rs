//! Evaluation kernel for a symbolic atomspace.
//!
//! This library provides the core of a homogeneous term algebra:
//! expressions composed of symbols, variables, nested expressions and
//! opaque grounded values are stored in spaces, matched against patterns,
//! and reduced step by step by a single-step interpreter.
//!
//! # Architecture
//!
//! 1. **Atom model** (`models` module)
//!    - The tagged term type: `Symbol`, `Variable`, `Expression`, `Grounded`
//!    - Structural equality and diagnostic rendering
//!    - `GroundedAtom`: the capability set host code implements to plug in
//!      computable values
//!
//! 2. **Spaces** (`space` module)
//!    - `GroundingSpace`: an ordered multiset of atoms acting both as
//!      knowledge base and as the interpreter's working stack
//!    - `SpaceApi`: the minimum contract alternative backends implement
//!
//! 3. **Matching and interpretation** (`eval` module)
//!    - `match_atoms` / `apply_bindings`: one-sided structural matching
//!      with symmetric binding maps, and substitution
//!    - `interpret_step`: pops the top atom and reduces it at most once;
//!      compound expressions reduce bottom-up across steps through an
//!      internal simplifier continuation
//!
//! # Example
//!
//! ```rust
//! use atomspace::{Atom, GroundingSpace, E};
//! use atomspace::grounded::AddOp;
//!
//! let mut space = GroundingSpace::new();
//! space.add(E([Atom::gnd(AddOp), Atom::value(2i64), Atom::value(3i64)]));
//!
//! let kb = GroundingSpace::new();
//! space.interpret_step(&kb).unwrap();
//! assert_eq!(space.content(), &[Atom::value(5i64)]);
//! ```
//!
//! # Evaluation strategy
//!
//! - **One step at a time**: the kernel exposes single reductions; driving
//!   evaluation to a fixpoint is the caller's strategy
//! - **Bottom-up**: nested expressions reduce deepest-first, one
//!   sub-expression per step
//! - **Single writer**: a space must not be mutated concurrently; atoms are
//!   shared immutable values and may be read from anywhere

pub mod errors;
pub mod eval;
pub mod grounded;
pub mod models;
pub mod space;

pub use errors::SpaceError;
pub use eval::{apply_bindings, match_atoms};
pub use models::{Atom, AtomKind, Bindings, GroundedAtom, MatchResult, ValueAtom, E, S, V};
pub use space::{GroundingSpace, SpaceApi};
