//! Grounded operations bundled with the kernel.
//!
//! Host code supplies its own grounded atoms through the
//! [`GroundedAtom`](crate::models::GroundedAtom) capability set; the
//! operations here cover the arithmetic the stock reduction scenarios use.

pub mod arithmetic;

pub use arithmetic::{AddOp, MulOp, SubOp};
