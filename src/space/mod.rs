//! Space abstraction: ordered atom containers.
//!
//! [`SpaceApi`] is the minimum contract a storage backend exposes so that
//! heterogeneous space types could later cooperate; [`GroundingSpace`] is
//! the single concrete space the kernel ships.

pub mod grounding;

pub use grounding::GroundingSpace;

use std::any::Any;

use crate::errors::SpaceError;

/// Minimum contract consumed by the kernel.
pub trait SpaceApi {
    /// Type tag identifying the concrete space implementation.
    fn get_type(&self) -> &str;

    /// Merge the content of another, possibly foreign, space into this one.
    fn add_from(&mut self, other: &dyn SpaceApi) -> Result<(), SpaceError>;

    /// Concrete-type access for operations that require a specific space.
    fn as_any(&self) -> &dyn Any;
}
