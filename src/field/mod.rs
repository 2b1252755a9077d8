//! Scalar fields: pure functions of 3D position, sampled in batches.

pub mod checkerboard;
pub mod sampling;

// Re-export core types
pub use checkerboard::CheckerboardField;
pub use sampling::sample_field;

use crate::errors::FieldError;
use crate::float_types::Real;
use crate::sample::{FieldInput, FieldOutput};
use nalgebra::Point3;

/// A scalar field producing a value as a function of 3D position.
///
/// Implementations must be pure: the same position yields the same value for the
/// duration of a sampling pass. Configuration is read once at construction and
/// held fixed.
pub trait Field: Send + Sync {
    /// Evaluate the field at a single transformed position.
    fn value(&self, position: &Point3<Real>) -> Real;

    /// Run one sampling pass over the batch, writing one value per index.
    ///
    /// The output block must be pre-sized to the batch length. Value fields are
    /// cheap, so deactivation flags are not consulted here; layers honor them.
    fn sample(&self, input: &FieldInput, output: &mut FieldOutput) -> Result<(), FieldError> {
        sampling::sample_field(self, input, output)
    }
}
