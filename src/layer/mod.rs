//! Field layers: passes operating on an already-sized output block.
//!
//! Unlike value fields, layers honor the per-index deactivation flags and may
//! derive values from the batch as a whole rather than from single positions.

pub mod nearest_neighbor;

pub use nearest_neighbor::NearestNeighborDistanceLayer;

use crate::errors::FieldError;
use crate::sample::{FieldInput, FieldOutput};

/// A pass over a sampled output block.
pub trait FieldLayer: Send + Sync {
    /// Run one layer pass over the batch, updating `output` in place.
    ///
    /// Deactivated indices are skipped by costly computation and keep their
    /// caller-set values (up to block-wide rescaling a layer may apply).
    fn sample(&self, input: &FieldInput, output: &mut FieldOutput) -> Result<(), FieldError>;
}
