//! Batch execution of field sampling passes
//!
//! One pass evaluates a field at every batch index and runs to completion on the
//! calling thread. Indices carry no ordering dependency, so the pass is safe to
//! parallelize; the `parallel` feature swaps in the rayon implementation.

pub mod traits;

#[cfg(not(feature = "parallel"))]
pub mod serial;

#[cfg(feature = "parallel")]
pub mod parallel;

// Re-export core types
pub use traits::SamplingOps;

#[cfg(not(feature = "parallel"))]
pub use serial::SerialSamplingOps;

#[cfg(feature = "parallel")]
pub use parallel::ParallelSamplingOps;

use crate::errors::FieldError;
use crate::field::Field;
use crate::sample::{FieldInput, FieldOutput};

/// Run one sampling pass of `field` over `input`, writing into `output`.
///
/// The output block must be pre-sized to the batch length.
pub fn sample_field<F: Field + ?Sized>(
    field: &F,
    input: &FieldInput,
    output: &mut FieldOutput,
) -> Result<(), FieldError> {
    #[cfg(not(feature = "parallel"))]
    let ops = SerialSamplingOps::new();
    #[cfg(feature = "parallel")]
    let ops = ParallelSamplingOps::new();

    ops.sample_field(field, input, output)
}
