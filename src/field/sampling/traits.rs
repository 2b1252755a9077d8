//! Traits defining sampling pass execution for dependency inversion

use crate::errors::FieldError;
use crate::field::Field;
use crate::sample::{FieldInput, FieldOutput};

/// Core sampling pass execution trait
pub trait SamplingOps {
    /// Evaluate `field` at every batch index of `input`, writing one value per
    /// index into `output`.
    fn sample_field<F: Field + ?Sized>(
        &self,
        field: &F,
        input: &FieldInput,
        output: &mut FieldOutput,
    ) -> Result<(), FieldError>;
}
