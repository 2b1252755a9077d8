//! Parallel implementation of sampling passes

use crate::errors::FieldError;
use crate::field::Field;
use crate::field::sampling::traits::SamplingOps;
use crate::sample::{FieldInput, FieldOutput};
use rayon::prelude::*;

/// Parallel implementation of `SamplingOps`.
pub struct ParallelSamplingOps;

impl ParallelSamplingOps {
    pub const fn new() -> Self {
        Self
    }
}

impl Default for ParallelSamplingOps {
    fn default() -> Self {
        Self::new()
    }
}

impl SamplingOps for ParallelSamplingOps {
    fn sample_field<F: Field + ?Sized>(
        &self,
        field: &F,
        input: &FieldInput,
        output: &mut FieldOutput,
    ) -> Result<(), FieldError> {
        if output.values.len() != input.len() {
            return Err(FieldError::LengthMismatch {
                expected: input.len(),
                actual: output.values.len(),
            });
        }

        output
            .values
            .par_iter_mut()
            .enumerate()
            .for_each(|(i, value)| {
                let position = input.position(i);
                *value = field.value(&position);
            });

        Ok(())
    }
}
