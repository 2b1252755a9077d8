//! Serial implementation of sampling passes

use crate::errors::FieldError;
use crate::field::Field;
use crate::field::sampling::traits::SamplingOps;
use crate::sample::{FieldInput, FieldOutput};

/// Serial implementation of `SamplingOps`.
pub struct SerialSamplingOps;

impl SerialSamplingOps {
    pub const fn new() -> Self {
        Self
    }
}

impl Default for SerialSamplingOps {
    fn default() -> Self {
        Self::new()
    }
}

impl SamplingOps for SerialSamplingOps {
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

        for (i, value) in output.values.iter_mut().enumerate() {
            let position = input.position(i);
            *value = field.value(&position);
        }

        Ok(())
    }
}
