//! An ordered sampling pipeline: one base field plus a stack of layers.

use crate::errors::FieldError;
use crate::field::{Field, sample_field};
use crate::layer::FieldLayer;
use crate::sample::{FieldInput, FieldOutput};
use log::debug;

/// A base field followed by zero or more layers, sampled in one call.
///
/// The base field fills the output block, then each layer runs over the block
/// in insertion order. The whole list is one sampling pass: any failure is
/// terminal and no partial output is returned.
pub struct FieldList {
    field: Box<dyn Field>,
    layers: Vec<Box<dyn FieldLayer>>,
}

impl FieldList {
    pub fn new(field: impl Field + 'static) -> Self {
        FieldList {
            field: Box::new(field),
            layers: Vec::new(),
        }
    }

    /// Append a layer to the end of the stack.
    #[must_use]
    pub fn with_layer(mut self, layer: impl FieldLayer + 'static) -> Self {
        self.layers.push(Box::new(layer));
        self
    }

    pub fn push_layer(&mut self, layer: impl FieldLayer + 'static) {
        self.layers.push(Box::new(layer));
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Sample the list over `input`, returning a freshly sized output block.
    pub fn sample(&self, input: &FieldInput) -> Result<FieldOutput, FieldError> {
        debug!(
            "sampling field list: {} positions, {} layers",
            input.len(),
            self.layers.len()
        );

        let mut output = FieldOutput::sized(input.len());
        self.sample_into(input, &mut output)?;
        Ok(output)
    }

    /// Sample the list into a caller-owned output block, preserving its
    /// deactivation flags.
    pub fn sample_into(
        &self,
        input: &FieldInput,
        output: &mut FieldOutput,
    ) -> Result<(), FieldError> {
        sample_field(self.field.as_ref(), input, output)?;

        for layer in &self.layers {
            layer.sample(input, output)?;
        }

        Ok(())
    }
}
