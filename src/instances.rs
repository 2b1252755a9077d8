//! Multi-instance data: per-instance transforms and colors.

use crate::color::hsv_to_rgb;
use crate::float_types::Real;
use nalgebra::{Matrix4, Translation3};

/// Parallel arrays of per-instance transform matrices and RGB colors.
///
/// The two arrays always have the same length; the index is the instance id.
/// The array is plain data; rendering the instances (or turning them into
/// scene objects) is the caller's business.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InstanceArray {
    matrices: Vec<Matrix4<Real>>,
    colors: Vec<[Real; 3]>,
}

impl InstanceArray {
    pub const fn new() -> Self {
        InstanceArray {
            matrices: Vec::new(),
            colors: Vec::new(),
        }
    }

    /// `count` instances spaced `step` apart along the x axis, colored by a hue
    /// ramp running once around the color wheel.
    pub fn linear_distribution(count: usize, step: Real) -> Self {
        let mut instances = Self::new();

        let mut position: Real = 0.0;
        let mut hue: Real = 0.0;
        let hue_step = if count > 0 { 1.0 / count as Real } else { 0.0 };

        for _ in 0..count {
            let matrix = Translation3::new(position, 0.0, 0.0).to_homogeneous();
            let color = hsv_to_rgb(hue, 1.0, 1.0);
            instances.push(matrix, color);

            position += step;
            hue += hue_step;
        }

        instances
    }

    pub fn push(&mut self, matrix: Matrix4<Real>, color: [Real; 3]) {
        self.matrices.push(matrix);
        self.colors.push(color);
    }

    pub fn len(&self) -> usize {
        self.matrices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matrices.is_empty()
    }

    pub fn matrix(&self, i: usize) -> Option<&Matrix4<Real>> {
        self.matrices.get(i)
    }

    pub fn color(&self, i: usize) -> Option<&[Real; 3]> {
        self.colors.get(i)
    }

    pub fn matrices(&self) -> &[Matrix4<Real>] {
        &self.matrices
    }

    pub fn colors(&self) -> &[[Real; 3]] {
        &self.colors
    }
}
