//! Input batches and output blocks forming the call boundary of a sampling pass.

use crate::float_types::Real;
use nalgebra::{Matrix4, Point3};

/// An ordered batch of sample positions plus a batch transform.
///
/// Output index `i` always corresponds to input index `i`; the order carries no
/// further semantics. The transform (identity by default) is applied to each
/// position before a field is evaluated, so callers can hand over positions in
/// their own space.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldInput {
    pub positions: Vec<Point3<Real>>,
    pub transform: Matrix4<Real>,
}

impl FieldInput {
    /// Batch over the given positions with an identity transform.
    pub fn new(positions: Vec<Point3<Real>>) -> Self {
        FieldInput {
            positions,
            transform: Matrix4::identity(),
        }
    }

    /// Batch of `count` positions starting at `origin`, spaced `step` apart
    /// along the x axis.
    pub fn line(origin: Point3<Real>, step: Real, count: usize) -> Self {
        let positions = (0..count)
            .map(|i| Point3::new(origin.x + step * i as Real, origin.y, origin.z))
            .collect();
        Self::new(positions)
    }

    /// Replace the batch transform.
    #[must_use]
    pub fn with_transform(mut self, transform: Matrix4<Real>) -> Self {
        self.transform = transform;
        self
    }

    /// The transformed position at batch index `i`.
    #[inline]
    pub fn position(&self, i: usize) -> Point3<Real> {
        self.transform.transform_point(&self.positions[i])
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// The output block of one sampling pass: one scalar per batch index plus a
/// per-index deactivation flag.
///
/// A deactivated index is skipped by costly computation and keeps whatever
/// value the caller left in its slot.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldOutput {
    pub values: Vec<Real>,
    pub deactivated: Vec<bool>,
}

impl FieldOutput {
    /// Output block pre-sized to `len` indices, zero-valued and fully active.
    pub fn sized(len: usize) -> Self {
        FieldOutput {
            values: vec![0.0; len],
            deactivated: vec![false; len],
        }
    }

    /// Flag index `i` as deactivated.
    pub fn deactivate(&mut self, i: usize) {
        self.deactivated[i] = true;
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
