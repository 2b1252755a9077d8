//! A field subdividing space into a 3D checkerboard pattern.

use crate::errors::FieldError;
use crate::field::Field;
use crate::float_types::Real;
use nalgebra::Point3;

/// A field alternating between 0.0 and 1.0 in cells of edge length `cell_size`.
///
/// Each axis is mapped to a square wave of period `cell_size`; the three axis
/// parities are XOR-combined, so any two cells sharing a face differ.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckerboardField {
    cell_size: Real,
    /// half of `cell_size`, precomputed for `cell_bit`
    half_size: Real,
}

impl CheckerboardField {
    /// Cell edge length used by [`Default`].
    pub const DEFAULT_CELL_SIZE: Real = 200.0;

    /// Create a checkerboard with the given cell edge length.
    ///
    /// The size must be a positive finite number, otherwise
    /// [`FieldError::InvalidCellSize`] is returned.
    pub fn new(cell_size: Real) -> Result<Self, FieldError> {
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(FieldError::InvalidCellSize(cell_size));
        }
        Ok(CheckerboardField {
            cell_size,
            half_size: cell_size * 0.5,
        })
    }

    pub const fn cell_size(&self) -> Real {
        self.cell_size
    }

    /// Square wave along one axis: true on the upper half of the cell.
    ///
    /// Negative remainders are wrapped into `[0, cell_size)` so the pattern
    /// continues seamlessly across the origin.
    #[inline]
    fn cell_bit(&self, coord: Real) -> bool {
        let mut remainder = coord % self.cell_size;

        if remainder < 0.0 {
            remainder += self.cell_size;
        }

        remainder >= self.half_size
    }
}

impl Default for CheckerboardField {
    fn default() -> Self {
        CheckerboardField {
            cell_size: Self::DEFAULT_CELL_SIZE,
            half_size: Self::DEFAULT_CELL_SIZE * 0.5,
        }
    }
}

impl Field for CheckerboardField {
    fn value(&self, position: &Point3<Real>) -> Real {
        let x_bit = self.cell_bit(position.x);
        let y_bit = self.cell_bit(position.y);
        let z_bit = self.cell_bit(position.z);

        let xy_bit = x_bit != y_bit;

        if xy_bit != z_bit { 1.0 } else { 0.0 }
    }
}
