//! Sampling-pass errors
//!
//! Every error here is terminal for the current pass: no partial results are
//! committed and nothing is retried internally. Recovery, if any, belongs to the
//! caller.

use crate::float_types::Real;
use std::fmt::Display;

/// All the possible failures a sampling pass might report
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldError {
    /// (InvalidCellSize) The checkerboard cell size is not a positive finite number
    InvalidCellSize(Real),
    /// (InsufficientPoints) A neighbor query needs at least 2 usable points
    InsufficientPoints { available: usize },
    /// (Allocation) A spatial index or grid buffer could not be allocated
    Allocation,
    /// (LengthMismatch) Input and output batch lengths differ for one pass
    LengthMismatch { expected: usize, actual: usize },
    /// (EmptyGrid) A volume grid dimension is zero
    EmptyGrid,
    /// (CoordsOutOfBounds) A checked voxel access lies outside the grid
    CoordsOutOfBounds { coords: [usize; 3], dims: [usize; 3] },
}

impl Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldError::InvalidCellSize(size) => write!(f, "(InvalidCellSize) The cell size ({}) is not a positive finite number", size),
            FieldError::InsufficientPoints { available } => write!(f, "(InsufficientPoints) A neighbor query needs at least 2 usable points, {} available", available),
            FieldError::Allocation => write!(f, "(Allocation) A spatial index or grid buffer could not be allocated"),
            FieldError::LengthMismatch { expected, actual } => write!(f, "(LengthMismatch) The output block holds {} values but the input batch has {}", actual, expected),
            FieldError::EmptyGrid => write!(f, "(EmptyGrid) A volume grid dimension is zero"),
            FieldError::CoordsOutOfBounds { coords, dims } => write!(f, "(CoordsOutOfBounds) Voxel ({}, {}, {}) lies outside the {}x{}x{} grid", coords[0], coords[1], coords[2], dims[0], dims[1], dims[2]),
        }
    }
}
