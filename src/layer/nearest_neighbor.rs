//! A layer writing each point's distance to its nearest batch neighbor.

use crate::errors::FieldError;
use crate::float_types::Real;
use crate::layer::FieldLayer;
use crate::sample::{FieldInput, FieldOutput};
use crate::spatial::KdTree;
use log::trace;
use nalgebra::Point3;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// For every active index, the Euclidean distance to the nearest *other* point
/// in the batch, rescaled so the largest distance maps to 1.0.
///
/// The pass is two-phase: distances first (independent per index), then one
/// block-wide rescale by `1 / max`. If every computed distance is exactly zero
/// (all points coincident), the rescale is skipped and the raw zeros remain.
///
/// Deactivated indices are never queried but still serve as neighbor
/// candidates for active ones. A query with fewer than 2 usable points fails
/// with [`FieldError::InsufficientPoints`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestNeighborDistanceLayer;

impl NearestNeighborDistanceLayer {
    pub const fn new() -> Self {
        Self
    }
}

impl FieldLayer for NearestNeighborDistanceLayer {
    fn sample(&self, input: &FieldInput, output: &mut FieldOutput) -> Result<(), FieldError> {
        // check if outputs are prepared
        if output.values.is_empty() {
            return Ok(());
        }

        let count = input.len();
        if output.values.len() != count || output.deactivated.len() != count {
            return Err(FieldError::LengthMismatch {
                expected: count,
                actual: output.values.len(),
            });
        }

        // nothing to query
        if output.deactivated.iter().all(|deactivated| *deactivated) {
            return Ok(());
        }

        if count < 2 {
            return Err(FieldError::InsufficientPoints {
                available: count.saturating_sub(1),
            });
        }

        // One index over the whole batch; queries exclude their own slot.
        // Deactivated points stay insertable as neighbor candidates.
        let positions: Vec<Point3<Real>> = (0..count).map(|i| input.position(i)).collect();
        let tree = KdTree::build(&positions)?;

        let distances = raw_distances(&tree, &positions, &output.deactivated)?;

        let mut max_value: Real = 0.0;
        for (i, distance) in distances.iter().enumerate() {
            if let Some(value) = distance {
                if *value > max_value {
                    max_value = *value;
                }
                output.values[i] = *value;
            }
        }

        trace!("nearest-neighbor pass over {count} points, max distance {max_value}");

        // apparently nothing found
        if max_value == 0.0 {
            return Ok(());
        }

        // normalize values
        let factor = 1.0 / max_value;
        for value in output.values.iter_mut() {
            *value *= factor;
        }

        Ok(())
    }
}

/// Phase 1: raw nearest-neighbor distance per active index, `None` for
/// deactivated ones.
#[cfg(not(feature = "parallel"))]
fn raw_distances(
    tree: &KdTree,
    positions: &[Point3<Real>],
    deactivated: &[bool],
) -> Result<Vec<Option<Real>>, FieldError> {
    positions
        .iter()
        .enumerate()
        .map(|(i, position)| nearest_distance(tree, position, i, deactivated[i]))
        .collect()
}

/// Phase 1, parallel: indices are independent, so the map runs across threads.
#[cfg(feature = "parallel")]
fn raw_distances(
    tree: &KdTree,
    positions: &[Point3<Real>],
    deactivated: &[bool],
) -> Result<Vec<Option<Real>>, FieldError> {
    positions
        .par_iter()
        .enumerate()
        .map(|(i, position)| nearest_distance(tree, position, i, deactivated[i]))
        .collect()
}

fn nearest_distance(
    tree: &KdTree,
    position: &Point3<Real>,
    index: usize,
    deactivated: bool,
) -> Result<Option<Real>, FieldError> {
    if deactivated {
        return Ok(None);
    }

    let (_, distance) = tree
        .nearest_excluding(position, index)
        .ok_or(FieldError::InsufficientPoints {
            available: tree.len().saturating_sub(1),
        })?;

    Ok(Some(distance))
}
