//! Dense voxel volume grids.
//!
//! A grid owns its scalar voxel data and a grid→world transform; everything
//! else about volumes (meshing, booleans, persistence) belongs to the caller.

pub mod grid;

pub use grid::{GridClass, VolumeGrid};
