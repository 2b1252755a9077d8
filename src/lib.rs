//! Batch **scalar field sampling**: fields are pure functions of 3D position,
//! evaluated over caller-supplied batches of sample points into pre-sized output
//! blocks. On top of the sampling core the crate provides a nearest-neighbor
//! distance layer backed by a k-d tree, dense voxel volume grids, and
//! multi-instance transform/color arrays.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon for multithreaded sampling passes

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod color;
pub mod errors;
pub mod field;
pub mod fieldlist;
pub mod float_types;
pub mod instances;
pub mod layer;
pub mod sample;
pub mod spatial;
pub mod volume;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use errors::FieldError;
pub use field::{CheckerboardField, Field};
pub use fieldlist::FieldList;
pub use instances::InstanceArray;
pub use layer::{FieldLayer, NearestNeighborDistanceLayer};
pub use sample::{FieldInput, FieldOutput};
pub use spatial::KdTree;
pub use volume::{GridClass, VolumeGrid};
