//! Spatial acceleration structures for nearest-neighbor queries.

pub mod kdtree;

pub use kdtree::KdTree;
