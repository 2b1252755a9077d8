//! A k-d tree over indexed 3D points.
//!
//! The tree is a transient, pass-scoped structure: built once over a batch of
//! positions, queried, and discarded. Each entry keeps its batch index so a
//! query can exclude the query point's own slot, which also makes duplicate
//! positions unambiguous (only the slot is excluded, not the coordinates).

use crate::errors::FieldError;
use crate::float_types::Real;
use nalgebra::Point3;

struct KdNode {
    position: Point3<Real>,
    index: usize,
    left: Option<Box<KdNode>>,
    right: Option<Box<KdNode>>,
}

/// A balanced 3-axis k-d tree supporting nearest-neighbor queries.
pub struct KdTree {
    root: Option<Box<KdNode>>,
    len: usize,
}

impl KdTree {
    /// Build a balanced tree over `points`; entry `i` keeps batch index `i`.
    ///
    /// Construction failure under resource exhaustion is reported as
    /// [`FieldError::Allocation`].
    pub fn build(points: &[Point3<Real>]) -> Result<Self, FieldError> {
        let mut entries: Vec<(Point3<Real>, usize)> = Vec::new();
        entries
            .try_reserve_exact(points.len())
            .map_err(|_| FieldError::Allocation)?;
        entries.extend(points.iter().copied().zip(0..));

        let len = entries.len();
        let root = Self::build_node(&mut entries, 0);

        Ok(KdTree { root, len })
    }

    /// Recursively build one node by median partition on the cycling axis.
    fn build_node(entries: &mut [(Point3<Real>, usize)], depth: usize) -> Option<Box<KdNode>> {
        if entries.is_empty() {
            return None;
        }

        let axis = depth % 3;
        let mid = entries.len() / 2;
        entries.select_nth_unstable_by(mid, |a, b| a.0[axis].total_cmp(&b.0[axis]));

        let (position, index) = entries[mid];
        let (before, rest) = entries.split_at_mut(mid);
        let after = &mut rest[1..];

        Some(Box::new(KdNode {
            position,
            index,
            left: Self::build_node(before, depth + 1),
            right: Self::build_node(after, depth + 1),
        }))
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Find the entry closest to `query`, ignoring the entry with batch index
    /// `exclude`. Returns the winning batch index and its Euclidean distance,
    /// or `None` if no other entry exists.
    ///
    /// Ties keep the first candidate in traversal order, so results are
    /// reproducible for a given batch.
    pub fn nearest_excluding(&self, query: &Point3<Real>, exclude: usize) -> Option<(usize, Real)> {
        let mut best: Option<(usize, Real)> = None;

        if let Some(root) = &self.root {
            Self::search(root, query, exclude, 0, &mut best);
        }

        best.map(|(index, dist_sq)| (index, dist_sq.sqrt()))
    }

    /// Depth-first search tracking the best squared distance, pruning subtrees
    /// whose splitting plane is farther away than the current best.
    fn search(
        node: &KdNode,
        query: &Point3<Real>,
        exclude: usize,
        depth: usize,
        best: &mut Option<(usize, Real)>,
    ) {
        if node.index != exclude {
            let dist_sq = (node.position - *query).norm_squared();
            let better = match best {
                Some((_, best_sq)) => dist_sq < *best_sq,
                None => true,
            };
            if better {
                *best = Some((node.index, dist_sq));
            }
        }

        let axis = depth % 3;
        let diff = query[axis] - node.position[axis];

        let (near, far) = if diff < 0.0 {
            (&node.left, &node.right)
        } else {
            (&node.right, &node.left)
        };

        if let Some(child) = near {
            Self::search(child, query, exclude, depth + 1, best);
        }

        // The far subtree can only hold a closer entry if the splitting plane
        // itself is within the best distance.
        let revisit_far = match best {
            Some((_, best_sq)) => diff * diff <= *best_sq,
            None => true,
        };
        if revisit_far {
            if let Some(child) = far {
                Self::search(child, query, exclude, depth + 1, best);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Brute force nearest-excluding for correctness checking.
    fn brute_force(points: &[Point3<Real>], query: &Point3<Real>, exclude: usize) -> Option<(usize, Real)> {
        let mut best: Option<(usize, Real)> = None;
        for (i, p) in points.iter().enumerate() {
            if i == exclude {
                continue;
            }
            let dist_sq = (p - query).norm_squared();
            if best.is_none_or(|(_, b)| dist_sq < b) {
                best = Some((i, dist_sq));
            }
        }
        best.map(|(i, d)| (i, d.sqrt()))
    }

    fn fixed_points() -> Vec<Point3<Real>> {
        // Deterministic scatter, includes a duplicate pair and collinear runs.
        let mut points = Vec::new();
        for i in 0..40 {
            let i = i as Real;
            points.push(Point3::new(
                (i * 17.0) % 31.0 - 15.0,
                (i * 7.0) % 23.0 - 11.0,
                (i * 13.0) % 29.0 - 14.0,
            ));
        }
        points.push(Point3::new(1.0, 2.0, 3.0));
        points.push(Point3::new(1.0, 2.0, 3.0));
        points
    }

    #[test]
    fn agrees_with_brute_force() {
        let points = fixed_points();
        let tree = KdTree::build(&points).unwrap();
        assert_eq!(tree.len(), points.len());

        for (i, p) in points.iter().enumerate() {
            let (_, tree_dist) = tree.nearest_excluding(p, i).unwrap();
            let (_, brute_dist) = brute_force(&points, p, i).unwrap();
            assert!(
                (tree_dist - brute_dist).abs() < 1e-12,
                "query {}: tree {} vs brute force {}",
                i,
                tree_dist,
                brute_dist
            );
        }
    }

    #[test]
    fn duplicate_positions_have_zero_distance() {
        let points = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(10.0, 0.0, 0.0),
        ];
        let tree = KdTree::build(&points).unwrap();

        let (index, dist) = tree.nearest_excluding(&points[0], 0).unwrap();
        assert_eq!(index, 1);
        assert_eq!(dist, 0.0);
    }

    #[test]
    fn excluding_the_only_entry_yields_none() {
        let points = vec![Point3::new(4.0, 5.0, 6.0)];
        let tree = KdTree::build(&points).unwrap();

        assert_eq!(tree.nearest_excluding(&points[0], 0), None);
    }

    #[test]
    fn empty_tree() {
        let tree = KdTree::build(&[]).unwrap();
        assert!(tree.is_empty());
        assert_eq!(tree.nearest_excluding(&Point3::origin(), 0), None);
    }
}
