//! Photon KD-Tree

use rt_core::base::*;
use rt_core::geometry::*;
use rt_core::photon::Photon;
use std::cmp::Ordering;
use std::ops::Index;

/// Sentinel for a missing child node.
const NO_NODE: i32 = -1;

/// An interior or leaf node of the photon tree.
#[derive(Copy, Clone)]
struct KdNode {
    /// Index of the photon stored at this node.
    photon: u32,

    /// The split axis.
    axis: u8,

    /// Index of the left child node, or `NO_NODE`.
    left: i32,

    /// Index of the right child node, or `NO_NODE`.
    right: i32,
}

/// A point kd-tree over photon deposits supporting radius-bounded neighbour
/// queries. Insertions are valid only before `build()`; after the one-time
/// build the tree is frozen and may be queried concurrently from multiple
/// threads.
pub struct PhotonTree {
    /// The stored photons.
    photons: Vec<Photon>,

    /// The tree nodes; empty until `build()` runs.
    nodes: Vec<KdNode>,

    /// Index of the root node, or `NO_NODE` for an empty tree.
    root: i32,

    /// Set once `build()` has run.
    built: bool,
}

impl PhotonTree {
    /// Create a new empty `PhotonTree`.
    pub fn new() -> Self {
        Self {
            photons: Vec::new(),
            nodes: Vec::new(),
            root: NO_NODE,
            built: false,
        }
    }

    /// Create a new empty `PhotonTree` with storage reserved for the given
    /// number of photons.
    ///
    /// * `capacity` - Expected number of photons.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            photons: Vec::with_capacity(capacity),
            nodes: Vec::new(),
            root: NO_NODE,
            built: false,
        }
    }

    /// Returns the number of stored photons.
    pub fn len(&self) -> usize {
        self.photons.len()
    }

    /// Returns true if no photons are stored.
    pub fn is_empty(&self) -> bool {
        self.photons.is_empty()
    }

    /// Insert a photon. Valid only before `build()`.
    ///
    /// * `photon` - The photon to insert.
    pub fn push(&mut self, photon: Photon) {
        assert!(!self.built, "PhotonTree::push() called after build()");
        self.photons.push(photon);
    }

    /// Build the tree over all inserted photons. One-time and irreversible;
    /// afterwards the tree is read-only.
    pub fn build(&mut self) {
        assert!(!self.built, "PhotonTree::build() called twice");
        self.built = true;

        let n = self.photons.len();
        self.nodes = Vec::with_capacity(n);
        let mut indices: Vec<u32> = (0..n as u32).collect();
        self.root = Self::build_range(&self.photons, &mut self.nodes, &mut indices);

        debug!("Built photon tree over {} photons", n);
    }

    /// Recursively build the subtree over the given photon indices and return
    /// the node index of its root. The split axis is the largest extent of
    /// the range's bounding box; the median photon along it becomes the node.
    ///
    /// * `photons` - All stored photons.
    /// * `nodes`   - The node storage.
    /// * `indices` - Indices of the photons in this subtree.
    fn build_range(photons: &[Photon], nodes: &mut Vec<KdNode>, indices: &mut [u32]) -> i32 {
        if indices.is_empty() {
            return NO_NODE;
        }

        let bounds = indices.iter().fold(Bounds3f::empty(), |b, i| {
            b.union_point(&photons[*i as usize].p)
        });
        let axis = bounds.diagonal().max_dimension();

        let median = indices.len() / 2;
        order_stat::kth_by(indices, median, |a, b| {
            let pa = photons[*a as usize].p[axis];
            let pb = photons[*b as usize].p[axis];
            pa.partial_cmp(&pb).unwrap_or(Ordering::Equal)
        });
        let photon = indices[median];

        let (left_indices, rest) = indices.split_at_mut(median);
        let right_indices = &mut rest[1..];

        let left = Self::build_range(photons, nodes, left_indices);
        let right = Self::build_range(photons, nodes, right_indices);

        nodes.push(KdNode {
            photon,
            axis: axis as u8,
            left,
            right,
        });
        (nodes.len() - 1) as i32
    }

    /// Returns the indices of all photons within the given radius of a point.
    /// Valid only after `build()`.
    ///
    /// * `p`      - The query point.
    /// * `radius` - The search radius.
    pub fn query(&self, p: &Point3f, radius: Float) -> Vec<u32> {
        assert!(self.built, "PhotonTree::query() called before build()");

        let mut found = Vec::new();
        if self.root == NO_NODE || !(radius > 0.0) {
            return found;
        }

        let radius_squared = radius * radius;
        let mut stack = vec![self.root];
        while let Some(node_index) = stack.pop() {
            let node = self.nodes[node_index as usize];
            let photon = &self.photons[node.photon as usize];

            if photon.p.distance_squared(*p) <= radius_squared {
                found.push(node.photon);
            }

            // Visit the near side unconditionally; the far side only if the
            // search ball straddles the splitting plane.
            let axis = node.axis as usize;
            let delta = p[axis] - photon.p[axis];
            let (near, far) = if delta < 0.0 {
                (node.left, node.right)
            } else {
                (node.right, node.left)
            };
            if near != NO_NODE {
                stack.push(near);
            }
            if far != NO_NODE && delta * delta <= radius_squared {
                stack.push(far);
            }
        }

        found
    }
}

impl Default for PhotonTree {
    /// Create a new empty `PhotonTree`.
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for PhotonTree {
    type Output = Photon;

    /// Returns the photon at the given index.
    ///
    /// * `i` - The index.
    fn index(&self, i: usize) -> &Self::Output {
        &self.photons[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rt_core::rng::RNG;
    use rt_core::spectrum::Spectrum;
    use proptest::prelude::*;

    fn photon_at(p: Point3f) -> Photon {
        Photon::new(p, Vector3f::new(0.0, 0.0, 1.0), Spectrum::new(1.0))
    }

    fn brute_force(photons: &[Photon], p: &Point3f, radius: Float) -> Vec<u32> {
        photons
            .iter()
            .enumerate()
            .filter(|(_, ph)| ph.p.distance_squared(*p) <= radius * radius)
            .map(|(i, _)| i as u32)
            .collect()
    }

    #[test]
    fn query_finds_neighbours() {
        let mut tree = PhotonTree::with_capacity(4);
        tree.push(photon_at(Point3f::new(0.0, 0.0, 0.0)));
        tree.push(photon_at(Point3f::new(0.5, 0.0, 0.0)));
        tree.push(photon_at(Point3f::new(0.0, 2.0, 0.0)));
        tree.push(photon_at(Point3f::new(5.0, 5.0, 5.0)));
        tree.build();

        let mut found = tree.query(&Point3f::zero(), 1.0);
        found.sort_unstable();
        assert_eq!(found, vec![0, 1]);
    }

    #[test]
    fn empty_tree_query_is_empty() {
        let mut tree = PhotonTree::new();
        tree.build();
        assert!(tree.query(&Point3f::zero(), 1.0).is_empty());
        assert!(tree.is_empty());
    }

    #[test]
    fn zero_radius_finds_nothing() {
        let mut tree = PhotonTree::new();
        tree.push(photon_at(Point3f::zero()));
        tree.build();
        assert!(tree.query(&Point3f::new(1.0, 0.0, 0.0), 0.0).is_empty());
    }

    #[test]
    #[should_panic]
    fn push_after_build_panics() {
        let mut tree = PhotonTree::new();
        tree.push(photon_at(Point3f::zero()));
        tree.build();
        tree.push(photon_at(Point3f::zero()));
    }

    #[test]
    #[should_panic]
    fn query_before_build_panics() {
        let tree = PhotonTree::new();
        tree.query(&Point3f::zero(), 1.0);
    }

    #[test]
    fn matches_brute_force_on_random_points() {
        let mut rng = RNG::new(1234);
        let photons: Vec<Photon> = (0..500)
            .map(|_| {
                photon_at(Point3f::new(
                    rng.uniform_float() * 10.0,
                    rng.uniform_float() * 10.0,
                    rng.uniform_float() * 10.0,
                ))
            })
            .collect();

        let mut tree = PhotonTree::with_capacity(photons.len());
        for ph in photons.iter() {
            tree.push(ph.clone());
        }
        tree.build();

        for _ in 0..50 {
            let p = Point3f::new(
                rng.uniform_float() * 10.0,
                rng.uniform_float() * 10.0,
                rng.uniform_float() * 10.0,
            );
            let mut found = tree.query(&p, 1.5);
            found.sort_unstable();
            let mut expected = brute_force(&photons, &p, 1.5);
            expected.sort_unstable();
            assert_eq!(found, expected);
        }
    }

    proptest! {
        #[test]
        fn query_agrees_with_brute_force(
            points in prop::collection::vec((0.0f32..4.0, 0.0f32..4.0, 0.0f32..4.0), 1..64),
            qx in 0.0f32..4.0,
            qy in 0.0f32..4.0,
            qz in 0.0f32..4.0,
            radius in 0.1f32..2.0,
        ) {
            let photons: Vec<Photon> = points
                .iter()
                .map(|(x, y, z)| photon_at(Point3f::new(*x, *y, *z)))
                .collect();

            let mut tree = PhotonTree::with_capacity(photons.len());
            for ph in photons.iter() {
                tree.push(ph.clone());
            }
            tree.build();

            let q = Point3f::new(qx, qy, qz);
            let mut found = tree.query(&q, radius);
            found.sort_unstable();
            let mut expected = brute_force(&photons, &q, radius);
            expected.sort_unstable();
            prop_assert_eq!(found, expected);
        }
    }
}
