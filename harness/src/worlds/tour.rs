//! Tour planning over a distance matrix.
//!
//! A node is the path travelled so far. Successors extend the path to any
//! location with a positive edge from the current endpoint that has not
//! been visited yet; the objective prefers the strictly shorter total
//! distance, so an exhaustive drive returns a shortest simple path.

use cairn_search::contract::SearchSpaceV1;
use cairn_search::engine::TreeSearchV1;
use cairn_search::frontier::ExploreOrder;

use crate::contract::{DecoderV1, EncodedSearchV1};

/// A square matrix of edge weights; `0` means no edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrixV1 {
    weights: Vec<Vec<u64>>,
}

impl DistanceMatrixV1 {
    /// Build from rows. Returns `None` unless the matrix is square.
    #[must_use]
    pub fn from_rows(weights: Vec<Vec<u64>>) -> Option<Self> {
        let side = weights.len();
        if weights.iter().any(|row| row.len() != side) {
            return None;
        }
        Some(Self { weights })
    }

    /// Number of locations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Whether the matrix has no locations at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Edge weight from `from` to `to`; `0` means unconnected.
    #[must_use]
    pub fn weight(&self, from: usize, to: usize) -> u64 {
        self.weights[from][to]
    }
}

/// Total edge distance along `path`.
#[must_use]
pub fn path_distance(distances: &DistanceMatrixV1, path: &[usize]) -> u64 {
    path.windows(2).map(|leg| distances.weight(leg[0], leg[1])).sum()
}

/// Space of simple paths toward a target location.
#[derive(Debug)]
pub struct TourSpaceV1 {
    distances: DistanceMatrixV1,
    target: usize,
}

impl TourSpaceV1 {
    #[must_use]
    pub fn new(distances: DistanceMatrixV1, target: usize) -> Self {
        Self { distances, target }
    }

    /// The matrix this space routes over.
    #[must_use]
    pub fn distances(&self) -> &DistanceMatrixV1 {
        &self.distances
    }
}

impl SearchSpaceV1 for TourSpaceV1 {
    type Node = Vec<usize>;

    fn successors(&self, path: &Self::Node) -> Vec<Self::Node> {
        let Some(&current) = path.last() else {
            return Vec::new();
        };
        let mut children = Vec::new();
        for next in 0..self.distances.len() {
            if self.distances.weight(current, next) > 0 && !path.contains(&next) {
                let mut child = path.clone();
                child.push(next);
                children.push(child);
            }
        }
        children
    }

    fn is_goal(&self, path: &Self::Node) -> bool {
        path.last() == Some(&self.target)
    }

    fn improves(&self, candidate: &Self::Node, incumbent: &Self::Node) -> bool {
        path_distance(&self.distances, candidate) < path_distance(&self.distances, incumbent)
    }
}

/// Decoder to the travelled path.
///
/// `None` decodes to an empty path.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathDecoderV1;

impl DecoderV1 for PathDecoderV1 {
    type Node = Vec<usize>;
    type Answer = Vec<usize>;

    fn decode(&self, node: Option<&Self::Node>) -> Vec<usize> {
        node.cloned().unwrap_or_default()
    }
}

/// Configure a depth-first search for the shortest simple path
/// from `from` to `to`.
#[must_use]
pub fn encode_tour(
    distances: DistanceMatrixV1,
    from: usize,
    to: usize,
) -> EncodedSearchV1<TourSpaceV1, PathDecoderV1> {
    let search = TreeSearchV1::new(
        vec![from],
        TourSpaceV1::new(distances, to),
        ExploreOrder::DepthFirst,
    );
    EncodedSearchV1 {
        world_id: "tour",
        search,
        decoder: PathDecoderV1,
    }
}
