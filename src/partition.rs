use serde::Deserialize;
use serde::Serialize;

/// Assignment of every point to exactly one of K clusters.
///
/// Stored as one label per point rather than one member list per cluster,
/// so the partition invariant (disjoint, exhaustive) holds by construction
/// and rebuilding it each iteration reuses a buffer of fixed length N.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition {
    k: usize,
    labels: Vec<usize>,
}

impl Partition {
    /// Every one of `n` points assigned to cluster 0.
    pub fn new(k: usize, n: usize) -> Self {
        debug_assert!(k > 0);
        Self {
            k,
            labels: vec![0; n],
        }
    }
    /// Number of clusters K.
    pub fn k(&self) -> usize {
        self.k
    }
    /// Number of points N.
    pub fn len(&self) -> usize {
        self.labels.len()
    }
    /// True when there are no points to partition.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
    /// Cluster label of every point, indexed by point.
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }
    /// Cluster label of point `i`.
    pub fn label(&self, i: usize) -> usize {
        self.labels[i]
    }
    /// Moves point `i` into cluster `j`.
    pub fn assign(&mut self, i: usize, j: usize) {
        debug_assert!(j < self.k);
        self.labels[i] = j;
    }
    /// Indices of the points in cluster `j`, ascending.
    pub fn members(&self, j: usize) -> impl Iterator<Item = usize> + '_ {
        self.labels
            .iter()
            .enumerate()
            .filter(move |(_, l)| **l == j)
            .map(|(i, _)| i)
    }
    /// Number of points in each cluster.
    pub fn sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.k];
        self.labels.iter().for_each(|l| sizes[*l] += 1);
        sizes
    }
    /// True if no point is assigned to cluster `j`.
    pub fn is_empty_cluster(&self, j: usize) -> bool {
        self.members(j).next().is_none()
    }
    /// Consumes the partition, yielding the label vector.
    pub fn into_labels(self) -> Vec<usize> {
        self.labels
    }
}
