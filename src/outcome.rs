use super::*;
use serde::Deserialize;
use serde::Serialize;

/// Final output of [`Engine::fit`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusteringResult {
    /// Cluster label in `0..K` of every point, indexed by point.
    pub labels: Vec<usize>,
    /// Final centroid of every cluster, indexed by label.
    pub centroids: Matrix,
    /// Sum over all points of the squared distance to their centroid.
    pub inertia: Energy,
    /// Lloyd iterations performed.
    pub iterations: usize,
    /// Whether the loop stopped on the drift check rather than the iteration budget.
    pub converged: bool,
}

impl ClusteringResult {
    /// Number of clusters K.
    pub fn k(&self) -> usize {
        self.centroids.len()
    }
    /// Indices of the points labeled `j`, ascending.
    pub fn members(&self, j: usize) -> Vec<usize> {
        self.labels
            .iter()
            .enumerate()
            .filter(|(_, l)| **l == j)
            .map(|(i, _)| i)
            .collect()
    }
    /// Number of points in each cluster.
    pub fn sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.k()];
        self.labels.iter().for_each(|l| sizes[*l] += 1);
        sizes
    }
    /// Root-mean-square distance of points to their centroid.
    pub fn rms(&self) -> Energy {
        (self.inertia / self.labels.len() as Energy).sqrt()
    }
    /// Label of the centroid nearest to an unseen point.
    pub fn predict(&self, point: &[Coordinate]) -> Result<usize> {
        self.centroids.nearest(point).map(|(j, _)| j)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result() -> ClusteringResult {
        ClusteringResult {
            labels: vec![1, 0, 1, 1],
            centroids: Matrix::from_rows(&[[0., 0.], [10., 10.]]).unwrap(),
            inertia: 16.,
            iterations: 3,
            converged: true,
        }
    }

    #[test]
    fn membership_views() {
        let r = result();
        assert_eq!(r.k(), 2);
        assert_eq!(r.members(1), vec![0, 2, 3]);
        assert_eq!(r.members(0), vec![1]);
        assert_eq!(r.sizes(), vec![1, 3]);
        assert_eq!(r.rms(), 2.);
    }

    #[test]
    fn predict_picks_nearest_centroid() {
        let r = result();
        assert_eq!(r.predict(&[1., -1.]), Ok(0));
        assert_eq!(r.predict(&[9., 12.]), Ok(1));
        assert_eq!(r.predict(&[5., 5.]), Ok(0));
        assert!(matches!(
            r.predict(&[1., 2., 3.]),
            Err(ClusteringError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn serializes_through_json() {
        let r = result();
        let json = serde_json::to_string(&r).unwrap();
        let back = serde_json::from_str::<ClusteringResult>(&json).unwrap();
        assert_eq!(r, back);
    }
}
