use super::*;

/// One intermediate state of the Lloyd loop, handed to an [`Observer`].
#[derive(Debug, Clone, Copy)]
pub enum Step<'a> {
    /// Points were just reassigned to their nearest centroids.
    Assigned {
        iteration: usize,
        partition: &'a Partition,
        centroids: &'a Matrix,
    },
    /// Centroids were just recomputed from the partition.
    Recomputed {
        iteration: usize,
        partition: &'a Partition,
        centroids: &'a Matrix,
    },
}

impl<'a> Step<'a> {
    /// Zero-based Lloyd iteration this step belongs to.
    pub fn iteration(&self) -> usize {
        match *self {
            Self::Assigned { iteration, .. } | Self::Recomputed { iteration, .. } => iteration,
        }
    }
    /// Cluster membership at this step.
    pub fn partition(&self) -> &'a Partition {
        match *self {
            Self::Assigned { partition, .. } | Self::Recomputed { partition, .. } => partition,
        }
    }
    /// Centroid positions at this step.
    pub fn centroids(&self) -> &'a Matrix {
        match *self {
            Self::Assigned { centroids, .. } | Self::Recomputed { centroids, .. } => centroids,
        }
    }
}

/// Receives every intermediate [`Step`] of a fit, e.g. to draw it.
///
/// Observation is one-way: nothing an observer does feeds back into
/// the clustering.
pub trait Observer {
    fn observe(&mut self, step: &Step<'_>);
}

/// Observer that ignores every step.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Observer for Silent {
    fn observe(&mut self, _: &Step<'_>) {}
}

impl<F> Observer for F
where
    F: FnMut(&Step<'_>),
{
    fn observe(&mut self, step: &Step<'_>) {
        self(step)
    }
}
