use super::*;
use serde::Deserialize;
use serde::Serialize;

/// Row-major storage for N vectors of a shared dimensionality M.
///
/// Used both for the dataset being clustered and for the K centroids.
/// Rows live in one contiguous buffer so that a run allocates its
/// centroid storage once per iteration and never per point.
///
/// # Invariants
///
/// - `coords.len() == n * dims`
/// - every coordinate is finite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    dims: usize,
    coords: Vec<Coordinate>,
}

/// The points being clustered, fixed for the duration of a run.
pub type Dataset = Matrix;

impl Matrix {
    /// Builds a matrix from rows, rejecting empty, ragged or non-finite input.
    pub fn from_rows<R>(rows: &[R]) -> Result<Self>
    where
        R: AsRef<[Coordinate]>,
    {
        let dims = rows
            .first()
            .map(|r| AsRef::<[Coordinate]>::as_ref(r).len())
            .ok_or_else(|| ClusteringError::invalid("dataset is empty"))?;
        let mut coords = Vec::with_capacity(rows.len() * dims);
        for (i, row) in rows.iter().enumerate() {
            let row: &[Coordinate] = row.as_ref();
            if row.len() != dims {
                return Err(ClusteringError::invalid(format!(
                    "point {} has {} features, expected {}",
                    i,
                    row.len(),
                    dims
                )));
            }
            coords.extend_from_slice(row);
        }
        Self::from_flat(dims, coords)
    }

    /// Builds a matrix from a row-major buffer of `n * dims` coordinates.
    ///
    /// Every coordinate must be finite and no larger in magnitude than
    /// [`Matrix::limit`], which keeps every squared distance and the summed
    /// inertia of the dataset below `Coordinate::MAX`.
    pub fn from_flat(dims: usize, coords: Vec<Coordinate>) -> Result<Self> {
        if coords.is_empty() {
            return Err(ClusteringError::invalid("dataset is empty"));
        }
        if dims == 0 {
            return Err(ClusteringError::invalid("points have zero features"));
        }
        if coords.len() % dims != 0 {
            return Err(ClusteringError::invalid(format!(
                "{} coordinates do not split into rows of {}",
                coords.len(),
                dims
            )));
        }
        if let Some(i) = coords.iter().position(|x| !x.is_finite()) {
            return Err(ClusteringError::invalid(format!(
                "point {} has a non-finite feature",
                i / dims
            )));
        }
        let limit = Self::limit(coords.len());
        if let Some(i) = coords.iter().position(|x| x.abs() > limit) {
            return Err(ClusteringError::invalid(format!(
                "point {} has a feature beyond {:e}",
                i / dims,
                limit
            )));
        }
        Ok(Self { dims, coords })
    }

    /// Largest coordinate magnitude accepted for `size` coordinates in total.
    ///
    /// Two points within the limit differ by at most `2 * limit` per axis, so
    /// summing `size` squared differences stays under `4 * size * limit²`.
    pub fn limit(size: usize) -> Coordinate {
        (Coordinate::MAX / (4. * size.max(1) as Coordinate)).sqrt()
    }

    /// Number of rows (N for a dataset, K for centroids).
    pub fn len(&self) -> usize {
        self.coords.len() / self.dims
    }
    /// Always false for a validated matrix; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }
    /// Dimensionality M shared by every row.
    pub fn dims(&self) -> usize {
        self.dims
    }
    /// Row `i` as a feature vector.
    pub fn row(&self, i: usize) -> &[Coordinate] {
        &self.coords[i * self.dims..(i + 1) * self.dims]
    }
    /// Iterates rows in index order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Coordinate]> + '_ {
        self.coords.chunks_exact(self.dims)
    }
    /// Copies rows out as owned vectors.
    pub fn to_vecs(&self) -> Vec<Vec<Coordinate>> {
        self.rows().map(<[Coordinate]>::to_vec).collect()
    }

    /// Gathers the given rows, in order, into a new matrix.
    pub(crate) fn select(&self, indices: impl IntoIterator<Item = usize>) -> Self {
        let coords = indices
            .into_iter()
            .flat_map(|i| self.row(i).iter().copied())
            .collect();
        Self {
            dims: self.dims,
            coords,
        }
    }

    /// Assembles a matrix from rows already known to share `dims`.
    pub(crate) fn stack(dims: usize, rows: impl IntoIterator<Item = Vec<Coordinate>>) -> Self {
        let coords = rows.into_iter().flatten().collect::<Vec<_>>();
        debug_assert!(coords.len() % dims == 0);
        Self { dims, coords }
    }

    /// Index and distance of the row nearest to `x`. Ties go to the lowest index.
    pub fn nearest(&self, x: &[Coordinate]) -> Result<(usize, Energy)> {
        if x.len() != self.dims {
            return Err(ClusteringError::DimensionMismatch {
                left: x.len(),
                right: self.dims,
            });
        }
        let mut best = (0, Energy::INFINITY);
        for (j, c) in self.rows().enumerate() {
            let d = euclidean(c, x)?;
            if d < best.1 {
                best = (j, d);
            }
        }
        Ok(best)
    }
}

impl TryFrom<Vec<Vec<Coordinate>>> for Matrix {
    type Error = ClusteringError;
    fn try_from(rows: Vec<Vec<Coordinate>>) -> Result<Self> {
        Self::from_rows(&rows)
    }
}

impl<const M: usize> TryFrom<&[[Coordinate; M]]> for Matrix {
    type Error = ClusteringError;
    fn try_from(rows: &[[Coordinate; M]]) -> Result<Self> {
        Self::from_rows(rows)
    }
}
