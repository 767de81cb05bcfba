use super::*;

/// Squared Euclidean distance between two vectors of equal length.
pub fn squared(a: &[Coordinate], b: &[Coordinate]) -> Result<Energy> {
    if a.len() != b.len() {
        return Err(ClusteringError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(a.iter()
        .zip(b.iter())
        .map(|(x, y)| x - y)
        .map(|d| d * d)
        .sum::<Energy>())
}

/// Euclidean distance between two vectors of equal length.
pub fn euclidean(a: &[Coordinate], b: &[Coordinate]) -> Result<Energy> {
    squared(a, b).map(Energy::sqrt)
}
