//! Deterministic datasets for unit tests.
use super::*;

/// `k` tight blobs of `per` points in `dims` dimensions.
///
/// Blob `b` is centered at `100 * b` on every axis and owns rows
/// `b * per..(b + 1) * per`; each point sits within half a unit of its center.
pub fn blobs(k: usize, per: usize, dims: usize) -> Dataset {
    let coords = (0..k)
        .flat_map(|b| (0..per).map(move |i| (b, i)))
        .flat_map(|(b, i)| (0..dims).map(move |d| (b, i, d)))
        .map(|(b, i, d)| 100. * b as Coordinate + jitter(i, d))
        .collect::<Vec<_>>();
    Dataset::from_flat(dims, coords).expect("blobs are non-empty")
}

/// Five points at (0, 0) followed by five at (10, 10).
pub fn separated() -> Dataset {
    let rows = [[0., 0.]; 5]
        .into_iter()
        .chain([[10., 10.]; 5])
        .collect::<Vec<_>>();
    Dataset::from_rows(&rows).expect("rows are non-empty")
}

/// Two pairs of duplicated points.
pub fn twins() -> Dataset {
    Dataset::from_rows(&[[0., 0.], [0., 0.], [1., 1.], [1., 1.]]).expect("rows are non-empty")
}

/// Offset in `[-0.5, 0.5)` that varies with both point and axis.
fn jitter(i: usize, d: usize) -> Coordinate {
    ((i * 31 + d * 17 + i * d * 7) % 97) as Coordinate / 97. - 0.5
}
