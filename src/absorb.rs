use super::*;

/// Trait for k-means centroid computation via incremental aggregation.
///
/// Points are folded one at a time into an accumulator starting from
/// `identity()`. Absorption is associative and commutative, so the order in
/// which members are visited never changes the resulting centroid.
pub trait Absorb {
    /// Returns the neutral accumulator for absorption.
    fn identity(&self) -> Self;
    /// Folds one point into the accumulator.
    fn absorb(self, point: &[Coordinate]) -> Self;
}

/// Running coordinate-wise sum and count of the points absorbed so far.
#[derive(Debug, Clone, PartialEq)]
pub struct Mean {
    sum: Vec<Coordinate>,
    n: usize,
}

impl Mean {
    /// An empty accumulator for points of dimensionality `dims`.
    pub fn empty(dims: usize) -> Self {
        Self {
            sum: vec![0.; dims],
            n: 0,
        }
    }
    /// Number of points absorbed.
    pub fn n(&self) -> usize {
        self.n
    }
    /// The arithmetic mean, or `None` if nothing was absorbed.
    ///
    /// Averaging over zero points is undefined; callers pick the fallback.
    pub fn mean(&self) -> Option<Vec<Coordinate>> {
        match self.n {
            0 => None,
            n => Some(self.sum.iter().map(|s| s / n as Coordinate).collect()),
        }
    }
}

impl Absorb for Mean {
    fn identity(&self) -> Self {
        Self::empty(self.sum.len())
    }
    fn absorb(mut self, point: &[Coordinate]) -> Self {
        debug_assert!(point.len() == self.sum.len());
        self.sum
            .iter_mut()
            .zip(point.iter())
            .for_each(|(s, x)| *s += x);
        self.n += 1;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_nothing_is_undefined() {
        assert_eq!(Mean::empty(3).mean(), None);
    }

    #[test]
    fn mean_is_coordinate_wise() {
        let mean = [[0., 0.], [2., 4.], [4., 8.]]
            .iter()
            .fold(Mean::empty(2), |m, p| m.absorb(p));
        assert_eq!(mean.n(), 3);
        assert_eq!(mean.mean(), Some(vec![2., 4.]));
    }

    #[test]
    fn identity_forgets_absorbed_points() {
        let mean = Mean::empty(2).absorb(&[1., 1.]);
        let zero = mean.identity();
        assert_eq!(zero, Mean::empty(2));
    }
}
