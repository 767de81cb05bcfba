use super::*;
use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use serde::Deserialize;
use serde::Serialize;

/// Strategy for choosing the K starting centroids.
///
/// Both strategies pick K *distinct* points of the dataset, so no two
/// starting centroids share an index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Initialization {
    /// K indices drawn uniformly at random without replacement.
    #[default]
    Random,
    /// k-means++: each next point is weighted by its squared distance to the nearest chosen centroid.
    PlusPlus,
}

impl Initialization {
    /// Picks `k` distinct row indices of `data`.
    pub fn indices<R>(&self, data: &Dataset, k: usize, rng: &mut R) -> Vec<usize>
    where
        R: Rng + ?Sized,
    {
        debug_assert!(0 < k && k <= data.len());
        match self {
            Self::Random => rand::seq::index::sample(rng, data.len(), k).into_vec(),
            Self::PlusPlus => Self::plusplus(data, k, rng),
        }
    }

    /// Picks `k` distinct rows of `data` as the starting centroids.
    pub fn centroids<R>(&self, data: &Dataset, k: usize, rng: &mut R) -> Matrix
    where
        R: Rng + ?Sized,
    {
        data.select(self.indices(data, k, rng))
    }

    fn plusplus<R>(data: &Dataset, k: usize, rng: &mut R) -> Vec<usize>
    where
        R: Rng + ?Sized,
    {
        let n = data.len();
        let mut chosen = Vec::with_capacity(k);
        let mut potentials = vec![Energy::INFINITY; n];
        while chosen.len() < k {
            let i = if chosen.is_empty() {
                rng.random_range(0..n)
            } else {
                match WeightedIndex::<Energy>::new(potentials.iter()) {
                    Ok(weights) => weights.sample(rng),
                    // every unchosen point coincides with a chosen one
                    Err(_) => {
                        let free = (0..n).filter(|i| !chosen.contains(i)).collect::<Vec<_>>();
                        free[rng.random_range(0..free.len())]
                    }
                }
            };
            chosen.push(i);
            let ref x = data.row(i);
            potentials
                .iter_mut()
                .zip(data.rows())
                .for_each(|(d0, p)| {
                    let d1 = squared(x, p).expect("rows share dimensionality");
                    *d0 = Energy::min(*d0, d1);
                });
            chosen.iter().for_each(|c| potentials[*c] = 0.);
        }
        chosen
    }
}
