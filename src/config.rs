use super::*;
use serde::Deserialize;
use serde::Serialize;

/// Parameters of a clustering run.
///
/// Built with `Config::from(k)` and refined with the chained setters.
/// Everything except `k <= N` can be checked without seeing the data,
/// which [`Config::validate`] does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Number of clusters K.
    pub k: usize,
    /// Upper bound on Lloyd iterations.
    pub max_iterations: usize,
    /// Total centroid drift at or below which the loop has converged.
    ///
    /// The default of zero stops only when no centroid moved at all. Floating
    /// point means seldom land on bit-identical values twice, so such runs
    /// usually end on `max_iterations`; a small positive value stops earlier.
    pub tolerance: Energy,
    /// How the starting centroids are chosen.
    pub initialization: Initialization,
    /// Seed for the initialization RNG; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Config {
    /// Sets the iteration budget.
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
    /// Sets the convergence tolerance on total centroid drift.
    pub fn tolerance(mut self, tolerance: Energy) -> Self {
        self.tolerance = tolerance;
        self
    }
    /// Sets the seeding strategy.
    pub fn initialization(mut self, initialization: Initialization) -> Self {
        self.initialization = initialization;
        self
    }
    /// Fixes the RNG seed for reproducible runs.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks every setting that does not depend on the dataset.
    pub fn validate(&self) -> Result<()> {
        if self.k == 0 {
            return Err(ClusteringError::invalid("k must be at least 1"));
        }
        if self.max_iterations == 0 {
            return Err(ClusteringError::invalid("max_iterations must be at least 1"));
        }
        if !self.tolerance.is_finite() || self.tolerance < 0. {
            return Err(ClusteringError::invalid(format!(
                "tolerance must be finite and non-negative, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }

    /// Checks `1 <= k <= n` against a dataset of `n` points.
    pub fn validate_for(&self, n: usize) -> Result<()> {
        self.validate()?;
        if n == 0 {
            return Err(ClusteringError::invalid("dataset is empty"));
        }
        if self.k > n {
            return Err(ClusteringError::invalid(format!(
                "k = {} exceeds the {} points available",
                self.k, n
            )));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            k: 1,
            max_iterations: KMEANS_MAX_ITERATIONS,
            tolerance: KMEANS_TOLERANCE,
            initialization: Initialization::default(),
            seed: None,
        }
    }
}

impl From<usize> for Config {
    fn from(k: usize) -> Self {
        Self {
            k,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_exact_lloyd() {
        let config = Config::from(5);
        assert_eq!(config.k, 5);
        assert_eq!(config.max_iterations, 100);
        assert_eq!(config.tolerance, 0.);
        assert_eq!(config.initialization, Initialization::Random);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_k_is_invalid() {
        assert!(matches!(
            Config::from(0).validate(),
            Err(ClusteringError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn zero_iterations_is_invalid() {
        assert!(Config::from(2).max_iterations(0).validate().is_err());
    }

    #[test]
    fn negative_or_nan_tolerance_is_invalid() {
        assert!(Config::from(2).tolerance(-1e-9).validate().is_err());
        assert!(Config::from(2).tolerance(Energy::NAN).validate().is_err());
        assert!(Config::from(2).tolerance(1e-9).validate().is_ok());
    }

    #[test]
    fn k_must_fit_the_dataset() {
        let config = Config::from(4);
        assert!(config.validate_for(4).is_ok());
        assert!(config.validate_for(3).is_err());
        assert!(config.validate_for(0).is_err());
    }
}
