use super::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Lloyd's algorithm k-means clustering.
///
/// Holds only configuration and an [`Observer`]. Every piece of loop state
/// (partition, centroids, iteration count) lives inside [`Engine::fit`] and
/// leaves it as an immutable [`ClusteringResult`], so one engine can be
/// reused across any number of datasets.
///
/// # Loop
///
/// 1. Assign every point to its nearest centroid (ties → lowest index)
/// 2. Recompute every centroid as the mean of its members
/// 3. Sum how far each centroid moved; stop once that is within tolerance
///
/// An empty cluster keeps its previous centroid, so no step ever averages
/// over zero points.
pub struct Engine<O = Silent> {
    config: Config,
    observer: O,
}

impl Engine<Silent> {
    /// Validates `config` and builds an engine with no observer.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            observer: Silent,
        })
    }
}

impl<O> Engine<O>
where
    O: Observer,
{
    /// Replaces the observer, keeping the configuration.
    pub fn with_observer<P>(self, observer: P) -> Engine<P>
    where
        P: Observer,
    {
        Engine {
            config: self.config,
            observer,
        }
    }
    /// The validated configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }
    /// Consumes the engine, handing back its observer.
    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Clusters `data`, seeding the RNG from the configuration.
    pub fn fit(&mut self, data: &Dataset) -> Result<ClusteringResult> {
        self.config.validate_for(data.len())?;
        let ref mut rng = match self.config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        let kmeans = self.seed(data, rng);
        self.lloyd(data, kmeans)
    }

    /// Clusters `data`, drawing the starting centroids from `rng`.
    pub fn fit_with<R>(&mut self, data: &Dataset, rng: &mut R) -> Result<ClusteringResult>
    where
        R: Rng + ?Sized,
    {
        self.config.validate_for(data.len())?;
        let kmeans = self.seed(data, rng);
        self.lloyd(data, kmeans)
    }

    /// Clusters `data` starting from the given centroids.
    pub fn fit_from(&mut self, data: &Dataset, kmeans: Matrix) -> Result<ClusteringResult> {
        self.config.validate_for(data.len())?;
        if kmeans.len() != self.config.k {
            return Err(ClusteringError::invalid(format!(
                "{} starting centroids given for k = {}",
                kmeans.len(),
                self.config.k
            )));
        }
        if kmeans.dims() != data.dims() {
            return Err(ClusteringError::invalid(format!(
                "centroids have {} features, points have {}",
                kmeans.dims(),
                data.dims()
            )));
        }
        self.lloyd(data, kmeans)
    }

    /// Draws the starting centroids. Assumes `1 <= k <= N` was checked.
    fn seed<R>(&self, data: &Dataset, rng: &mut R) -> Matrix
    where
        R: Rng + ?Sized,
    {
        log::info!(
            "{:<32}{:<32}",
            "kmeans initializing",
            format!("k={} n={} m={}", self.config.k, data.len(), data.dims())
        );
        self.config
            .initialization
            .centroids(data, self.config.k, rng)
    }

    /// Runs the loop. Assumes `config` and `kmeans` were checked against `data`.
    fn lloyd(&mut self, data: &Dataset, kmeans: Matrix) -> Result<ClusteringResult> {
        let mut kmeans = kmeans;
        let mut partition = Partition::new(self.config.k, data.len());
        let mut iterations = 0;
        let mut converged = false;
        log::info!("{:<32}{:<32}", "kmeans iterating", self.config.max_iterations);
        for iteration in 0..self.config.max_iterations {
            iterations = iteration + 1;
            Self::assign(data, &kmeans, &mut partition)?;
            self.observer.observe(&Step::Assigned {
                iteration,
                partition: &partition,
                centroids: &kmeans,
            });
            let next = Self::centroids(data, &partition, &kmeans);
            let drift = Self::drift(&kmeans, &next)?;
            kmeans = next;
            self.observer.observe(&Step::Recomputed {
                iteration,
                partition: &partition,
                centroids: &kmeans,
            });
            log::debug!("{:3} drift {:.6}", iteration, drift);
            if drift <= self.config.tolerance {
                converged = true;
                break;
            }
        }
        if !converged {
            log::warn!(
                "{:<32}{:<32}",
                "kmeans iteration limit reached",
                self.config.max_iterations
            );
        }
        let inertia = Self::inertia(data, &partition, &kmeans)?;
        log::info!("{:<32}{:<32}", "kmeans inertia", inertia);
        Ok(ClusteringResult {
            labels: partition.into_labels(),
            centroids: kmeans,
            inertia,
            iterations,
            converged,
        })
    }
}

impl<O> Engine<O> {
    /// Points every point at its nearest centroid.
    fn assign(data: &Dataset, kmeans: &Matrix, partition: &mut Partition) -> Result<()> {
        for (i, x) in data.rows().enumerate() {
            let (j, _) = kmeans.nearest(x)?;
            partition.assign(i, j);
        }
        Ok(())
    }

    /// Means of every cluster; an empty cluster keeps its previous centroid.
    fn centroids(data: &Dataset, partition: &Partition, kmeans: &Matrix) -> Matrix {
        let ref origin = Mean::empty(data.dims());
        Matrix::stack(
            data.dims(),
            (0..partition.k()).map(|j| {
                partition
                    .members(j)
                    .map(|i| data.row(i))
                    .fold(origin.identity(), Mean::absorb)
                    .mean()
                    .unwrap_or_else(|| {
                        log::debug!("{:<32}{:<32}", "kmeans empty cluster", j);
                        kmeans.row(j).to_vec()
                    })
            }),
        )
    }

    /// Total distance moved by the centroids, matched by cluster index.
    fn drift(old: &Matrix, new: &Matrix) -> Result<Energy> {
        old.rows()
            .zip(new.rows())
            .map(|(a, b)| euclidean(a, b))
            .sum()
    }

    /// Within-cluster sum of squared distances.
    fn inertia(data: &Dataset, partition: &Partition, kmeans: &Matrix) -> Result<Energy> {
        data.rows()
            .enumerate()
            .map(|(i, x)| squared(x, kmeans.row(partition.label(i))))
            .sum()
    }
}
