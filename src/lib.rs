//! Lloyd's algorithm k-means clustering.
//!
//! Partitions an unlabeled dataset of real-valued feature vectors into K
//! clusters, refining centroids until no centroid moves (or the iteration
//! budget runs out), and reports the within-cluster sum of squares so that
//! callers can compare runs across different K.
//!
//! ## Pipeline
//!
//! 1. **Seed** — pick K distinct points as initial centroids ([`Initialization`])
//! 2. **Assign** — every point joins its nearest centroid ([`Partition`])
//! 3. **Recompute** — every centroid becomes the mean of its members ([`Mean`])
//! 4. **Check** — stop once total centroid drift reaches the tolerance
//!
//! ## Core Types
//!
//! - [`Engine`] — Owns configuration and runs [`Engine::fit`]
//! - [`Config`] — K, iteration budget, tolerance, seeding strategy
//! - [`Matrix`] — Row-major N × M storage for datasets and centroids
//! - [`ClusteringResult`] — Labels, centroids, inertia
//! - [`Observer`] — Receives every intermediate [`Step`] of the loop
mod absorb;
mod config;
mod distance;
mod engine;
mod error;
mod init;
mod matrix;
mod observer;
mod outcome;
mod partition;

#[cfg(test)]
mod fixtures;

pub use absorb::*;
pub use config::*;
pub use distance::*;
pub use engine::*;
pub use error::*;
pub use init::*;
pub use matrix::*;
pub use observer::*;
pub use outcome::*;
pub use partition::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// A single feature value of a point or centroid.
pub type Coordinate = f64;
/// Distances, drifts, inertia and convergence thresholds.
pub type Energy = f64;

// ============================================================================
// K-MEANS DEFAULTS
// ============================================================================
/// Lloyd iterations before giving up on convergence.
pub const KMEANS_MAX_ITERATIONS: usize = 100;
/// Total centroid drift at or below which the loop stops. Zero means no centroid moved at all.
pub const KMEANS_TOLERANCE: Energy = 0.0;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `dir` if needed and writes `level` to the file, INFO to the terminal.
/// Fails if the file cannot be created or a logger is already installed.
#[cfg(feature = "logging")]
pub fn log(dir: impl AsRef<std::path::Path>, level: log::LevelFilter) -> std::io::Result<()> {
    std::fs::create_dir_all(dir.as_ref())?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_err(std::io::Error::other)?
        .as_secs();
    let path = dir.as_ref().join(format!("{}.log", time));
    let file = simplelog::WriteLogger::new(level, config.clone(), std::fs::File::create(path)?);
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).map_err(std::io::Error::other)
}
