criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        measuring_euclidean_distance,
        seeding_kmeans_random,
        seeding_kmeans_plusplus,
        clustering_kmeans_exact,
        clustering_kmeans_tolerant,
}

fn measuring_euclidean_distance(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(0);
    let a = (0..DIMS).map(|_| rng.random()).collect::<Vec<Coordinate>>();
    let b = (0..DIMS).map(|_| rng.random()).collect::<Vec<Coordinate>>();
    c.bench_function("euclidean distance between two 16-d points", |x| {
        x.iter(|| euclidean(&a, &b))
    });
}

fn seeding_kmeans_random(c: &mut criterion::Criterion) {
    let data = dataset();
    c.bench_function("k-means random seeding", |b| {
        b.iter(|| Initialization::Random.centroids(&data, K, &mut SmallRng::seed_from_u64(1)))
    });
}

fn seeding_kmeans_plusplus(c: &mut criterion::Criterion) {
    let data = dataset();
    c.bench_function("k-means++ seeding", |b| {
        b.iter(|| Initialization::PlusPlus.centroids(&data, K, &mut SmallRng::seed_from_u64(1)))
    });
}

fn clustering_kmeans_exact(c: &mut criterion::Criterion) {
    let data = dataset();
    let mut engine = Engine::new(Config::from(K).seed(1)).expect("valid config");
    c.bench_function("k-means clustering (exact convergence)", |b| {
        b.iter(|| engine.fit(&data))
    });
}

fn clustering_kmeans_tolerant(c: &mut criterion::Criterion) {
    let data = dataset();
    let mut engine = Engine::new(Config::from(K).seed(1).tolerance(1e-6)).expect("valid config");
    c.bench_function("k-means clustering (tolerance 1e-6)", |b| {
        b.iter(|| engine.fit(&data))
    });
}

/// Uniform noise around K random centers.
fn dataset() -> Dataset {
    let ref mut rng = SmallRng::seed_from_u64(0);
    let centers = (0..K * DIMS)
        .map(|_| rng.random_range(-100.0..100.0))
        .collect::<Vec<Coordinate>>();
    let coords = (0..N)
        .flat_map(|i| (0..DIMS).map(move |d| (i % K) * DIMS + d))
        .map(|j| centers[j] + rng.random_range(-5.0..5.0))
        .collect::<Vec<Coordinate>>();
    Dataset::from_flat(DIMS, coords).expect("non-empty dataset")
}

const K: usize = 8;
const N: usize = 4096;
const DIMS: usize = 16;

use lloyd::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
