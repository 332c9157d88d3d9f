use rand::{SeedableRng, rngs::StdRng};

pub mod kruskal;
pub mod union_find;

pub use kruskal::{SpanningTree, build_maze};
pub use union_find::Representatives;

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}
