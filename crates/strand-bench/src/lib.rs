//! Benchmark fixtures for the strand sequence container.
//!
//! Provides deterministic input builders shared by the criterion benches:
//!
//! - [`seeded_values`]: a `Vec<u64>` of pseudo-random values from a seed
//! - [`seeded_sequence`]: the same values pre-loaded into a `Sequence`

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use strand::Sequence;

/// Generate `count` pseudo-random values from `seed`.
///
/// Deterministic: the same seed always yields the same values, so bench
/// runs are comparable across machines and commits.
pub fn seeded_values(count: usize, seed: u64) -> Vec<u64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count).map(|_| rng.gen()).collect()
}

/// Build a sequence pre-loaded with `count` seeded values.
pub fn seeded_sequence(count: usize, seed: u64) -> Sequence<u64> {
    seeded_values(count, seed).into_iter().collect()
}
