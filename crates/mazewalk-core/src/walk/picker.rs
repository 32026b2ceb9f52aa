use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of neighbor choices for the walk engine.
///
/// Consulted exactly once per walk step with the number of eligible
/// neighbors; must return an index in `0..candidates`.
pub trait NeighborPicker {
    fn pick(&mut self, candidates: usize) -> usize;
}

impl<R: Rng + ?Sized> NeighborPicker for R {
    fn pick(&mut self, candidates: usize) -> usize {
        self.gen_range(0..candidates)
    }
}

/// Reproducible generator for a given seed, stable across platforms
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}
