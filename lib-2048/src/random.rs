use rand::{Rng, SeedableRng};

/// Source of uniform integers used for spawning tiles.
///
/// Implementations must be deterministic given a seed and call sequence.
pub trait RandomSource {
    fn seed(&mut self, value: u64);

    /// Uniform integer in the closed range `low..=high`.
    fn next_in_range(&mut self, low: u32, high: u32) -> u32;
}

impl<R> RandomSource for R
where
    R: Rng + SeedableRng,
{
    fn seed(&mut self, value: u64) {
        *self = R::seed_from_u64(value);
    }

    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        self.gen_range(low..=high)
    }
}
