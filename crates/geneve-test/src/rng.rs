//! Deterministic randomness for tests.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Seed used by [`seeded_rng`].
pub const TEST_SEED: u64 = 0x6765_6e65_7665;

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(TEST_SEED)
}
