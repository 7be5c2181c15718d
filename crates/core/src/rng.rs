//! Seed derivation for reproducible runs.
//!
//! One logged master seed fans out into independent streams, so a run can be
//! replayed exactly while unrelated generators stay decorrelated. Streams can
//! also be keyed by entity values (a barcode, a day ordinal) to make a single
//! draw reproducible on its own.

use rand::SeedableRng;
use rand::rngs::StdRng;

/// splitmix64 finalizer. Structured salts (small integers, ordinals) come out
/// well distributed.
fn mix(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Fold `salts` into `seed`, one mix round per salt.
pub fn derive(seed: u64, salts: &[u64]) -> u64 {
    let mut acc = mix(seed);
    for &salt in salts {
        acc = mix(acc ^ mix(salt));
    }
    acc
}

/// RNG for a salted stream of the run.
pub fn stream(seed: u64, salts: &[u64]) -> StdRng {
    StdRng::seed_from_u64(derive(seed, salts))
}
