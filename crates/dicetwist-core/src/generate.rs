//! Uniform roll generation.

use fastrand::Rng;
use tracing::debug;

use crate::config::RollConfig;
use crate::store::RollResults;

/// Fill a fresh store with uniformly random die values in `[1, faces]`.
pub fn generate(config: &RollConfig) -> RollResults {
    generate_with(config, &mut Rng::new())
}

/// Seeded variant: the same config and seed always produce the same batch.
pub fn generate_seeded(config: &RollConfig, seed: u64) -> RollResults {
    generate_with(config, &mut Rng::with_seed(seed))
}

fn generate_with(config: &RollConfig, rng: &mut Rng) -> RollResults {
    debug!(%config, "rolling batch");
    let faces = config.faces();
    let mut results = RollResults::new(*config);
    results.fill_with(|| rng.u8(1..=faces));
    results
}
