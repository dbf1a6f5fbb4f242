//! Random source for enemy spawning.

use bevy_ecs::prelude::Resource;
use fastrand::Rng;

/// Seedable RNG used by the spawner. Seed it from the command line to get a
/// reproducible enemy sequence.
#[derive(Resource, Debug)]
pub struct SpawnRng(pub Rng);

impl Default for SpawnRng {
    fn default() -> Self {
        Self(Rng::new())
    }
}

impl SpawnRng {
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(Rng::with_seed(seed)),
            None => Self::default(),
        }
    }
}
