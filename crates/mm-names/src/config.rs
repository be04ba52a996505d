//! Configuration for name generation.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::sampler::{DEFAULT_MAX_ATTEMPTS, LengthRange};

/// Configuration for a [`NameGenerator`](crate::NameGenerator).
#[derive(Debug, Clone)]
pub struct NameConfig {
    /// Allowed lengths of generated names.
    pub lengths: LengthRange,
    /// RNG seed. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Walks attempted per name before giving up.
    pub max_attempts: usize,
}

impl Default for NameConfig {
    fn default() -> Self {
        Self {
            lengths: LengthRange::default(),
            seed: None,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl NameConfig {
    /// Set the allowed name lengths.
    pub fn with_lengths(mut self, lengths: LengthRange) -> Self {
        self.lengths = lengths;
        self
    }

    /// Set the RNG seed for reproducible output.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set how many walks are attempted per name (at least 1).
    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    /// Build the random source described by this config.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
