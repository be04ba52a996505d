//! Name generation over a transition matrix built from example names.

use rand::rngs::StdRng;

use crate::config::NameConfig;
use crate::error::NameResult;
use crate::matrix::TransitionMatrix;
use crate::sampler::sample_word;

/// Generates names that resemble a list of examples.
#[derive(Debug, Clone)]
pub struct NameGenerator {
    matrix: TransitionMatrix,
    config: NameConfig,
}

impl NameGenerator {
    /// Build a generator from example words.
    pub fn new<S: AsRef<str>>(words: &[S], config: NameConfig) -> NameResult<Self> {
        let matrix = TransitionMatrix::from_words(words)?;
        Ok(Self::from_matrix(matrix, config))
    }

    /// Build a generator around an existing matrix.
    pub fn from_matrix(matrix: TransitionMatrix, config: NameConfig) -> Self {
        Self { matrix, config }
    }

    /// The underlying transition matrix.
    pub fn matrix(&self) -> &TransitionMatrix {
        &self.matrix
    }

    /// The generator's configuration.
    pub fn config(&self) -> &NameConfig {
        &self.config
    }

    /// Generate a single name.
    pub fn generate(&self, rng: &mut StdRng) -> NameResult<String> {
        sample_word(
            &self.matrix,
            self.config.lengths,
            self.config.max_attempts,
            rng,
        )
    }

    /// Generate `count` names. Duplicates are possible.
    pub fn generate_many(&self, count: usize, rng: &mut StdRng) -> NameResult<Vec<String>> {
        (0..count).map(|_| self.generate(rng)).collect()
    }
}
