//! Name generator for Mmorpdnd campaign tools.
//!
//! Builds a first-order character transition matrix from example names and
//! samples new names from it with weighted random walks. Also provides word
//! list I/O and an accept/reject review session for curating the output.

pub mod config;
pub mod error;
pub mod generator;
pub mod matrix;
pub mod review;
pub mod sampler;
pub mod wordlist;

pub use config::NameConfig;
pub use error::{NameError, NameResult};
pub use generator::NameGenerator;
pub use matrix::TransitionMatrix;
pub use review::{Decision, ReviewOutcome, ReviewSession, ReviewState};
pub use sampler::{LengthRange, sample_word};
