//! Accept/reject review of generated names.
//!
//! A [`ReviewSession`] proposes one name at a time and waits for a
//! [`Decision`]. The session owns no I/O; callers read answers from wherever
//! they like and act on the returned [`ReviewOutcome`].

use std::str::FromStr;

use rand::rngs::StdRng;

use crate::error::{NameError, NameResult};
use crate::generator::NameGenerator;

/// A reviewer's answer to a proposed name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Keep the name.
    Accept,
    /// Throw the name away and continue.
    Reject,
    /// End the session.
    Reset,
}

impl FromStr for Decision {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "y" | "yes" => Ok(Self::Accept),
            "n" | "no" => Ok(Self::Reject),
            "r" | "reset" | "q" | "quit" => Ok(Self::Reset),
            other => Err(NameError::InvalidDecision(other.to_string())),
        }
    }
}

/// What the caller should do after a decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewOutcome {
    /// The name was accepted.
    Keep(String),
    /// The name was rejected.
    Discard(String),
    /// The session is over.
    Stop,
}

/// Where a review session currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewState {
    /// Nothing proposed yet, or the last proposal was decided.
    Idle,
    /// A name is waiting for a decision.
    Awaiting(String),
    /// The reviewer reset the session.
    Finished,
}

/// An interactive accept/reject loop over a name generator.
#[derive(Debug)]
pub struct ReviewSession<'g> {
    generator: &'g NameGenerator,
    state: ReviewState,
    kept: Vec<String>,
    discarded: usize,
}

impl<'g> ReviewSession<'g> {
    /// Start a session over `generator`.
    pub fn new(generator: &'g NameGenerator) -> Self {
        Self {
            generator,
            state: ReviewState::Idle,
            kept: Vec::new(),
            discarded: 0,
        }
    }

    /// Generate the next name to review.
    ///
    /// A name still awaiting a decision is counted as discarded once the new
    /// name is ready. If generation fails the pending name is kept.
    pub fn propose(&mut self, rng: &mut StdRng) -> NameResult<&str> {
        if self.is_finished() {
            return Err(NameError::SessionFinished);
        }

        let word = self.generator.generate(rng)?;
        if let ReviewState::Awaiting(previous) = &self.state {
            tracing::warn!(name = %previous, "replacing undecided name");
            self.discarded += 1;
        }
        self.state = ReviewState::Awaiting(word);
        Ok(self.pending().unwrap_or_default())
    }

    /// Apply a decision to the pending name.
    pub fn decide(&mut self, decision: Decision) -> NameResult<ReviewOutcome> {
        if decision == Decision::Reset {
            self.state = ReviewState::Finished;
            return Ok(ReviewOutcome::Stop);
        }

        let word = match std::mem::replace(&mut self.state, ReviewState::Idle) {
            ReviewState::Awaiting(word) => word,
            other => {
                self.state = other;
                return Err(if self.is_finished() {
                    NameError::SessionFinished
                } else {
                    NameError::NoPendingWord
                });
            }
        };

        Ok(match decision {
            Decision::Accept => {
                self.kept.push(word.clone());
                ReviewOutcome::Keep(word)
            }
            _ => {
                self.discarded += 1;
                ReviewOutcome::Discard(word)
            }
        })
    }

    /// The name awaiting a decision, if any.
    pub fn pending(&self) -> Option<&str> {
        match &self.state {
            ReviewState::Awaiting(word) => Some(word),
            _ => None,
        }
    }

    /// Current state of the session.
    pub fn state(&self) -> &ReviewState {
        &self.state
    }

    /// Returns true once the reviewer has reset the session.
    pub fn is_finished(&self) -> bool {
        self.state == ReviewState::Finished
    }

    /// Names accepted so far, in order.
    pub fn kept(&self) -> &[String] {
        &self.kept
    }

    /// Number of names rejected so far.
    pub fn discarded(&self) -> usize {
        self.discarded
    }
}
