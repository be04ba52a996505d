//! Rolling several dice of one kind at once.

use rand::Rng;
use rand::rngs::StdRng;

use super::Die;
use super::roll::{DieResult, RollResult};

/// Dice rolled together, such as `4d6` for an ability score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DicePool {
    /// The kind of die.
    pub die: Die,
    /// How many are rolled.
    pub count: usize,
}

impl DicePool {
    /// `count` dice of one kind.
    pub fn of(die: Die, count: usize) -> Self {
        Self { die, count }
    }

    /// Roll every die in the pool.
    pub fn roll(&self, rng: &mut StdRng) -> RollResult {
        let dice = (0..self.count)
            .map(|_| DieResult {
                die: self.die,
                value: rng.random_range(1..=self.die.sides()),
            })
            .collect();
        RollResult { dice }
    }
}

impl std::fmt::Display for DicePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.count, self.die)
    }
}
