//! Results of a pool roll.

use serde::{Deserialize, Serialize};

use super::Die;

/// One die and the face it landed on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DieResult {
    /// The die rolled.
    pub die: Die,
    /// Face value, 1 to the die's sides.
    pub value: u32,
}

/// Every die of a pool roll, in pool order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RollResult {
    /// Individual die results.
    pub dice: Vec<DieResult>,
}

impl RollResult {
    /// Sum of all die values.
    pub fn total(&self) -> u32 {
        self.dice.iter().map(|d| d.value).sum()
    }

    /// Sum of the dice left after discarding the `n` lowest.
    pub fn total_dropping_lowest(&self, n: usize) -> u32 {
        let mut values: Vec<u32> = self.dice.iter().map(|d| d.value).collect();
        values.sort_unstable();
        values.iter().skip(n).sum()
    }
}

impl std::fmt::Display for RollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.dice.iter().map(|d| d.value.to_string()).collect();
        write!(f, "[{}] = {}", values.join(", "), self.total())
    }
}
