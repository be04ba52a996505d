//! First-order character transition matrix.
//!
//! Every character seen in the source words gets a row. A row maps each
//! character that followed it to the fraction of times it did so. Characters
//! that only ever end a word keep an empty row and are called terminal.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{NameError, NameResult};

/// Outgoing transition probabilities for one source character.
pub type Row = BTreeMap<char, f64>;

/// Character-to-character transition probabilities built from a word list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransitionMatrix {
    rows: BTreeMap<char, Row>,
}

impl TransitionMatrix {
    /// Build a matrix from example words.
    ///
    /// Each adjacent pair `(a, b)` in a word counts as one `a -> b` transition.
    /// Counts are normalized per source character so every non-empty row sums
    /// to 1.0.
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> NameResult<Self> {
        if words.is_empty() {
            return Err(NameError::EmptyWordList);
        }

        let mut counts: BTreeMap<char, BTreeMap<char, u32>> = BTreeMap::new();
        for word in words {
            let chars: Vec<char> = word.as_ref().chars().collect();
            for (i, &from) in chars.iter().enumerate() {
                let row = counts.entry(from).or_default();
                if let Some(&to) = chars.get(i + 1) {
                    *row.entry(to).or_insert(0) += 1;
                }
            }
        }

        let rows = counts
            .into_iter()
            .map(|(from, outgoing)| {
                let total: u32 = outgoing.values().sum();
                let row = outgoing
                    .into_iter()
                    .map(|(to, n)| (to, f64::from(n) / f64::from(total)))
                    .collect();
                (from, row)
            })
            .collect();

        let matrix = Self { rows };
        tracing::debug!(
            words = words.len(),
            characters = matrix.len(),
            terminal = matrix.len() - matrix.extendable_characters().len(),
            "built transition matrix"
        );
        Ok(matrix)
    }

    /// The outgoing row for a character, if the character was ever seen.
    pub fn row(&self, from: char) -> Option<&Row> {
        self.rows.get(&from)
    }

    /// Probability of `to` following `from`, or 0.0 if never observed.
    pub fn probability(&self, from: char, to: char) -> f64 {
        self.row(from)
            .and_then(|row| row.get(&to))
            .copied()
            .unwrap_or(0.0)
    }

    /// Returns true if `c` has at least one outgoing transition.
    pub fn is_extendable(&self, c: char) -> bool {
        self.row(c).is_some_and(|row| !row.is_empty())
    }

    /// All characters with a row, in sorted order.
    pub fn characters(&self) -> Vec<char> {
        self.rows.keys().copied().collect()
    }

    /// Characters with at least one outgoing transition, in sorted order.
    pub fn extendable_characters(&self) -> Vec<char> {
        self.rows
            .iter()
            .filter(|(_, row)| !row.is_empty())
            .map(|(c, _)| *c)
            .collect()
    }

    /// Iterate over `(source, row)` pairs in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &Row)> {
        self.rows.iter().map(|(c, row)| (*c, row))
    }

    /// Number of source characters.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the matrix has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render as indented JSON with sorted keys.
    pub fn to_json_pretty(&self) -> NameResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
