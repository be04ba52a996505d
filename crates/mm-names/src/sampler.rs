//! Weighted random walks over a transition matrix.
//!
//! A walk picks a target length, a start character that can be extended, and
//! then repeatedly draws the next character from a bucketed candidate list.
//! Only the final character of a walk may be terminal.

use rand::Rng;
use rand::rngs::StdRng;

use crate::error::{NameError, NameResult};
use crate::matrix::{Row, TransitionMatrix};

/// Each candidate is repeated `floor(p * BUCKET_SCALE)` times, so transitions
/// below 4% never make it into the list.
pub const BUCKET_SCALE: f64 = 25.0;

/// Walks attempted before giving up on a target length.
pub const DEFAULT_MAX_ATTEMPTS: usize = 100;

/// Inclusive bounds on generated word length, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthRange {
    min: usize,
    max: usize,
}

impl Default for LengthRange {
    fn default() -> Self {
        Self { min: 4, max: 10 }
    }
}

impl LengthRange {
    /// Create a range. `min` must be at least 1 and not exceed `max`.
    pub fn new(min: usize, max: usize) -> NameResult<Self> {
        if min == 0 || min > max {
            return Err(NameError::InvalidLengthRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// The range from the shortest to the longest non-empty word.
    pub fn spanning<S: AsRef<str>>(words: &[S]) -> NameResult<Self> {
        let lengths = words
            .iter()
            .map(|w| w.as_ref().chars().count())
            .filter(|&n| n > 0);
        let (min, max) = lengths.fold((usize::MAX, 0), |(lo, hi), n| (lo.min(n), hi.max(n)));
        if max == 0 {
            return Err(NameError::EmptyWordList);
        }
        Ok(Self { min, max })
    }

    /// Shortest allowed length.
    pub fn min(&self) -> usize {
        self.min
    }

    /// Longest allowed length.
    pub fn max(&self) -> usize {
        self.max
    }

    /// Returns true if `len` lies within the range.
    pub fn contains(&self, len: usize) -> bool {
        (self.min..=self.max).contains(&len)
    }
}

impl std::fmt::Display for LengthRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.min, self.max)
    }
}

/// Expand a row into a uniform draw list weighted by bucketed probability.
///
/// If every transition falls under the bucket cutoff, each candidate appears
/// once instead.
pub fn bucketed_candidates(row: &Row) -> Vec<char> {
    let mut list = Vec::new();
    for (&c, &p) in row {
        let copies = (p * BUCKET_SCALE) as usize;
        list.extend(std::iter::repeat_n(c, copies));
    }
    if list.is_empty() {
        list.extend(row.keys().copied());
    }
    list
}

/// Sample one word whose length lies within `lengths`.
///
/// The target length is drawn once. Walks that dead-end on a terminal
/// character before the target length restart from a fresh start character,
/// up to `max_attempts` times.
pub fn sample_word(
    matrix: &TransitionMatrix,
    lengths: LengthRange,
    max_attempts: usize,
    rng: &mut StdRng,
) -> NameResult<String> {
    let starts = matrix.extendable_characters();
    if starts.is_empty() {
        return Err(NameError::NoStartCharacter);
    }

    let length = rng.random_range(lengths.min()..=lengths.max());
    let attempts = max_attempts.max(1);
    for attempt in 1..=attempts {
        if let Some(word) = walk(matrix, &starts, length, rng) {
            return Ok(word);
        }
        tracing::debug!(attempt, length, "walk dead-ended, restarting");
    }

    Err(NameError::NoViablePath { length, attempts })
}

/// One walk of exactly `length` characters, or `None` on a dead end.
fn walk(
    matrix: &TransitionMatrix,
    starts: &[char],
    length: usize,
    rng: &mut StdRng,
) -> Option<String> {
    let mut current = pick(starts, rng)?;
    let mut word = String::with_capacity(length);
    word.push(current);

    for position in 1..length {
        let candidates = bucketed_candidates(matrix.row(current)?);
        let next = if position + 1 == length {
            pick(&candidates, rng)?
        } else {
            // Drawing only among extendable candidates is the same as redrawing
            // from the full list until one is extendable.
            let viable: Vec<char> = candidates
                .into_iter()
                .filter(|&c| matrix.is_extendable(c))
                .collect();
            pick(&viable, rng)?
        };
        word.push(next);
        current = next;
    }

    Some(word)
}

fn pick(list: &[char], rng: &mut StdRng) -> Option<char> {
    if list.is_empty() {
        return None;
    }
    Some(list[rng.random_range(0..list.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;

    fn names() -> Vec<&'static str> {
        vec!["anna", "hannah", "nathan", "alana", "banana", "savannah", "tatiana"]
    }

    #[test]
    fn length_range_validation() {
        assert!(LengthRange::new(1, 1).is_ok());
        assert!(matches!(
            LengthRange::new(0, 4),
            Err(NameError::InvalidLengthRange { min: 0, max: 4 })
        ));
        assert!(LengthRange::new(6, 5).is_err());
        assert_eq!(LengthRange::default(), LengthRange::new(4, 10).unwrap());
    }

    #[test]
    fn spanning_uses_shortest_and_longest() {
        let range = LengthRange::spanning(&["one", "two", "three", "four", "five"]).unwrap();
        assert_eq!(range.min(), 3);
        assert_eq!(range.max(), 5);
        assert_eq!(range.to_string(), "3..=5");
    }

    #[test]
    fn spanning_empty_list() {
        let none: [&str; 0] = [];
        assert!(matches!(
            LengthRange::spanning(&none),
            Err(NameError::EmptyWordList)
        ));
        assert!(LengthRange::spanning(&["", ""]).is_err());
    }

    #[test]
    fn buckets_follow_probability() {
        let m = TransitionMatrix::from_words(&["ab", "ab", "ab", "ac"]).unwrap();
        let list = bucketed_candidates(m.row('a').unwrap());
        assert_eq!(list.iter().filter(|&&c| c == 'b').count(), 18);
        assert_eq!(list.iter().filter(|&&c| c == 'c').count(), 6);
    }

    #[test]
    fn rare_transitions_are_dropped() {
        let mut list: Vec<String> = vec!["ab".to_string(); 30];
        list.push("ac".to_string());
        let m = TransitionMatrix::from_words(&list).unwrap();
        let candidates = bucketed_candidates(m.row('a').unwrap());
        assert!(!candidates.contains(&'c'));
        assert!(candidates.contains(&'b'));
    }

    #[test]
    fn buckets_fall_back_when_all_rare() {
        let alphabet: Vec<String> = ('b'..='z')
            .chain('A'..='H')
            .map(|c| format!("a{c}"))
            .collect();
        let m = TransitionMatrix::from_words(&alphabet).unwrap();
        let row = m.row('a').unwrap();
        assert!(row.values().all(|&p| p * BUCKET_SCALE < 1.0));
        assert_eq!(bucketed_candidates(row).len(), row.len());
    }

    #[test]
    fn deterministic_with_seed() {
        let m = TransitionMatrix::from_words(&names()).unwrap();
        let range = LengthRange::default();
        let mut rng1 = StdRng::seed_from_u64(7);
        let mut rng2 = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            assert_eq!(
                sample_word(&m, range, DEFAULT_MAX_ATTEMPTS, &mut rng1).unwrap(),
                sample_word(&m, range, DEFAULT_MAX_ATTEMPTS, &mut rng2).unwrap()
            );
        }
    }

    #[test]
    fn single_character_words() {
        let m = TransitionMatrix::from_words(&names()).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let range = LengthRange::new(1, 1).unwrap();
        let word = sample_word(&m, range, DEFAULT_MAX_ATTEMPTS, &mut rng).unwrap();
        assert_eq!(word.chars().count(), 1);
        assert!(m.is_extendable(word.chars().next().unwrap()));
    }

    #[test]
    fn every_step_follows_an_observed_transition() {
        let m = TransitionMatrix::from_words(&names()).unwrap();
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..200 {
            let word = sample_word(&m, LengthRange::default(), DEFAULT_MAX_ATTEMPTS, &mut rng)
                .unwrap();
            let chars: Vec<char> = word.chars().collect();
            for pair in chars.windows(2) {
                assert!(m.probability(pair[0], pair[1]) > 0.0, "{word}");
            }
        }
    }

    #[test]
    fn final_character_may_be_terminal() {
        let m = TransitionMatrix::from_words(&["ab"]).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let range = LengthRange::new(2, 2).unwrap();
        assert_eq!(
            sample_word(&m, range, DEFAULT_MAX_ATTEMPTS, &mut rng).unwrap(),
            "ab"
        );
    }

    #[test]
    fn dead_end_is_reported() {
        let m = TransitionMatrix::from_words(&["ab"]).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let range = LengthRange::new(4, 4).unwrap();
        assert!(matches!(
            sample_word(&m, range, 5, &mut rng),
            Err(NameError::NoViablePath {
                length: 4,
                attempts: 5
            })
        ));
    }

    #[test]
    fn no_start_character() {
        let m = TransitionMatrix::from_words(&["a", "b"]).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        assert!(matches!(
            sample_word(&m, LengthRange::default(), 1, &mut rng),
            Err(NameError::NoStartCharacter)
        ));
    }

    #[test]
    fn draws_track_bucket_weights() {
        let m = TransitionMatrix::from_words(&["ab", "ab", "ab", "ac"]).unwrap();
        let mut rng = StdRng::seed_from_u64(2024);
        let range = LengthRange::new(2, 2).unwrap();
        let trials = 2000;
        let b_count = (0..trials)
            .filter(|_| sample_word(&m, range, 1, &mut rng).unwrap() == "ab")
            .count();
        let share = b_count as f64 / trials as f64;
        assert!((0.70..=0.80).contains(&share), "share of 'ab' was {share}");
    }

    proptest! {
        #[test]
        fn length_stays_in_range(seed in any::<u64>(), min in 1usize..6, extra in 0usize..6) {
            let m = TransitionMatrix::from_words(&names()).unwrap();
            let range = LengthRange::new(min, min + extra).unwrap();
            let mut rng = StdRng::seed_from_u64(seed);
            let word = sample_word(&m, range, DEFAULT_MAX_ATTEMPTS, &mut rng).unwrap();
            prop_assert!(range.contains(word.chars().count()));
        }
    }
}
