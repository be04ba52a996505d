pub mod generate;
pub mod matrix;
pub mod review;
pub mod sheet;
pub mod table;

use std::path::Path;

use mm_names::wordlist::{read_word_list, strip_numbering};
use mm_names::{LengthRange, NameConfig, NameGenerator};

/// How the generated name lengths are chosen.
pub enum LengthRequest {
    /// Given bounds, each falling back to the default.
    Explicit {
        min: Option<usize>,
        max: Option<usize>,
    },
    /// The shortest and longest words in the list.
    Fit,
}

impl LengthRequest {
    fn resolve(&self, words: &[String]) -> Result<LengthRange, String> {
        let range = match *self {
            Self::Fit => LengthRange::spanning(words),
            Self::Explicit { min, max } => {
                let default = LengthRange::default();
                LengthRange::new(
                    min.unwrap_or(default.min()),
                    max.unwrap_or(default.max()),
                )
            }
        };
        range.map_err(|e| e.to_string())
    }
}

/// Read a word list, dropping any leading list numbering.
fn load_words(path: &Path) -> Result<Vec<String>, String> {
    let words = read_word_list(path).map_err(|e| e.to_string())?;
    let words = strip_numbering(words);
    if words.is_empty() {
        return Err(format!("{}: word list is empty", path.display()));
    }
    Ok(words)
}

/// Load a word list and build a generator over it.
fn load_generator(
    path: &Path,
    lengths: &LengthRequest,
    seed: Option<u64>,
) -> Result<NameGenerator, String> {
    let words = load_words(path)?;
    let mut config = NameConfig::default().with_lengths(lengths.resolve(&words)?);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    NameGenerator::new(&words, config).map_err(|e| e.to_string())
}
