//! Reading and appending plain-text word lists, one word per line.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::error::{NameError, NameResult};

/// Split text into words: one per line, trimmed, blank lines skipped.
pub fn parse_word_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read a word list from a file.
pub fn read_word_list(path: &Path) -> NameResult<Vec<String>> {
    let text = fs::read_to_string(path).map_err(|source| NameError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let words = parse_word_list(&text);
    tracing::debug!(path = %path.display(), words = words.len(), "read word list");
    Ok(words)
}

/// Append a word as a new line, creating the file if needed.
pub fn append_word(path: &Path, word: &str) -> NameResult<()> {
    let io_err = |source| NameError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(io_err)?;
    writeln!(file, "{word}").map_err(io_err)
}

/// Drop leading digits and the whitespace right after them.
///
/// `"007 bond"` becomes `"bond"`; `"abc123"` is unchanged.
pub fn strip_leading_numbers(s: &str) -> &str {
    let rest = s.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() == s.len() {
        s
    } else {
        rest.trim_start()
    }
}

/// Strip list numbering from every word and drop the ones left empty.
pub fn strip_numbering(words: Vec<String>) -> Vec<String> {
    words
        .into_iter()
        .map(|w| strip_leading_numbers(&w).to_string())
        .filter(|w| !w.is_empty())
        .collect()
}
