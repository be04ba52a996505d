//! Character records: flat `key = value` text files.
//!
//! Keys are trimmed and lower-cased. Values are trimmed and lower-cased too,
//! except for free-text fields that keep their casing. Entry order is kept so
//! substitution runs in the order the author wrote the fields.

use std::fs;
use std::path::Path;

use crate::ability::Ability;
use crate::error::{SheetError, SheetResult};

/// Fields whose values keep their original casing.
const PRESERVE_CASE: [&str; 3] = ["name", "information", "notes"];

/// A parsed character record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterRecord {
    entries: Vec<(String, String)>,
}

impl CharacterRecord {
    /// Parse record text. Fails on malformed lines or a missing `class`.
    pub fn parse(text: &str) -> SheetResult<Self> {
        let mut record = Self::default();
        for (i, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                return Err(SheetError::MalformedLine {
                    line: i + 1,
                    content: line.trim().to_string(),
                });
            };
            let key = key.trim().to_lowercase();
            let value = if PRESERVE_CASE.contains(&key.as_str()) {
                value.trim().to_string()
            } else {
                value.trim().to_lowercase()
            };
            record.set(&key, value);
        }

        if !record.contains("class") {
            tracing::error!(fields = ?record.keys().collect::<Vec<_>>(), "record has no class");
            return Err(SheetError::MissingClass);
        }
        Ok(record)
    }

    /// Read and parse a record file.
    pub fn read(path: &Path) -> SheetResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| SheetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Value for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns true if the key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Set a value. An existing key keeps its position.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key.to_string(), value)),
        }
    }

    /// Entries in record order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Keys in record order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the record has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// A value that must be present.
    pub fn require(&self, key: &str) -> SheetResult<&str> {
        self.get(key)
            .ok_or_else(|| SheetError::MissingField(key.to_string()))
    }

    /// A value that must be present and a whole number.
    pub fn number(&self, key: &str) -> SheetResult<i32> {
        let value = self.require(key)?;
        parse_number(value).ok_or_else(|| SheetError::NotNumeric {
            field: key.to_string(),
            value: value.to_string(),
        })
    }

    /// The score for an ability.
    pub fn score(&self, ability: Ability) -> SheetResult<i32> {
        self.number(ability.name())
    }

    /// The character's class.
    pub fn class(&self) -> SheetResult<&str> {
        self.get("class").ok_or(SheetError::MissingClass)
    }

    /// Comma-separated `proficiencies`, trimmed, empties dropped.
    pub fn proficiencies(&self) -> Vec<String> {
        split_list(self.get("proficiencies").unwrap_or_default())
    }
}

/// True when `value` is non-empty and made only of ASCII digits.
pub fn is_numeric(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a digit-only value. Anything else, including overflow, is `None`.
pub fn parse_number(value: &str) -> Option<i32> {
    if is_numeric(value) {
        value.parse().ok()
    } else {
        None
    }
}

/// Split a comma-separated field into trimmed, non-empty items.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const KAEL: &str = "\
Name = Kael Stormborn
class = Fighter
level = 3
STRENGTH = 16
notes = Owes the Guild 40 GP

proficiencies = Athletics, strength ,
information = Born in the Iron Citadel.
";

    #[test]
    fn parse_normalizes_keys_and_values() {
        let r = CharacterRecord::parse(KAEL).unwrap();
        assert_eq!(r.get("name"), Some("Kael Stormborn"));
        assert_eq!(r.get("class"), Some("fighter"));
        assert_eq!(r.get("strength"), Some("16"));
        assert_eq!(r.get("notes"), Some("Owes the Guild 40 GP"));
        assert_eq!(r.get("information"), Some("Born in the Iron Citadel."));
        assert_eq!(r.len(), 7);
    }

    #[test]
    fn order_is_kept() {
        let r = CharacterRecord::parse(KAEL).unwrap();
        let keys: Vec<&str> = r.keys().collect();
        assert_eq!(
            keys,
            ["name", "class", "level", "strength", "notes", "proficiencies", "information"]
        );
    }

    #[test]
    fn value_may_contain_equals() {
        let r = CharacterRecord::parse("class = wizard\nnotes = a=b").unwrap();
        assert_eq!(r.get("notes"), Some("a=b"));
    }

    #[test]
    fn repeated_key_overwrites_in_place() {
        let r = CharacterRecord::parse("level = 1\nclass = rogue\nlevel = 4").unwrap();
        assert_eq!(r.get("level"), Some("4"));
        assert_eq!(r.keys().next(), Some("level"));
        assert_eq!(r.len(), 2);
    }

    #[test]
    fn missing_class() {
        assert!(matches!(
            CharacterRecord::parse("name = Nobody"),
            Err(SheetError::MissingClass)
        ));
    }

    #[test]
    fn malformed_line() {
        let err = CharacterRecord::parse("class = bard\n\njust words").unwrap_err();
        assert!(matches!(err, SheetError::MalformedLine { line: 3, .. }));
    }

    #[test]
    fn numeric_checks() {
        assert!(is_numeric("14"));
        assert!(!is_numeric(""));
        assert!(!is_numeric("-1"));
        assert!(!is_numeric("1d6"));
        assert_eq!(parse_number("007"), Some(7));
        assert_eq!(parse_number("99999999999999"), None);
    }

    #[test]
    fn number_errors() {
        let r = CharacterRecord::parse("class = monk\nwisdom = high").unwrap();
        assert!(matches!(
            r.score(Ability::Wisdom),
            Err(SheetError::NotNumeric { field, .. }) if field == "wisdom"
        ));
        assert!(matches!(
            r.score(Ability::Strength),
            Err(SheetError::MissingField(f)) if f == "strength"
        ));
    }

    #[test]
    fn proficiency_list() {
        let r = CharacterRecord::parse(KAEL).unwrap();
        assert_eq!(r.proficiencies(), vec!["athletics", "strength"]);
        let bare = CharacterRecord::parse("class = cleric").unwrap();
        assert!(bare.proficiencies().is_empty());
    }

    #[test]
    fn set_appends_new_keys() {
        let mut r = CharacterRecord::parse("class = druid").unwrap();
        r.set("hp", "9");
        assert_eq!(r.get("hp"), Some("9"));
        assert_eq!(r.keys().last(), Some("hp"));
    }
}
