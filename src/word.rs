//! Normalized letters-only words.
//!
//! Every transformation in this crate operates on a [`Word`]: the uppercase,
//! alphabetic-only form of the caller's input. Holding that invariant in a
//! type means the digit tables and rewrite rules never see a character outside
//! `A..=Z`, so out-of-range lookups are impossible by construction rather than
//! checked at runtime.

use std::fmt;

/// A normalized word: ASCII uppercase letters only, possibly empty.
///
/// Created by [`Word::normalize`] from arbitrary input, threaded through rule
/// application, and consumed by the encoder. Each value is independent; no
/// state is shared between encode calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Word(String);

impl Word {
    /// Normalize arbitrary input: uppercase it and strip every character that
    /// is not an ASCII letter.
    ///
    /// Empty or fully non-alphabetic input yields an empty word, which the
    /// encoder handles by producing the all-pad key `0000`.
    ///
    /// ```rust
    /// use phonix::Word;
    ///
    /// assert_eq!(Word::normalize("O'Brien, Jr.").as_str(), "OBRIENJR");
    /// assert!(Word::normalize("42").is_empty());
    /// ```
    pub fn normalize(raw: &str) -> Word {
        Word(
            raw.chars()
                .filter(char::is_ascii_alphabetic)
                .map(|c| c.to_ascii_uppercase())
                .collect(),
        )
    }

    /// Build a word from bytes already in the normalized domain.
    ///
    /// Callers must pass ASCII uppercase letters only; rule replacements and
    /// copied input bytes both satisfy this.
    pub(crate) fn from_ascii(bytes: Vec<u8>) -> Word {
        debug_assert!(bytes.iter().all(u8::is_ascii_uppercase));
        Word(bytes.into_iter().map(char::from).collect())
    }

    /// The word as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The word as raw letter bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Number of letters in the word.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if normalization removed every character.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for Word {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Word {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_uppercases_and_strips() {
        assert_eq!(Word::normalize("smith"), "SMITH");
        assert_eq!(Word::normalize("  d'Arcy-Jones 3rd "), "DARCYJONESRD");
        assert_eq!(Word::normalize("MacLeod"), "MACLEOD");
    }

    #[test]
    fn test_normalize_degenerate_input() {
        assert!(Word::normalize("").is_empty());
        assert!(Word::normalize("1234 .,;!").is_empty());
        assert_eq!(Word::normalize("1234 .,;!").len(), 0);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = Word::normalize("O'Connor");
        let twice = Word::normalize(once.as_str());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_non_ascii_letters_are_stripped() {
        // The schemes are defined over A-Z only.
        assert_eq!(Word::normalize("Müller"), "MLLER");
    }

    #[test]
    fn test_display_round_trips() {
        let word = Word::normalize("Gayle");
        assert_eq!(word.to_string(), "GAYLE");
    }
}
