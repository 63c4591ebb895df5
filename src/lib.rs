//! # phonix
//!
//! Phonetic keys for approximate ("sounds-like") string matching.
//!
//! A word is reduced to a fixed 4-character code so that words with similar
//! pronunciation collapse to the same key. Two schemes are provided, based on:
//!
//! > Gadd, T. N. "PHONIX: The Algorithm." Program 24, no. 4 (1990): 363-66.
//!
//! - [`soundex`] — the plain scheme: the word is normalized and digit-encoded
//!   with the Soundex similarity groups.
//! - [`phonix`] — the augmented scheme: before encoding, an ordered table of
//!   phonetic rewrite rules respells the word toward its pronunciation. The
//!   rule-transformed intermediate is returned alongside the key, since it is
//!   a useful normalization product in its own right.
//! - [`phonix_split`] — the augmented scheme's full two-part key: a
//!   variable-length retrieval code plus ending-sound, with a three-tier
//!   candidate ranking over corpora of such keys (see [`split`]).
//!
//! Both functions are total: any input string (mixed case, punctuation,
//! digits, empty) produces a key, and input with no letters at all encodes to
//! `0000`.
//!
//! ## Example
//!
//! ```rust
//! use phonix::{phonix, soundex};
//!
//! assert_eq!(soundex("Smith"), "S530");
//! assert_eq!(soundex("Smythe"), "S530");
//!
//! let (transcription, key) = phonix("Stephen");
//! assert_eq!(transcription.as_str(), "STEFEN");
//! assert_eq!(key, "S375");
//! ```
//!
//! ## Concurrency
//!
//! The digit tables and the rule list are immutable `'static` data built once
//! per process; every encode call owns its working buffers. Arbitrarily many
//! calls may run in parallel with no coordination.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod encoding;
pub mod key;
pub mod rules;
pub mod split;
pub mod word;

pub use key::{Key, KEY_LEN};
pub use split::{Candidacy, SplitKey};
pub use word::Word;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::key::Key;
    pub use crate::split::{Candidacy, SplitKey};
    pub use crate::word::Word;
    pub use crate::{phonix, phonix_split, soundex};
}

/// Encode a word with the plain (Soundex) scheme.
///
/// The input is normalized (uppercased, non-letters stripped) and digit-encoded
/// against [`encoding::SOUNDEX`]. No rewrite rules run.
///
/// ```rust
/// assert_eq!(phonix::soundex("Christine"), "C623");
/// assert_eq!(phonix::soundex("Kristina"), "K623");
/// ```
pub fn soundex(name: &str) -> Key {
    encoding::encode(&Word::normalize(name), &encoding::SOUNDEX)
}

/// Encode a word with the augmented (Phonix) scheme.
///
/// The normalized input is run through the full ordered rewrite rule table
/// ([`rules::phonix_rules`]) and the result is digit-encoded against
/// [`encoding::PHONIX`]. Returns the rule-transformed word together with its
/// key.
///
/// ```rust
/// let (word, key) = phonix::phonix("Knight");
/// assert_eq!(word.as_str(), "NIT");
/// assert_eq!(key, "N300");
/// ```
pub fn phonix(name: &str) -> (Word, Key) {
    let transcription = rules::transcribe(&Word::normalize(name));
    let key = encoding::encode(&transcription, &encoding::PHONIX);
    (transcription, key)
}

/// Encode a word with the augmented scheme's full two-part key.
///
/// Where [`phonix`] produces the compact single 4-character code, this
/// variant splits the respelled word at its last vowel and encodes a
/// variable-length retrieval code and ending-sound separately; see
/// [`split`] for the split and the three-tier candidate ranking built on it.
///
/// ```rust
/// let key = phonix::phonix_split("Knight");
/// assert_eq!(key.retrieval(), "N5");
/// assert_eq!(key.ending(), "3");
/// assert_eq!(key.collapsed(), "N53");
/// ```
pub fn phonix_split(name: &str) -> SplitKey {
    split::split_key(&Word::normalize(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schemes_disagree_where_rules_fire() {
        // PH -> F moves "stephen" from the 1-group to the 7-group.
        assert_eq!(soundex("stephen"), "S315");
        assert_eq!(phonix("stephen").1, "S375");
    }

    #[test]
    fn test_empty_input_is_total() {
        assert_eq!(soundex(""), "0000");
        let (word, key) = phonix("");
        assert!(word.is_empty());
        assert_eq!(key, "0000");
    }

    #[test]
    fn test_non_alphabetic_input_is_total() {
        assert_eq!(soundex("123 !?"), "0000");
        assert_eq!(phonix("123 !?").1, "0000");
    }

    #[test]
    fn test_augmented_scheme_returns_transcription() {
        let (word, key) = phonix("Peter");
        assert_eq!(word.as_str(), "PETEAH");
        assert_eq!(key, "P300");
    }
}
