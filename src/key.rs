//! The fixed-width phonetic key type.
//!
//! A [`Key`] is always exactly [`KEY_LEN`] characters: one letter followed by
//! similarity-group digits, with `'0'` used only as trailing padding. The one
//! degenerate shape is `0000`, produced when the input had no letters at all.
//!
//! Keys are plain value types meant to be stored in indexes and compared for
//! equality; [`FromStr`] re-parses a previously stored key, and the optional
//! `serde` feature serializes a key as its 4-character string.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Width of every phonetic key, in characters.
pub const KEY_LEN: usize = 4;

/// A 4-character phonetic key: a letter followed by group digits.
///
/// Produced by [`crate::soundex`] and [`crate::phonix`]; immutable once built.
///
/// ```rust
/// use phonix::Key;
///
/// let key = phonix::soundex("Pedro");
/// assert_eq!(key, "P360");
/// assert_eq!(key.to_string().parse::<Key>(), Ok(key));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key([u8; KEY_LEN]);

impl Key {
    pub(crate) fn new(bytes: [u8; KEY_LEN]) -> Key {
        Key(bytes)
    }

    /// The key as raw ASCII bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    /// The leading letter of the key, or `'0'` for the degenerate empty key.
    pub fn initial(&self) -> char {
        char::from(self.0[0])
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            fmt::Write::write_char(f, char::from(b))?;
        }
        Ok(())
    }
}

impl PartialEq<str> for Key {
    fn eq(&self, other: &str) -> bool {
        self.0.as_slice() == other.as_bytes()
    }
}

impl PartialEq<&str> for Key {
    fn eq(&self, other: &&str) -> bool {
        self.0.as_slice() == other.as_bytes()
    }
}

/// Rejection reasons when re-parsing a stored key.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseKeyError {
    /// The input was not exactly [`KEY_LEN`] characters.
    #[error("key must be exactly {KEY_LEN} characters, got {0}")]
    Length(usize),
    /// A character was outside the key alphabet (leading `A-Z` or `0`,
    /// then digits `0-8`).
    #[error("invalid character {0:?} in key")]
    Character(char),
}

impl FromStr for Key {
    type Err = ParseKeyError;

    /// Parse a key previously produced by [`fmt::Display`].
    ///
    /// The first character must be an uppercase letter (or `'0'` for the
    /// degenerate key); the rest must be digits in `0..=8`, the range the
    /// similarity-group tables emit.
    fn from_str(s: &str) -> Result<Key, ParseKeyError> {
        let bytes = s.as_bytes();
        if bytes.len() != KEY_LEN {
            return Err(ParseKeyError::Length(s.chars().count()));
        }
        let mut key = [0u8; KEY_LEN];
        for (i, &b) in bytes.iter().enumerate() {
            let ok = if i == 0 {
                b.is_ascii_uppercase() || b == b'0'
            } else {
                (b'0'..=b'8').contains(&b)
            };
            if !ok {
                return Err(ParseKeyError::Character(char::from(b)));
            }
            key[i] = b;
        }
        Ok(Key(key))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Key {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Key {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Key, D::Error> {
        struct KeyVisitor;

        impl serde::de::Visitor<'_> for KeyVisitor {
            type Value = Key;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a {KEY_LEN}-character phonetic key")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Key, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(KeyVisitor)
    }
}
