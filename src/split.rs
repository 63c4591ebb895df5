//! The full two-part key: retrieval code plus ending-sound.
//!
//! Beyond the single 4-character code, Gadd's complete algorithm splits the
//! respelled word at its last vowel and encodes the two halves separately:
//! a variable-length *retrieval code* (initial letter plus the digit run of
//! everything up to and including the last vowel) and an *ending-sound* (the
//! digit run of what follows it). Knight becomes `N5` + `3`, White becomes
//! `W` + `3` with everything before the final T in the zero group.
//!
//! Two keys whose retrieval codes agree are then ranked by how their
//! ending-sounds relate ([`SplitKey::candidacy`]): identical endings are
//! likely matches, a one-digit overhang on a shared prefix is less likely,
//! anything else least likely. [`search`] applies that ranking across a whole
//! corpus of keys.
//!
//! The respelling here runs without the leading-vowel placeholder rule; the
//! initial letter is retained out of band instead, so a vowel-initial word
//! contributes no spurious digit (Yaeger keys as `V2`, not `V72`).

use std::fmt;

use crate::encoding::{digit_run, PHONIX};
use crate::rules::{apply_all, substitution_rules};
use crate::word::Word;

/// Vowel class for the split; `Y` counts as a vowel here, as in the
/// initial-letter retention step.
const SPLIT_VOWELS: &[u8] = b"AEIOUY";

/// A two-part phonetic key: retrieval code and ending-sound.
///
/// Produced by [`crate::phonix_split`]. Both parts are variable-length; a
/// word whose tail letters all map to the zero group has an empty
/// ending-sound.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SplitKey {
    retrieval: String,
    ending: String,
}

/// How strongly a candidate key matches a query key with the same retrieval
/// code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Candidacy {
    /// Ending-sounds agree exactly.
    Likely,
    /// One ending-sound extends the other by a single digit.
    LessLikely,
    /// Ending-sounds diverge.
    LeastLikely,
}

impl SplitKey {
    /// The retrieval code: initial letter plus the digit run up to and
    /// including the last vowel.
    pub fn retrieval(&self) -> &str {
        &self.retrieval
    }

    /// The ending-sound: the digit run after the last vowel.
    pub fn ending(&self) -> &str {
        &self.ending
    }

    /// Both parts joined into one compact code (`N5` + `3` prints as `N53`),
    /// the form the published worked examples use.
    pub fn collapsed(&self) -> String {
        format!("{}{}", self.retrieval, self.ending)
    }

    /// Rank `candidate` against this key.
    ///
    /// `None` means the retrieval codes differ and the candidate is not
    /// considered at all. With equal retrieval codes, the ending-sounds
    /// decide the tier:
    ///
    /// 1. equal endings are [`Candidacy::Likely`];
    /// 2. a multi-digit query ending against an empty candidate ending is
    ///    [`Candidacy::LeastLikely`];
    /// 3. endings where one is a prefix of the other and the lengths differ
    ///    by exactly one are [`Candidacy::LessLikely`];
    /// 4. everything else is [`Candidacy::LeastLikely`].
    pub fn candidacy(&self, candidate: &SplitKey) -> Option<Candidacy> {
        if self.retrieval != candidate.retrieval {
            return None;
        }
        if self.ending == candidate.ending {
            return Some(Candidacy::Likely);
        }
        if self.ending.len() > 1 && candidate.ending.is_empty() {
            return Some(Candidacy::LeastLikely);
        }
        let overlap = self.ending.len().min(candidate.ending.len());
        if self.ending.len().abs_diff(candidate.ending.len()) == 1
            && self.ending.as_bytes()[..overlap] == candidate.ending.as_bytes()[..overlap]
        {
            return Some(Candidacy::LessLikely);
        }
        Some(Candidacy::LeastLikely)
    }
}

impl fmt::Display for SplitKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.retrieval, self.ending)
    }
}

/// Build the two-part key for a normalized word.
pub(crate) fn split_key(word: &Word) -> SplitKey {
    let respelled = apply_all(substitution_rules(), word);
    let Some(&first) = respelled.as_bytes().first() else {
        // No letters at all: a placeholder retrieval code, nothing to rank.
        return SplitKey {
            retrieval: String::from("0"),
            ending: String::new(),
        };
    };
    let initial = if SPLIT_VOWELS.contains(&first) {
        b'V'
    } else {
        first
    };

    let mut name = respelled.as_bytes().to_vec();
    if name.ends_with(b"ES") {
        name.remove(name.len() - 2);
    }
    // A trailing vowel (or a word with no vowel at all) gets a marker E, so
    // the split below always leaves the final sound after a vowel.
    match name.last().copied() {
        Some(last) if SPLIT_VOWELS.contains(&last) => name.push(b'E'),
        Some(_) if !name.iter().any(|l| SPLIT_VOWELS.contains(l)) => name.push(b'E'),
        _ => {}
    }

    // The ending-sound starts after the last vowel that still has letters
    // behind it; with no such vowel the whole body is the ending and the
    // head is a dummy vowel that encodes to nothing.
    let (head, tail) = match name[..name.len() - 1]
        .iter()
        .rposition(|l| SPLIT_VOWELS.contains(l))
    {
        Some(at) => name.split_at(at + 1),
        None => (&b"E"[..], &name[..]),
    };

    let mut retrieval = String::from(char::from(initial));
    retrieval.push_str(&digit_run(head, &PHONIX));
    SplitKey {
        retrieval,
        ending: digit_run(tail, &PHONIX),
    }
}

/// Indices of a key corpus partitioned into the three candidacy tiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResult {
    /// Corpus positions whose keys rank [`Candidacy::Likely`].
    pub likely: Vec<usize>,
    /// Corpus positions whose keys rank [`Candidacy::LessLikely`].
    pub less_likely: Vec<usize>,
    /// Corpus positions whose keys rank [`Candidacy::LeastLikely`].
    pub least_likely: Vec<usize>,
}

/// Rank every key in `corpus` against `query`.
///
/// Keys with a different retrieval code are skipped entirely; the rest land
/// in one of the three tiers, identified by their position in the corpus.
pub fn search<'a, I>(query: &SplitKey, corpus: I) -> SearchResult
where
    I: IntoIterator<Item = &'a SplitKey>,
{
    let mut result = SearchResult::default();
    for (i, key) in corpus.into_iter().enumerate() {
        match query.candidacy(key) {
            Some(Candidacy::Likely) => result.likely.push(i),
            Some(Candidacy::LessLikely) => result.less_likely.push(i),
            Some(Candidacy::LeastLikely) => result.least_likely.push(i),
            None => {}
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(raw: &str) -> SplitKey {
        split_key(&Word::normalize(raw))
    }

    fn parts(raw: &str) -> (String, String) {
        let k = key(raw);
        (k.retrieval().to_string(), k.ending().to_string())
    }

    #[test]
    fn test_split_at_the_last_vowel() {
        // KNIGHT respells to NIT: retrieval N + digits(NI), ending digits(T).
        assert_eq!(parts("Knight"), ("N5".into(), "3".into()));
        // WEIGHT respells to WEIT: everything before the T is zero-group.
        assert_eq!(parts("Weight"), ("W".into(), "3".into()));
    }

    #[test]
    fn test_initial_vowel_is_retained_without_a_digit() {
        // YAEGER respells to YAEGEAH; the leading vowel becomes the V
        // placeholder out of band instead of encoding as a 7.
        assert_eq!(parts("Yaeger"), ("V2".into(), "".into()));
        assert_eq!(parts("Eager"), ("V2".into(), "".into()));
    }

    #[test]
    fn test_trailing_vowel_yields_an_empty_ending() {
        assert_eq!(parts("Yoga"), ("V2".into(), "".into()));
    }

    #[test]
    fn test_vowelless_word_keeps_its_body_as_the_ending() {
        assert_eq!(parts("fff"), ("F".into(), "7".into()));
    }

    #[test]
    fn test_degenerate_input() {
        assert_eq!(parts("1234"), ("0".into(), "".into()));
    }

    #[test]
    fn test_display_and_collapsed_forms() {
        let k = key("Knight");
        assert_eq!(k.to_string(), "N5,3");
        assert_eq!(k.collapsed(), "N53");
    }

    #[test]
    fn test_candidacy_tiers() {
        let knight = key("Knight");
        let night = key("Night");
        assert_eq!(knight.candidacy(&night), Some(Candidacy::Likely));

        // Same retrieval code, candidate ending one digit short on a shared
        // prefix.
        let query = SplitKey {
            retrieval: "N5".into(),
            ending: "3".into(),
        };
        let shorter = SplitKey {
            retrieval: "N5".into(),
            ending: "".into(),
        };
        assert_eq!(query.candidacy(&shorter), Some(Candidacy::LessLikely));

        // A multi-digit ending against an empty one skips the prefix rule.
        let long = SplitKey {
            retrieval: "N5".into(),
            ending: "35".into(),
        };
        assert_eq!(long.candidacy(&shorter), Some(Candidacy::LeastLikely));

        // Diverging digits on equal-length overhang.
        let other = SplitKey {
            retrieval: "N5".into(),
            ending: "53".into(),
        };
        assert_eq!(query.candidacy(&other), Some(Candidacy::LeastLikely));

        // Different retrieval codes never rank at all.
        assert_eq!(knight.candidacy(&key("Wright")), None);
    }

    #[test]
    fn test_search_partitions_a_corpus() {
        let corpus: Vec<SplitKey> = ["Night", "Nite", "Wright", "Knox"]
            .iter()
            .map(|n| key(n))
            .collect();
        let result = search(&key("Knight"), &corpus);
        // Night and Nite share the whole key; Knox shares the retrieval code
        // N5 but its ending diverges; Wright has a different retrieval code
        // and is not ranked at all.
        assert_eq!(result.likely, vec![0, 1]);
        assert!(result.less_likely.is_empty());
        assert_eq!(result.least_likely, vec![3]);
    }
}
