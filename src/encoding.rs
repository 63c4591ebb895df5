//! Digit tables and the shared digit-encoder.
//!
//! Both schemes end in the same encoding pass; they differ only in which
//! 26-entry [`DigitTable`] maps letters onto the 8 phonetic similarity
//! groups, and in whether the rewrite rules ran first.
//!
//! The encoder keeps the first letter of the word verbatim, converts the
//! remaining letters to group digits, collapses runs of equal digits, strips
//! every `'0'` (the "ignore" group: vowels and near-silent letters), and pads
//! or truncates the result to [`KEY_LEN`] characters.

use smallvec::SmallVec;

use crate::key::{Key, KEY_LEN};
use crate::word::Word;

/// Letter-to-group mapping for one scheme.
///
/// 26 entries, `A..=Z` in order, each a digit character `'0'..='8'`. Tables
/// are process-wide constants shared read-only by all encode calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitTable([u8; 26]);

//                                                 ABCDEFGHIJKLMNOPQRSTUVWXYZ
/// Soundex similarity groups (plain scheme).
pub const SOUNDEX: DigitTable = DigitTable(*b"01230120022455012623010202");
/// Phonix similarity groups (augmented scheme).
pub const PHONIX: DigitTable = DigitTable(*b"01230720022455012683070808");

impl DigitTable {
    /// Group digit for an uppercase letter.
    ///
    /// Letters come from a [`Word`], whose invariant confines them to
    /// `A..=Z`; no other input can reach this lookup.
    pub fn digit(&self, letter: u8) -> u8 {
        debug_assert!(letter.is_ascii_uppercase());
        self.0[usize::from(letter - b'A')]
    }
}

/// Encode a normalized (and possibly rule-transformed) word into its key.
///
/// The steps, in order:
///
/// 1. keep the first letter verbatim (in the augmented scheme a leading vowel
///    has already been rewritten to the `V` placeholder by the rule table);
/// 2. map each remaining letter to its group digit, skipping any digit equal
///    to the last digit actually emitted — duplicates collapse even when they
///    come from different letters;
/// 3. strip every `'0'` digit, wherever it occurs;
/// 4. pad with `'0'` (or truncate) to exactly [`KEY_LEN`] characters.
///
/// The empty word encodes to `0000`; no input can fail.
pub fn encode(word: &Word, table: &DigitTable) -> Key {
    let mut key = [b'0'; KEY_LEN];
    let Some((&first, rest)) = word.as_bytes().split_first() else {
        return Key::new(key);
    };
    key[0] = first;

    let mut digits: SmallVec<[u8; 12]> = SmallVec::new();
    for &letter in rest {
        let digit = table.digit(letter);
        if digits.last() != Some(&digit) {
            digits.push(digit);
        }
    }

    let mut at = 1;
    for &digit in digits.iter().filter(|&&d| d != b'0') {
        if at == KEY_LEN {
            break;
        }
        key[at] = digit;
        at += 1;
    }
    Key::new(key)
}

/// Unpadded digit run for a letter sequence.
///
/// Every letter (including the first) maps to its group digit, consecutive
/// duplicates collapse, and zeros drop. Unlike [`encode`] there is no
/// verbatim first letter and no fixed width; the split-key scheme builds its
/// variable-length retrieval and ending codes from this.
pub fn digit_run(letters: &[u8], table: &DigitTable) -> String {
    let mut run = String::new();
    let mut last = 0u8;
    for &letter in letters {
        let digit = table.digit(letter);
        if digit != last {
            last = digit;
            if digit != b'0' {
                run.push(char::from(digit));
            }
        }
    }
    run
}
