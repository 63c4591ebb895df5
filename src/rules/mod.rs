//! The phonetic rewrite rule engine (augmented scheme only).
//!
//! Before digit-encoding, the Phonix scheme respells the normalized word with
//! an ordered table of pattern/replacement rules: `PH -> F`, `KN -> N` at the
//! start of a word, `R -> AH` after a vowel at the end of a word, and so on.
//!
//! Three properties of the engine carry the system's semantics:
//!
//! - **Order is load-bearing.** Each rule is applied exactly once, in table
//!   order, to the cumulative output of the rules before it. Swapping two
//!   rules can change the result (`CE -> SE` must see the word before
//!   `NC -> NK` does).
//! - **Contexts are zero-width.** Start/end anchors and the vowel/consonant
//!   guards gate whether a rule fires, but the replaced span never includes
//!   the context characters themselves.
//! - **Application is total.** A rule that matches nowhere is a no-op, never
//!   an error.
//!
//! The table itself lives in [`table`]; [`transcribe`] runs the whole
//! pipeline over a word.

pub mod application;
pub mod matching;
pub mod table;
pub mod types;

pub use application::{apply, apply_all};
pub use matching::match_at;
pub use table::{phonix_rules, substitution_rules};
pub use types::{Atom, Guard, Out, Rule};

use crate::word::Word;

/// Respell a normalized word with the full ordered Phonix rule table.
///
/// The output is the phonetically canonical spelling the encoder consumes; a
/// leading vowel has been rewritten to the `V` placeholder by the final rule.
///
/// ```rust
/// use phonix::rules::transcribe;
/// use phonix::Word;
///
/// assert_eq!(transcribe(&Word::normalize("wright")).as_str(), "RIT");
/// assert_eq!(transcribe(&Word::normalize("eager")).as_str(), "VAGEAH");
/// ```
pub fn transcribe(word: &Word) -> Word {
    apply_all(phonix_rules(), word)
}
