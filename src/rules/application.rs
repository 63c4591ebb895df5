//! Rule application: one rule over a whole string, and the ordered pipeline.
//!
//! [`apply`] rewrites every non-overlapping match of a single rule, scanning
//! the input left to right in one pass. Matching always inspects the *input*
//! string — a replacement never creates or destroys a match site for the same
//! rule, and lookbehind guards see the original neighbors, not freshly
//! written output.
//!
//! [`apply_all`] threads a word through the rule list in order; the output of
//! rule *i* is the input of rule *i + 1*. That cumulative feeding is what the
//! table's ordering relies on.

use smallvec::SmallVec;

use super::matching::match_at;
use super::types::{Out, Rule};
use crate::word::Word;

/// Apply one rule to `input`, replacing all non-overlapping matches left to
/// right. No match at all returns the input unchanged — a normal no-op.
pub fn apply(rule: &Rule, input: &[u8]) -> Vec<u8> {
    let mut out: SmallVec<[u8; 24]> = SmallVec::new();
    let mut at = 0;
    while at < input.len() {
        match match_at(rule, input, at) {
            // Every table pattern consumes at least one letter, so a hit
            // always advances the scan.
            Some(hit) if hit.end > at => {
                for piece in &rule.replacement {
                    match piece {
                        Out::Lit(letter) => out.push(*letter),
                        Out::Capture => {
                            if let Some((start, end)) = hit.capture {
                                out.extend_from_slice(&input[start..end]);
                            }
                        }
                    }
                }
                at = hit.end;
            }
            _ => {
                out.push(input[at]);
                at += 1;
            }
        }
    }
    out.into_vec()
}

/// Apply an ordered rule list sequentially: each rule runs exactly once over
/// the cumulative result of the rules before it. Rules are never reapplied to
/// their own output.
pub fn apply_all(rules: &[Rule], word: &Word) -> Word {
    let mut current = word.as_bytes().to_vec();
    for rule in rules {
        current = apply(rule, &current);
    }
    Word::from_ascii(current)
}
