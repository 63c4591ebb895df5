//! Rule, pattern and context types for the rewrite engine.
//!
//! A [`Rule`] pairs a consumed pattern with a replacement template, plus the
//! zero-width context that gates it: optional start/end anchors and optional
//! letter-class guards on the characters just before and just after the
//! match. Guards are inspected but never consumed or replaced.
//!
//! Patterns are written in a small notation compiled once when the rule table
//! is built:
//!
//! - `DG` — literal letters;
//! - `[GJ]` — any one letter of the set;
//! - `H?` — an optional letter;
//! - `(S?)` — an optional letter whose matched text (possibly empty) is
//!   captured for the replacement;
//!
//! and replacements are literal letters with `$1` splicing in the capture,
//! e.g. `Rule::new("LE(S?)", "ILE$1")`.

use std::fmt;

/// Vowel class used by the zero-width guards.
pub const VOWELS: &[u8] = b"AEIOU";

/// Consonant class used by the zero-width guards.
///
/// This is the literal set from the published rule table, not the complement
/// of [`VOWELS`]: `Y` is a member while `K` and `W` are not. The rule author
/// encoded it explicitly, and reproducing it verbatim is what matches the
/// reference codes.
pub const CONSONANTS: &[u8] = b"BCDFGHJLMNPQRSTVXZXY";

/// A zero-width letter-class constraint on the character adjacent to a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    /// One of [`VOWELS`].
    Vowel,
    /// One of the literal [`CONSONANTS`] set.
    Consonant,
    /// Any letter at all (the position merely has to exist).
    Letter,
    /// One of an explicit letter set.
    OneOf(&'static [u8]),
}

impl Guard {
    /// Does `letter` satisfy this guard?
    pub fn matches(&self, letter: u8) -> bool {
        match self {
            Guard::Vowel => VOWELS.contains(&letter),
            Guard::Consonant => CONSONANTS.contains(&letter),
            Guard::Letter => letter.is_ascii_uppercase(),
            Guard::OneOf(set) => set.contains(&letter),
        }
    }
}

/// One consumed element of a rule pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Atom {
    /// A single literal letter.
    Lit(u8),
    /// Any one letter of the set.
    Set(Vec<u8>),
    /// An optional literal letter (matched greedily, with backtracking).
    Opt(u8),
    /// An optional literal letter whose matched text is captured.
    OptCapture(u8),
}

/// One element of a replacement template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Out {
    /// A literal letter.
    Lit(u8),
    /// The text matched by the pattern's capture (possibly empty).
    Capture,
}

/// An ordered rewrite rule: zero-width context, consumed pattern, replacement.
///
/// Rules are data; applying them is the business of
/// [`crate::rules::application`]. Position in the rule table is part of a
/// rule's meaning — see the module docs of [`crate::rules`].
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pattern_src: &'static str,
    replacement_src: &'static str,
    pub(crate) anchor_start: bool,
    pub(crate) anchor_end: bool,
    pub(crate) behind: Option<Guard>,
    pub(crate) ahead: Option<Guard>,
    pub(crate) pattern: Vec<Atom>,
    pub(crate) replacement: Vec<Out>,
}

impl Rule {
    /// Build an unanchored, unguarded rule from pattern notation and a
    /// replacement template.
    ///
    /// Panics on malformed notation; the table is static data and a bad rule
    /// is a programming error caught by the table's own tests.
    pub fn new(pattern: &'static str, replacement: &'static str) -> Rule {
        Rule {
            pattern_src: pattern,
            replacement_src: replacement,
            anchor_start: false,
            anchor_end: false,
            behind: None,
            ahead: None,
            pattern: compile_pattern(pattern),
            replacement: compile_replacement(replacement),
        }
    }

    /// Anchor the match to the start of the word.
    pub fn at_start(mut self) -> Rule {
        self.anchor_start = true;
        self
    }

    /// Anchor the match to the end of the word.
    pub fn at_end(mut self) -> Rule {
        self.anchor_end = true;
        self
    }

    /// Require the letter before the match to satisfy `guard` (zero-width
    /// lookbehind; fails at the start of the word).
    pub fn after(mut self, guard: Guard) -> Rule {
        self.behind = Some(guard);
        self
    }

    /// Require the letter after the match to satisfy `guard` (zero-width
    /// lookahead; fails at the end of the word).
    pub fn before(mut self, guard: Guard) -> Rule {
        self.ahead = Some(guard);
        self
    }

    /// The pattern notation this rule was built from.
    pub fn pattern_src(&self) -> &'static str {
        self.pattern_src
    }

    /// The replacement template this rule was built from.
    pub fn replacement_src(&self) -> &'static str {
        self.replacement_src
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.anchor_start {
            f.write_str("^")?;
        }
        f.write_str(self.pattern_src)?;
        if self.anchor_end {
            f.write_str("$")?;
        }
        write!(f, " -> {}", self.replacement_src)
    }
}

fn compile_pattern(src: &'static str) -> Vec<Atom> {
    let bytes = src.as_bytes();
    let mut atoms = Vec::new();
    let mut at = 0;
    while at < bytes.len() {
        match bytes[at] {
            b'[' => {
                let close = src[at..]
                    .find(']')
                    .map(|off| at + off)
                    .unwrap_or_else(|| panic!("unterminated set in pattern {src:?}"));
                atoms.push(Atom::Set(bytes[at + 1..close].to_vec()));
                at = close + 1;
            }
            b'(' => {
                // Only the captured-optional form `(X?)` is supported.
                match bytes.get(at..at + 4) {
                    Some([b'(', letter, b'?', b')']) if letter.is_ascii_uppercase() => {
                        atoms.push(Atom::OptCapture(*letter));
                        at += 4;
                    }
                    _ => panic!("malformed capture group in pattern {src:?}"),
                }
            }
            letter if letter.is_ascii_uppercase() => {
                if bytes.get(at + 1) == Some(&b'?') {
                    atoms.push(Atom::Opt(letter));
                    at += 2;
                } else {
                    atoms.push(Atom::Lit(letter));
                    at += 1;
                }
            }
            other => panic!("unsupported token {:?} in pattern {src:?}", char::from(other)),
        }
    }
    atoms
}

fn compile_replacement(src: &'static str) -> Vec<Out> {
    let bytes = src.as_bytes();
    let mut out = Vec::new();
    let mut at = 0;
    while at < bytes.len() {
        match bytes[at] {
            b'$' => {
                match bytes.get(at + 1) {
                    Some(b'1') => out.push(Out::Capture),
                    _ => panic!("malformed capture reference in replacement {src:?}"),
                }
                at += 2;
            }
            letter if letter.is_ascii_uppercase() => {
                out.push(Out::Lit(letter));
                at += 1;
            }
            other => panic!(
                "unsupported token {:?} in replacement {src:?}",
                char::from(other)
            ),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_pattern_compiles_to_lit_atoms() {
        let rule = Rule::new("DG", "G");
        assert_eq!(rule.pattern, vec![Atom::Lit(b'D'), Atom::Lit(b'G')]);
        assert_eq!(rule.replacement, vec![Out::Lit(b'G')]);
    }

    #[test]
    fn test_set_and_optional_atoms() {
        let rule = Rule::new("CH?R", "KR");
        assert_eq!(
            rule.pattern,
            vec![Atom::Lit(b'C'), Atom::Opt(b'H'), Atom::Lit(b'R')]
        );

        let rule = Rule::new("[GJ]C", "K");
        assert_eq!(
            rule.pattern,
            vec![Atom::Set(b"GJ".to_vec()), Atom::Lit(b'C')]
        );
    }

    #[test]
    fn test_capture_notation() {
        let rule = Rule::new("LE(S?)", "ILE$1");
        assert_eq!(
            rule.pattern,
            vec![Atom::Lit(b'L'), Atom::Lit(b'E'), Atom::OptCapture(b'S')]
        );
        assert_eq!(
            rule.replacement,
            vec![Out::Lit(b'I'), Out::Lit(b'L'), Out::Lit(b'E'), Out::Capture]
        );
    }

    #[test]
    fn test_empty_replacement() {
        let rule = Rule::new("E", "");
        assert!(rule.replacement.is_empty());
    }

    #[test]
    fn test_guard_classes() {
        assert!(Guard::Vowel.matches(b'A'));
        assert!(!Guard::Vowel.matches(b'Y'));
        // The literal consonant class includes Y but not K or W.
        assert!(Guard::Consonant.matches(b'Y'));
        assert!(!Guard::Consonant.matches(b'K'));
        assert!(!Guard::Consonant.matches(b'W'));
        assert!(Guard::Letter.matches(b'Q'));
        assert!(Guard::OneOf(b"TD").matches(b'T'));
        assert!(!Guard::OneOf(b"TD").matches(b'L'));
    }

    #[test]
    fn test_display() {
        let rule = Rule::new("GN", "N").at_start();
        assert_eq!(rule.to_string(), "^GN -> N");
        let rule = Rule::new("GNES", "NS").at_end();
        assert_eq!(rule.to_string(), "GNES$ -> NS");
    }
}
