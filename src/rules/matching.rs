//! Anchored, guarded pattern matching at a position.
//!
//! Matching answers one question: does this rule fire at this position of the
//! working string, and if so, how far does the consumed span reach? The
//! zero-width parts — anchors and lookbehind/lookahead guards — are checked
//! against the string but contribute nothing to the span.
//!
//! Optional atoms are matched greedily with backtracking, so a trailing
//! end-anchor can still reject the greedy branch and accept the short one
//! (`LE(S?)$` matches both `...LES` and `...LE`, and neither in `...LESX`).

use super::types::{Atom, Rule};

/// A successful match of a rule's pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    /// One past the last consumed byte.
    pub end: usize,
    /// Byte range of the captured group, if the pattern has one. Empty
    /// captures are represented as an empty range.
    pub capture: Option<(usize, usize)>,
}

/// Try to match `rule` with its pattern starting at `pos` in `s`.
///
/// Returns the consumed span and capture on success; `None` means the rule
/// does not fire here, which is a normal outcome, not an error.
pub fn match_at(rule: &Rule, s: &[u8], pos: usize) -> Option<Hit> {
    if rule.anchor_start && pos != 0 {
        return None;
    }
    if let Some(guard) = &rule.behind {
        if pos == 0 || !guard.matches(s[pos - 1]) {
            return None;
        }
    }
    let (end, capture) = match_atoms(rule, &rule.pattern, s, pos)?;
    Some(Hit { end, capture })
}

/// Match the remaining atoms at `at`, then the rule's tail conditions (end
/// anchor and lookahead guard). Backtracks through optional atoms.
fn match_atoms(
    rule: &Rule,
    atoms: &[Atom],
    s: &[u8],
    at: usize,
) -> Option<(usize, Option<(usize, usize)>)> {
    let Some((atom, rest)) = atoms.split_first() else {
        if rule.anchor_end && at != s.len() {
            return None;
        }
        if let Some(guard) = &rule.ahead {
            match s.get(at) {
                Some(&next) if guard.matches(next) => {}
                _ => return None,
            }
        }
        return Some((at, None));
    };

    match atom {
        Atom::Lit(letter) => {
            if s.get(at) == Some(letter) {
                match_atoms(rule, rest, s, at + 1)
            } else {
                None
            }
        }
        Atom::Set(set) => match s.get(at) {
            Some(letter) if set.contains(letter) => match_atoms(rule, rest, s, at + 1),
            _ => None,
        },
        Atom::Opt(letter) => {
            if s.get(at) == Some(letter) {
                if let Some(hit) = match_atoms(rule, rest, s, at + 1) {
                    return Some(hit);
                }
            }
            match_atoms(rule, rest, s, at)
        }
        Atom::OptCapture(letter) => {
            if s.get(at) == Some(letter) {
                if let Some((end, _)) = match_atoms(rule, rest, s, at + 1) {
                    return Some((end, Some((at, at + 1))));
                }
            }
            match_atoms(rule, rest, s, at).map(|(end, _)| (end, Some((at, at))))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::types::Guard;

    fn hit(rule: &Rule, s: &[u8], pos: usize) -> Option<usize> {
        match_at(rule, s, pos).map(|h| h.end)
    }

    #[test]
    fn test_plain_literal_match() {
        let rule = Rule::new("DG", "G");
        assert_eq!(hit(&rule, b"EDGE", 1), Some(3));
        assert_eq!(hit(&rule, b"EDGE", 0), None);
        assert_eq!(hit(&rule, b"EDGE", 3), None);
    }

    #[test]
    fn test_start_anchor() {
        let rule = Rule::new("WR", "R").at_start();
        assert_eq!(hit(&rule, b"WRIGHT", 0), Some(2));
        assert_eq!(hit(&rule, b"AWRY", 1), None);
    }

    #[test]
    fn test_end_anchor() {
        let rule = Rule::new("GN", "N").at_end();
        assert_eq!(hit(&rule, b"SIGN", 2), Some(4));
        assert_eq!(hit(&rule, b"SIGNAL", 2), None);
    }

    #[test]
    fn test_lookahead_is_zero_width() {
        let rule = Rule::new("C", "K").before(Guard::OneOf(b"OAU"));
        // Only the C is consumed; the O gates the match without joining it.
        assert_eq!(hit(&rule, b"COLE", 0), Some(1));
        assert_eq!(hit(&rule, b"CELL", 0), None);
        // A guard at the very end of the string has nothing to inspect.
        assert_eq!(hit(&rule, b"ARC", 2), None);
    }

    #[test]
    fn test_lookbehind_is_zero_width() {
        let rule = Rule::new("R", "AH").after(Guard::Vowel).at_end();
        assert_eq!(hit(&rule, b"PETER", 4), Some(5));
        assert_eq!(hit(&rule, b"HENDR", 4), None);
        // Lookbehind at the start of the word has nothing to inspect.
        assert_eq!(hit(&rule, b"R", 0), None);
    }

    #[test]
    fn test_optional_atom_is_greedy() {
        let rule = Rule::new("CH?R", "KR").at_start().before(Guard::OneOf(b"OAU"));
        assert_eq!(hit(&rule, b"CHROME", 0), Some(3));
        assert_eq!(hit(&rule, b"CRUMB", 0), Some(2));
        assert_eq!(hit(&rule, b"CHRIST", 0), None);
    }

    #[test]
    fn test_optional_backtracks_against_end_anchor() {
        let rule = Rule::new("LE(S?)", "ILE$1").after(Guard::Consonant).at_end();

        let hit = match_at(&rule, b"BLES", 1).expect("LES matches");
        assert_eq!(hit.end, 4);
        assert_eq!(hit.capture, Some((3, 4)));

        let hit = match_at(&rule, b"BLE", 1).expect("LE matches");
        assert_eq!(hit.end, 3);
        assert_eq!(hit.capture, Some((3, 3)));

        assert_eq!(match_at(&rule, b"BLESX", 1), None);
    }

    #[test]
    fn test_set_atom_is_consumed() {
        let rule = Rule::new("[GJ]C", "K").at_end();
        assert_eq!(hit(&rule, b"MAGC", 2), Some(4));
        assert_eq!(hit(&rule, b"MAJC", 2), Some(4));
        assert_eq!(hit(&rule, b"MARC", 2), None);
    }
}
