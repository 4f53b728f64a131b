//! Knuth-Morris-Pratt search. O(n + m), never re-reads consumed text.

use crate::error::MatchError;
use crate::prefix_function::{build_prefix_function, PrefixFunctionTable};
use crate::symbol::Symbol;

use super::{MatchPositions, Matcher};

/// A pattern together with its prefix function, built once and reused for
/// every search. The table is only ever built from the pattern it sits next
/// to; keep (or clone) the matcher to reuse it.
#[derive(Debug, Clone)]
pub struct KmpMatcher<S> {
    pattern: Vec<S>,
    table: PrefixFunctionTable,
}

impl<S: Symbol> KmpMatcher<S> {
    pub fn new(pattern: &[S]) -> Self {
        let table = build_prefix_function(pattern);
        log::debug!("kmp: prefix function ready for {} symbols", pattern.len());

        KmpMatcher {
            pattern: pattern.to_vec(),
            table,
        }
    }

    pub fn table(&self) -> &PrefixFunctionTable {
        &self.table
    }

    fn positions(&self, text: &[S]) -> MatchPositions {
        if self.pattern.is_empty() {
            return MatchPositions::every_offset(text.len());
        }

        let mut positions = Vec::new();
        self.scan(text, |start| {
            log::trace!("kmp: match at {start}");
            positions.push(start);
            true
        });

        log::debug!("kmp: {} matches in {} symbols", positions.len(), text.len());
        MatchPositions::from(positions)
    }

    /// Walks `text`, handing each match start to `on_match` until it returns
    /// false. The pattern must be non-empty.
    fn scan(&self, text: &[S], mut on_match: impl FnMut(usize) -> bool) {
        let m = self.pattern.len();
        let mut j = 0;

        for (i, &symbol) in text.iter().enumerate() {
            while j > 0 && symbol != self.pattern[j] {
                j = self.table[j - 1];
            }

            if symbol == self.pattern[j] {
                j += 1;
            }

            if j == m {
                if !on_match(i + 1 - m) {
                    return;
                }
                // Fall back instead of resetting so overlapping matches are kept.
                j = self.table[j - 1];
            }
        }
    }
}

impl<S: Symbol> Matcher<S> for KmpMatcher<S> {
    fn name(&self) -> &'static str {
        "kmp"
    }

    fn pattern(&self) -> &[S] {
        &self.pattern
    }

    fn find_all(&self, text: &[S]) -> Result<MatchPositions, MatchError> {
        Ok(self.positions(text))
    }

    fn find_first(&self, text: &[S]) -> Result<Option<usize>, MatchError> {
        if self.pattern.is_empty() {
            return Ok(Some(0));
        }

        let mut first = None;
        self.scan(text, |start| {
            first = Some(start);
            false
        });
        Ok(first)
    }
}

/// All occurrences of `pattern` in `text`, overlapping ones included.
pub fn kmp_search<S: Symbol>(text: &[S], pattern: &[S]) -> MatchPositions {
    KmpMatcher::new(pattern).positions(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_search() {
        let positions = kmp_search(b"ABABDABACDABABCABAB", b"ABABC");
        assert_eq!(positions, [10]);

        let text = b"the cat sat on the mat with the bat";
        assert_eq!(kmp_search(text, b"the"), [0, 15, 28]);
    }

    #[test]
    fn test_overlapping_matches() {
        assert_eq!(kmp_search(b"aaaa", b"aa"), [0, 1, 2]);
        assert_eq!(kmp_search(b"abababa", b"aba"), [0, 2, 4]);
    }

    #[test]
    fn test_empty_pattern_matches_everywhere() {
        assert_eq!(kmp_search(b"abc", b""), [0, 1, 2, 3]);
        assert_eq!(kmp_search::<u8>(b"", b""), [0]);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(kmp_search(b"", b"a").is_empty());
        assert!(kmp_search(b"ab", b"abc").is_empty());
        assert!(kmp_search(b"hello world", b"xyz").is_empty());
        assert_eq!(kmp_search(b"abc", b"abc"), [0]);
    }

    #[test]
    fn test_char_symbols() {
        let text: Vec<char> = "ñoño y ñoña".chars().collect();
        let pattern: Vec<char> = "ño".chars().collect();
        assert_eq!(kmp_search(&text, &pattern), [0, 2, 7]);
    }

    #[test]
    fn test_matcher_is_reusable() {
        let matcher = KmpMatcher::new(b"hello");
        for text in [&b"hello world"[..], &b"say hello"[..], &b"goodbye"[..]] {
            let expected = kmp_search(text, b"hello");
            assert_eq!(matcher.find_all(text).unwrap(), expected);
        }
        assert_eq!(matcher.table().as_slice(), &[0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_find_first_stops_early() {
        let matcher = KmpMatcher::new(b"ab");
        assert_eq!(matcher.find_first(b"xxabab").unwrap(), Some(2));
        assert_eq!(matcher.find_first(b"xxx").unwrap(), None);
        assert_eq!(KmpMatcher::new(b"").find_first(b"xyz").unwrap(), Some(0));
    }

    #[test]
    fn test_kept_matcher_only_matches_its_pattern() {
        // "aaaa" has the table [0, 1, 2, 3]; fed to "abcd" it would report "bbcd".
        let matcher = KmpMatcher::new(b"abcd");
        assert_eq!(matcher.table(), &build_prefix_function(b"abcd"));
        assert_ne!(matcher.table(), &build_prefix_function(b"aaaa"));

        let kept = matcher.clone();
        assert!(kept.find_all(b"abbcd").unwrap().is_empty());
        assert_eq!(kept.find_all(b"xabcdabcd").unwrap(), [1, 5]);
        assert_eq!(kept.find_all(b"abbcd").unwrap(), kmp_search(b"abbcd", b"abcd"));
    }
}
