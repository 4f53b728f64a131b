//! Prefix function (failure function, LPS array).
//!
//! `table[i]` is the length of the longest proper prefix of `s[..=i]` that is
//! also a suffix of it. Building the table is O(n): every fallback strictly
//! shrinks the current border, and the border grows by at most one per step.

use std::ops::Deref;

use serde::Serialize;

use crate::symbol::Symbol;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PrefixFunctionTable(Vec<usize>);

impl PrefixFunctionTable {
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.0
    }

    /// Longest proper border of the whole string; 0 for empty input.
    pub fn border_len(&self) -> usize {
        self.0.last().copied().unwrap_or(0)
    }

    /// Smallest `p` such that `s[i] == s[i + p]` for every valid `i`.
    pub fn shortest_period(&self) -> usize {
        self.0.len() - self.border_len()
    }
}

impl Deref for PrefixFunctionTable {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        &self.0
    }
}

pub fn build_prefix_function<S: Symbol>(s: &[S]) -> PrefixFunctionTable {
    let mut table = vec![0; s.len()];
    let mut len = 0;

    for i in 1..s.len() {
        while len > 0 && s[i] != s[len] {
            len = table[len - 1];
        }

        if s[i] == s[len] {
            len += 1;
        }

        table[i] = len;
    }

    log::trace!("prefix function built over {} symbols", s.len());
    PrefixFunctionTable(table)
}

/// True when `s` is two or more copies of a shorter block.
pub fn is_repetition<S: Symbol>(s: &[S]) -> bool {
    let table = build_prefix_function(s);
    let period = table.shortest_period();
    table.border_len() > 0 && s.len() % period == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive_border(s: &[u8]) -> usize {
        (0..s.len())
            .rev()
            .find(|&k| s[..k] == s[s.len() - k..])
            .unwrap_or(0)
    }

    #[test]
    fn test_known_tables() {
        assert_eq!(build_prefix_function(b"ABABC").into_vec(), vec![0, 0, 1, 2, 0]);
        assert_eq!(build_prefix_function(b"aabaaab").into_vec(), vec![0, 1, 0, 1, 2, 2, 3]);
        assert_eq!(build_prefix_function(b"aaaa").into_vec(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_empty_and_single() {
        let empty = build_prefix_function::<u8>(&[]);
        assert!(empty.is_empty());
        assert_eq!(empty.border_len(), 0);
        assert_eq!(empty.shortest_period(), 0);

        assert_eq!(build_prefix_function(b"x").into_vec(), vec![0]);
    }

    #[test]
    fn test_table_bounds_and_borders() {
        for s in [
            &b"abacabadabacaba"[..],
            &b"abcabcabcx"[..],
            &b"zzzyzzz"[..],
            &b"mississippi"[..],
        ] {
            let table = build_prefix_function(s);
            assert_eq!(table[0], 0);
            for i in 0..s.len() {
                assert!(table[i] <= i);
                assert_eq!(table[i], naive_border(&s[..=i]), "position {i} of {s:?}");
            }
        }
    }

    #[test]
    fn test_char_symbols() {
        let s: Vec<char> = "ñaña".chars().collect();
        assert_eq!(build_prefix_function(&s).into_vec(), vec![0, 0, 1, 2]);
    }

    #[test]
    fn test_shortest_period() {
        assert_eq!(build_prefix_function(b"abcabcab").shortest_period(), 3);
        assert_eq!(build_prefix_function(b"abcd").shortest_period(), 4);
    }

    #[test]
    fn test_is_repetition() {
        assert!(is_repetition(b"abab"));
        assert!(is_repetition(b"abcabcabcabc"));
        assert!(is_repetition(b"zz"));
        assert!(!is_repetition(b"aba"));
        assert!(!is_repetition(b"abcabcab"));
        assert!(!is_repetition(b"a"));
        assert!(!is_repetition::<u8>(&[]));
    }
}
