//! Shortest palindrome reachable by prepending symbols.
//!
//! The border of `s + separator + reverse(s)` is the longest palindromic
//! prefix of `s`; whatever follows it is mirrored onto the front.

use std::iter;

use crate::error::MatchError;
use crate::prefix_function::build_prefix_function;
use crate::symbol::{choose_separator, Symbol};

pub fn shortest_palindrome_with<S: Symbol>(s: &[S], separator: Option<S>) -> Result<Vec<S>, MatchError> {
    if s.is_empty() {
        return Ok(Vec::new());
    }

    // reverse(s) holds the same symbols as s, so checking s alone suffices.
    let separator = choose_separator(&[s], separator)?;
    let combined: Vec<S> = s
        .iter()
        .copied()
        .chain(iter::once(separator))
        .chain(s.iter().rev().copied())
        .collect();

    let palindromic_prefix = build_prefix_function(&combined).border_len();
    log::debug!(
        "palindrome: prefix of {} out of {} symbols is already a palindrome",
        palindromic_prefix,
        s.len()
    );

    let mut result: Vec<S> = s[palindromic_prefix..].iter().rev().copied().collect();
    result.extend_from_slice(s);
    Ok(result)
}

pub fn shortest_palindrome_of<S: Symbol>(s: &[S]) -> Result<Vec<S>, MatchError> {
    shortest_palindrome_with(s, None)
}

/// Works on `char`s so the mirrored part never splits a code point.
pub fn shortest_palindrome(s: &str) -> Result<String, MatchError> {
    let chars: Vec<char> = s.chars().collect();
    Ok(shortest_palindrome_of(&chars)?.into_iter().collect())
}
