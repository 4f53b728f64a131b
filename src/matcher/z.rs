//! Z-function search over `pattern + separator + text`.
//!
//! The separator must occur in neither operand, otherwise a match could run
//! across the join. It is picked per search from the symbols actually present,
//! so the reduction fails loudly instead of silently assuming an alphabet.

use crate::error::MatchError;
use crate::symbol::{choose_separator, Symbol};
use crate::z_function::build_z_array;

use super::{MatchPositions, Matcher};

#[derive(Debug, Clone)]
pub struct ZMatcher<S> {
    pattern: Vec<S>,
    separator: Option<S>,
}

impl<S: Symbol> ZMatcher<S> {
    pub fn new(pattern: &[S]) -> Self {
        ZMatcher {
            pattern: pattern.to_vec(),
            separator: None,
        }
    }

    /// Always joins with `separator`; searches fail if it occurs in the input.
    pub fn with_separator(pattern: &[S], separator: S) -> Self {
        ZMatcher {
            pattern: pattern.to_vec(),
            separator: Some(separator),
        }
    }
}

impl<S: Symbol> Matcher<S> for ZMatcher<S> {
    fn name(&self) -> &'static str {
        "z"
    }

    fn pattern(&self) -> &[S] {
        &self.pattern
    }

    fn find_all(&self, text: &[S]) -> Result<MatchPositions, MatchError> {
        let m = self.pattern.len();
        if m == 0 {
            return Ok(MatchPositions::every_offset(text.len()));
        }
        if m > text.len() {
            return Ok(MatchPositions::default());
        }

        let separator = choose_separator(&[self.pattern.as_slice(), text], self.separator)?;

        let mut combined = Vec::with_capacity(m + 1 + text.len());
        combined.extend_from_slice(&self.pattern);
        combined.push(separator);
        combined.extend_from_slice(text);

        let z = build_z_array(&combined);
        let positions: Vec<usize> = (m + 1..combined.len())
            .filter(|&i| z[i] == m)
            .map(|i| i - m - 1)
            .collect();

        log::debug!("z: {} matches in {} symbols", positions.len(), text.len());
        Ok(MatchPositions::from(positions))
    }
}

/// All occurrences of `pattern` in `text`; fails only when no separator is
/// free.
pub fn z_search<S: Symbol>(text: &[S], pattern: &[S]) -> Result<MatchPositions, MatchError> {
    ZMatcher::new(pattern).find_all(text)
}
