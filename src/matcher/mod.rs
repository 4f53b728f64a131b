//! Exact-match search engines.
//!
//! Each matcher is bound to one pattern when it is built and can then be run
//! against any number of texts. All three engines report the same offsets for
//! the same input; they differ only in how they get there.

pub mod kmp;
pub mod rabin_karp;
pub mod z;

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::MatchConfig;
use crate::error::MatchError;
use crate::symbol::Symbol;

pub use kmp::{kmp_search, KmpMatcher};
pub use rabin_karp::{rabin_karp_search, RabinKarpMatcher};
pub use z::{z_search, ZMatcher};

/// Ascending start offsets of every (possibly overlapping) occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MatchPositions(Vec<usize>);

impl MatchPositions {
    /// An empty pattern occurs at every offset, including the end of the text.
    pub(crate) fn every_offset(text_len: usize) -> Self {
        Self((0..=text_len).collect())
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.0
    }
}

impl Deref for MatchPositions {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        &self.0
    }
}

impl From<Vec<usize>> for MatchPositions {
    fn from(positions: Vec<usize>) -> Self {
        debug_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        Self(positions)
    }
}

impl IntoIterator for MatchPositions {
    type Item = usize;
    type IntoIter = std::vec::IntoIter<usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a MatchPositions {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl PartialEq<Vec<usize>> for MatchPositions {
    fn eq(&self, other: &Vec<usize>) -> bool {
        &self.0 == other
    }
}

impl<const N: usize> PartialEq<[usize; N]> for MatchPositions {
    fn eq(&self, other: &[usize; N]) -> bool {
        self.0.as_slice() == other.as_slice()
    }
}

pub trait Matcher<S: Symbol>: Send + Sync {
    fn name(&self) -> &'static str;

    fn pattern(&self) -> &[S];

    fn find_all(&self, text: &[S]) -> Result<MatchPositions, MatchError>;

    fn find_first(&self, text: &[S]) -> Result<Option<usize>, MatchError> {
        Ok(self.find_all(text)?.first().copied())
    }

    fn contains(&self, text: &[S]) -> Result<bool, MatchError> {
        Ok(self.find_first(text)?.is_some())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    #[default]
    Kmp,
    Z,
    RabinKarp,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Kmp, Algorithm::Z, Algorithm::RabinKarp];

    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Kmp => "kmp",
            Algorithm::Z => "z",
            Algorithm::RabinKarp => "rabin-karp",
        }
    }

    /// Builds the matcher for `pattern` with the parameters in `config`.
    pub fn matcher<S: Symbol + 'static>(
        self,
        pattern: &[S],
        config: &MatchConfig,
    ) -> Result<Box<dyn Matcher<S>>, MatchError> {
        Ok(match self {
            Algorithm::Kmp => Box::new(KmpMatcher::new(pattern)),
            Algorithm::Z => match config.separator::<S>()? {
                Some(separator) => Box::new(ZMatcher::with_separator(pattern, separator)),
                None => Box::new(ZMatcher::new(pattern)),
            },
            Algorithm::RabinKarp => Box::new(RabinKarpMatcher::with_hasher(
                pattern,
                config.rolling_hash()?,
            )),
        })
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kmp" => Ok(Algorithm::Kmp),
            "z" => Ok(Algorithm::Z),
            "rabin-karp" | "rabin_karp" | "rk" => Ok(Algorithm::RabinKarp),
            other => Err(MatchError::invalid_argument(
                "algorithm",
                format!("unknown algorithm '{other}', expected kmp, z or rabin-karp"),
            )),
        }
    }
}

/// Searches every text with the same matcher in parallel.
///
/// Results come back in the order of `texts`.
pub fn search_many<S, M, T>(matcher: &M, texts: &[T]) -> Vec<Result<MatchPositions, MatchError>>
where
    S: Symbol,
    M: Matcher<S> + ?Sized,
    T: AsRef<[S]> + Sync,
{
    log::debug!(
        "{}: searching {} texts for a {}-symbol pattern",
        matcher.name(),
        texts.len(),
        matcher.pattern().len()
    );
    texts
        .par_iter()
        .map(|text| matcher.find_all(text.as_ref()))
        .collect()
}
