//! Rabin-Karp search.
//!
//! Expected O(n + m). Equal hashes are always confirmed symbol by symbol, so
//! collisions cost time but never produce a false match; adversarial input can
//! still push a search towards O(n * m). The large default modulus makes that
//! unlikely, not impossible.

use crate::error::MatchError;
use crate::rolling_hash::RollingHash;
use crate::symbol::Symbol;

use super::{MatchPositions, Matcher};

#[derive(Debug, Clone)]
pub struct RabinKarpMatcher<S> {
    pattern: Vec<S>,
    hasher: RollingHash,
    pattern_hash: u64,
}

impl<S: Symbol> RabinKarpMatcher<S> {
    pub fn new(pattern: &[S]) -> Self {
        Self::with_hasher(pattern, RollingHash::default())
    }

    pub fn with_hasher(pattern: &[S], hasher: RollingHash) -> Self {
        RabinKarpMatcher {
            pattern: pattern.to_vec(),
            hasher,
            pattern_hash: hasher.hash_of(pattern),
        }
    }

    pub fn hasher(&self) -> &RollingHash {
        &self.hasher
    }

    fn positions(&self, text: &[S]) -> MatchPositions {
        let m = self.pattern.len();
        let n = text.len();
        if m == 0 {
            return MatchPositions::every_offset(n);
        }
        if m > n {
            return MatchPositions::default();
        }

        let mut positions = Vec::new();
        let mut spurious = 0usize;
        let mut window = self.hasher.seed(&text[..m]);

        for start in 0..=n - m {
            if start > 0 {
                window = self.hasher.slide(window, text[start - 1], text[start + m - 1]);
            }

            if window.value == self.pattern_hash {
                if text[start..start + m] == self.pattern[..] {
                    positions.push(start);
                } else {
                    spurious += 1;
                }
            }
        }

        if spurious > 0 {
            log::debug!(
                "rabin-karp: {spurious} spurious hash hits (base {}, modulus {})",
                self.hasher.base(),
                self.hasher.modulus()
            );
        }
        log::debug!("rabin-karp: {} matches in {} symbols", positions.len(), n);
        MatchPositions::from(positions)
    }
}

impl<S: Symbol> Matcher<S> for RabinKarpMatcher<S> {
    fn name(&self) -> &'static str {
        "rabin-karp"
    }

    fn pattern(&self) -> &[S] {
        &self.pattern
    }

    fn find_all(&self, text: &[S]) -> Result<MatchPositions, MatchError> {
        Ok(self.positions(text))
    }
}

pub fn rabin_karp_search<S: Symbol>(text: &[S], pattern: &[S]) -> MatchPositions {
    RabinKarpMatcher::new(pattern).positions(text)
}
