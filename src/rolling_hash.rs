//! Polynomial rolling hash.
//!
//! A window `s[0..m]` hashes to
//! `value(s[0]) * base^(m-1) + value(s[1]) * base^(m-2) + ... + value(s[m-1])`
//! modulo `modulus`, so the leftmost symbol carries the highest power and can
//! be removed in O(1) when the window slides. Products are taken in `u128`,
//! which holds `modulus * modulus` for any modulus below 2^63.

use crate::error::MatchError;
use crate::symbol::Symbol;

pub const DEFAULT_BASE: u64 = 1_000_003;
/// 2^61 - 1, a Mersenne prime.
pub const DEFAULT_MODULUS: u64 = (1 << 61) - 1;
const MAX_MODULUS: u64 = 1 << 63;

/// Hash parameters. Immutable once built; states are separate values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollingHash {
    base: u64,
    modulus: u64,
}

/// Hash of the current window together with what sliding it needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollingHashState {
    /// Always in `[0, modulus)`.
    pub value: u64,
    /// `base^(window_len - 1) mod modulus`, the weight of the outgoing symbol.
    pub high_power: u64,
    pub window_len: usize,
}

impl Default for RollingHash {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE,
            modulus: DEFAULT_MODULUS,
        }
    }
}

impl RollingHash {
    pub fn new(base: u64, modulus: u64) -> Result<Self, MatchError> {
        if modulus < 2 {
            return Err(MatchError::invalid_argument("modulus", "must be at least 2"));
        }
        if modulus >= MAX_MODULUS {
            return Err(MatchError::invalid_argument(
                "modulus",
                format!("must be below 2^63, got {modulus}"),
            ));
        }
        if base < 2 || base >= modulus {
            return Err(MatchError::invalid_argument(
                "base",
                format!("must satisfy 2 <= base < modulus ({modulus}), got {base}"),
            ));
        }
        Ok(Self { base, modulus })
    }

    pub fn base(&self) -> u64 {
        self.base
    }

    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    pub fn hash_of<S: Symbol>(&self, s: &[S]) -> u64 {
        s.iter().fold(0, |acc, &symbol| self.push(acc, symbol))
    }

    /// Hashes `window` and records the power needed to slide it later.
    pub fn seed<S: Symbol>(&self, window: &[S]) -> RollingHashState {
        RollingHashState {
            value: self.hash_of(window),
            high_power: self.pow(window.len().saturating_sub(1) as u64),
            window_len: window.len(),
        }
    }

    /// Drops `outgoing` from the front of the window and appends `incoming`.
    ///
    /// The window length is unchanged. Sliding an empty window is a no-op.
    pub fn slide<S: Symbol>(&self, state: RollingHashState, outgoing: S, incoming: S) -> RollingHashState {
        if state.window_len == 0 {
            return state;
        }

        let removed = self.mul(self.reduce(outgoing.hash_value()), state.high_power);
        // Adding the modulus first keeps the subtraction non-negative.
        let without_front = (state.value + self.modulus - removed) % self.modulus;
        let value = self.push(without_front, incoming);
        debug_assert!(value < self.modulus);

        RollingHashState { value, ..state }
    }

    fn push<S: Symbol>(&self, hash: u64, symbol: S) -> u64 {
        let shifted = self.mul(hash, self.base);
        (shifted + self.reduce(symbol.hash_value())) % self.modulus
    }

    fn pow(&self, mut exp: u64) -> u64 {
        let mut result = 1 % self.modulus;
        let mut base = self.base;
        while exp > 0 {
            if exp & 1 == 1 {
                result = self.mul(result, base);
            }
            base = self.mul(base, base);
            exp >>= 1;
        }
        result
    }

    fn mul(&self, a: u64, b: u64) -> u64 {
        ((u128::from(a) * u128::from(b)) % u128::from(self.modulus)) as u64
    }

    fn reduce(&self, x: u64) -> u64 {
        x % self.modulus
    }
}
