//! Z-function.
//!
//! `z[i]` is the length of the longest common prefix of `s` and `s[i..]`.
//! `z[0]` is left at 0. The window `s[l..r]` is the rightmost segment known to
//! match a prefix of `s`; every direct comparison moves `r` right, so the
//! total work is O(n).

use std::ops::Deref;

use serde::Serialize;

use crate::symbol::Symbol;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ZArray(Vec<usize>);

impl ZArray {
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.0
    }

    /// True when the first `len` symbols starting at `i` repeat the prefix.
    pub fn matches_prefix_at(&self, i: usize, len: usize) -> bool {
        self.0.get(i).is_some_and(|&z| z >= len)
    }
}

impl Deref for ZArray {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        &self.0
    }
}

pub fn build_z_array<S: Symbol>(s: &[S]) -> ZArray {
    let n = s.len();
    let mut z = vec![0; n];
    let mut l = 0;
    let mut r = 0;

    for i in 1..n {
        if i < r {
            let k = i - l;
            // Inside the window and strictly shorter than what remains of it:
            // the answer is already known.
            if z[k] < r - i {
                z[i] = z[k];
                continue;
            }
            l = i;
        } else {
            l = i;
            r = i;
        }

        while r < n && s[r] == s[r - l] {
            r += 1;
        }
        z[i] = r - l;
    }

    log::trace!("z-array built over {} symbols", n);
    ZArray(z)
}
