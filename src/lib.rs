//! # strmatch
//!
//! Exact pattern matching over finite, fully materialized sequences.
//!
//! Three leaf structures, each a pure function of its input:
//! - [`prefix_function`]: the failure function (LPS array)
//! - [`z_function`]: the Z-array
//! - [`rolling_hash`]: a polynomial hash with O(1) window slides
//!
//! and what is built on them:
//! - [`matcher`]: KMP, Z and Rabin-Karp search, all reporting every
//!   (overlapping) occurrence in ascending order
//! - [`solver`]: longest happy prefix and shortest palindrome
//!
//! Engines are generic over [`Symbol`], implemented for `u8` and `char`.
//!
//! ```rust
//! use strmatch::{kmp_search, longest_happy_prefix, shortest_palindrome, z_search};
//!
//! assert_eq!(kmp_search(b"aaaa", b"aa"), [0, 1, 2]);
//! assert_eq!(z_search(b"abracadabra", b"abra").unwrap(), [0, 7]);
//! assert_eq!(longest_happy_prefix("ababab"), "abab");
//! assert_eq!(shortest_palindrome("abcd").unwrap(), "dcbabcd");
//! ```

pub mod config;
pub mod error;
pub mod matcher;
pub mod prefix_function;
pub mod rolling_hash;
pub mod solver;
pub mod symbol;
pub mod z_function;

pub use config::{HashConfig, MatchConfig};
pub use error::MatchError;
pub use matcher::{
    kmp_search, rabin_karp_search, search_many, z_search, Algorithm, KmpMatcher, MatchPositions,
    Matcher, RabinKarpMatcher, ZMatcher,
};
pub use prefix_function::{build_prefix_function, is_repetition, PrefixFunctionTable};
pub use rolling_hash::{RollingHash, RollingHashState};
pub use solver::{
    longest_happy_prefix, longest_happy_prefix_of, shortest_palindrome, shortest_palindrome_of,
    shortest_palindrome_with,
};
pub use symbol::{choose_separator, Symbol};
pub use z_function::{build_z_array, ZArray};
