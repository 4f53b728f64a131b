//! Longest happy prefix: the longest proper prefix that is also a suffix.

use crate::prefix_function::build_prefix_function;
use crate::symbol::Symbol;

pub fn longest_happy_prefix_of<S: Symbol>(s: &[S]) -> &[S] {
    let len = build_prefix_function(s).border_len();
    &s[..len]
}

/// Works on bytes. A byte border of valid UTF-8 always ends on a char
/// boundary: the matching suffix starts with the same lead byte as `s`.
pub fn longest_happy_prefix(s: &str) -> &str {
    let len = build_prefix_function(s.as_bytes()).border_len();
    debug_assert!(s.is_char_boundary(len));
    &s[..len]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_answers() {
        assert_eq!(longest_happy_prefix("level"), "l");
        assert_eq!(longest_happy_prefix("ababab"), "abab");
        assert_eq!(longest_happy_prefix("leetcode"), "");
        assert_eq!(longest_happy_prefix("aaaa"), "aaa");
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(longest_happy_prefix(""), "");
        assert_eq!(longest_happy_prefix("a"), "");
        assert!(longest_happy_prefix_of::<u8>(&[]).is_empty());
    }

    #[test]
    fn test_multibyte_text() {
        assert_eq!(longest_happy_prefix("ñandúñ"), "ñ");
        assert_eq!(longest_happy_prefix("€x€"), "€");
        assert_eq!(longest_happy_prefix("é€é"), "é");
    }

    #[test]
    fn test_generic_symbols() {
        let s = [1u8, 2, 1, 2, 1];
        assert_eq!(longest_happy_prefix_of(&s), &[1, 2, 1]);
    }
}
