//! Alphabets the engines run over, and separator selection for the
//! `pattern + separator + text` reductions.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::MatchError;

/// Conventional sentinels, tried before scanning the rest of the alphabet.
const SENTINELS: [char; 3] = ['#', '$', '|'];

/// A single comparable unit of a pattern or text.
pub trait Symbol: Copy + Eq + Hash + Debug + Send + Sync {
    /// Name of the alphabet, used in error messages.
    const ALPHABET: &'static str;

    /// Small positive integer fed to the rolling hash. Never 0, so a run of
    /// leading symbols still changes the hash.
    fn hash_value(self) -> u64;

    /// Separator candidates in order of preference.
    fn separator_candidates() -> impl Iterator<Item = Self>;

    /// Converts a configured separator. Bytes accept ASCII only, since text
    /// is searched as UTF-8 and a wider char is several bytes there.
    fn from_char(c: char) -> Option<Self>;

    /// Quoted, escaped form for error messages.
    fn describe(self) -> String;
}

impl Symbol for u8 {
    const ALPHABET: &'static str = "byte";

    fn hash_value(self) -> u64 {
        u64::from(self) + 1
    }

    fn separator_candidates() -> impl Iterator<Item = Self> {
        SENTINELS
            .into_iter()
            .map(|c| c as u8)
            .chain(u8::MIN..=u8::MAX)
    }

    fn from_char(c: char) -> Option<Self> {
        c.is_ascii().then_some(c as u8)
    }

    fn describe(self) -> String {
        format!("'{}'", self.escape_ascii())
    }
}

impl Symbol for char {
    const ALPHABET: &'static str = "char";

    fn hash_value(self) -> u64 {
        u64::from(u32::from(self)) + 1
    }

    fn separator_candidates() -> impl Iterator<Item = Self> {
        SENTINELS
            .into_iter()
            .chain('\u{E000}'..='\u{F8FF}')
            .chain(char::MIN..=char::MAX)
    }

    fn from_char(c: char) -> Option<Self> {
        Some(c)
    }

    fn describe(self) -> String {
        format!("{self:?}")
    }
}

/// Picks a symbol that occurs in none of `operands`.
///
/// A `preferred` separator is used as-is when free and rejected otherwise;
/// without one the first free candidate wins.
pub fn choose_separator<S: Symbol>(operands: &[&[S]], preferred: Option<S>) -> Result<S, MatchError> {
    let used: HashSet<S> = operands.iter().flat_map(|op| op.iter().copied()).collect();

    if let Some(separator) = preferred {
        if used.contains(&separator) {
            return Err(MatchError::SeparatorInUse {
                separator: separator.describe(),
            });
        }
        return Ok(separator);
    }

    let separator = S::separator_candidates()
        .find(|candidate| !used.contains(candidate))
        .ok_or(MatchError::NoSeparator {
            alphabet: S::ALPHABET,
        })?;
    log::debug!(
        "separator {:?} chosen over {} distinct {} symbols",
        separator,
        used.len(),
        S::ALPHABET
    );
    Ok(separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_value_never_zero() {
        assert_eq!(0u8.hash_value(), 1);
        assert_eq!(255u8.hash_value(), 256);
        assert_eq!('\0'.hash_value(), 1);
        assert_eq!('a'.hash_value(), 98);
    }

    #[test]
    fn test_prefers_sentinel() {
        let text: &[u8] = b"hello";
        assert_eq!(choose_separator(&[text], None), Ok(b'#'));
    }

    #[test]
    fn test_skips_used_sentinels() {
        let pattern: &[u8] = b"a#b";
        let text: &[u8] = b"$$";
        assert_eq!(choose_separator(&[pattern, text], None), Ok(b'|'));
    }

    #[test]
    fn test_falls_back_to_alphabet_scan() {
        let text: &[u8] = b"#$|";
        assert_eq!(choose_separator(&[text], None), Ok(0u8));
    }

    #[test]
    fn test_full_byte_alphabet_has_no_separator() {
        let all: Vec<u8> = (u8::MIN..=u8::MAX).collect();
        let err = choose_separator(&[all.as_slice(), b"".as_slice()], None).unwrap_err();
        assert_eq!(err, MatchError::NoSeparator { alphabet: "byte" });
        assert!(err.is_configuration());
    }

    #[test]
    fn test_char_alphabet_uses_private_use_area() {
        let text: Vec<char> = "#$|".chars().collect();
        assert_eq!(choose_separator(&[text.as_slice()], None), Ok('\u{E000}'));
    }

    #[test]
    fn test_preferred_separator() {
        let text: &[u8] = b"abc";
        assert_eq!(choose_separator(&[text], Some(b'~')), Ok(b'~'));

        let err = choose_separator(&[text], Some(b'b')).unwrap_err();
        assert!(matches!(err, MatchError::SeparatorInUse { .. }));
    }

    #[test]
    fn test_separator_in_use_names_the_symbol() {
        let text: &[u8] = b"a!\x01";
        let err = choose_separator(&[text], Some(b'!')).unwrap_err();
        assert_eq!(err, MatchError::SeparatorInUse { separator: "'!'".to_string() });

        let err = choose_separator(&[text], Some(1u8)).unwrap_err();
        assert_eq!(err, MatchError::SeparatorInUse { separator: "'\\x01'".to_string() });

        let chars: Vec<char> = "a€".chars().collect();
        let err = choose_separator(&[chars.as_slice()], Some('€')).unwrap_err();
        assert_eq!(err, MatchError::SeparatorInUse { separator: "'€'".to_string() });
    }

    #[test]
    fn test_from_char() {
        assert_eq!(u8::from_char('#'), Some(b'#'));
        assert_eq!(u8::from_char('\0'), Some(0));
        // 'é' is 0xE9 in Latin-1 but two bytes in UTF-8
        assert_eq!(u8::from_char('é'), None);
        assert_eq!(u8::from_char('€'), None);
        assert_eq!(char::from_char('€'), Some('€'));
    }
}
