//! The fixed key alphabet and its integer codes.
//!
//! Letters map to codes `1..=26` through an explicit table, never through
//! the platform's character numbering. Two sentinels bound the range: code
//! `0` sorts before every letter and stands in for a missing or exhausted
//! left key, code `27` sorts after every letter and stands in for a missing
//! or exhausted right key.
//!
//! Mapping codes back to letters stays inside the crate, since sentinels have
//! no letter:
//!
//! ```compile_fail
//! let _ = lexrank::alphabet::letter(lexrank::alphabet::AFTER_LAST);
//! ```
//!
//! ```
//! use lexrank::alphabet;
//!
//! assert_eq!(alphabet::code(b'n'), Some(14));
//! assert_eq!(alphabet::encode("zy").unwrap().as_slice(), &[26, 25]);
//! ```

use smallvec::SmallVec;

use crate::error::RankError;
use crate::error::Result;

/// Sentinel code before `a`.
pub const BEFORE_FIRST: u8 = 0;

/// Code of `a`.
pub const A: u8 = 1;

/// Code of `b`.
pub const B: u8 = 2;

/// Code of `z`.
pub const Z: u8 = 26;

/// Sentinel code after `z`.
pub const AFTER_LAST: u8 = 27;

/// The letters in code order; `LETTERS[code - 1]` is the letter for `code`.
pub const LETTERS: [u8; 26] = *b"abcdefghijklmnopqrstuvwxyz";

/// Keys shorter than this are encoded without allocating.
pub const INLINE_LEN: usize = 16;

/// A key as a list of letter codes.
pub type Codes = SmallVec<[u8; INLINE_LEN]>;

/// The code of a letter, or `None` if the byte is not in `a..=z`.
pub fn code(byte: u8) -> Option<u8> {
    return match byte {
        b'a'..=b'z' => Some(byte - b'a' + A),
        _ => None,
    };
}

/// The letter for a code in `1..=26`.
///
/// # Panics
///
/// Panics if `code` is a sentinel or out of range.
pub(crate) fn letter(code: u8) -> char {
    assert!((A..=Z).contains(&code), "code {code} is not a letter");
    return LETTERS[(code - A) as usize] as char;
}

/// Check that every character of `key` is in `a..=z`.
pub fn validate(key: &str) -> Result<()> {
    for (index, found) in key.char_indices() {
        if !found.is_ascii() || code(found as u8).is_none() {
            return Err(RankError::AlphabetViolation {
                key: key.to_owned(),
                index,
                found,
            });
        }
    }
    return Ok(());
}

/// Validate `key` and convert it to codes.
pub fn encode(key: &str) -> Result<Codes> {
    validate(key)?;
    return Ok(key.bytes().filter_map(code).collect());
}

/// Convert letter codes back into a key.
pub(crate) fn decode(codes: &[u8]) -> String {
    return codes.iter().map(|&c| letter(c)).collect();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_follow_table_order() {
        assert_eq!(code(b'a'), Some(A));
        assert_eq!(code(b'b'), Some(B));
        assert_eq!(code(b'n'), Some(14));
        assert_eq!(code(b'z'), Some(Z));
        for (i, &l) in LETTERS.iter().enumerate() {
            assert_eq!(code(l), Some(i as u8 + 1));
            assert_eq!(letter(i as u8 + 1), l as char);
        }
    }

    #[test]
    fn sentinels_bracket_letters() {
        assert!(BEFORE_FIRST < A);
        assert!(Z < AFTER_LAST);
        assert_eq!(AFTER_LAST - BEFORE_FIRST, 27);
    }

    #[test]
    fn non_letters_have_no_code() {
        for byte in [b'A', b'Z', b'0', b'9', b'`', b'{', b' ', b'-'] {
            assert_eq!(code(byte), None, "byte {byte}");
        }
    }

    #[test]
    #[should_panic]
    fn letter_rejects_sentinel() {
        letter(AFTER_LAST);
    }

    #[test]
    fn encode_and_decode() {
        let codes = encode("abz").unwrap();
        assert_eq!(codes.as_slice(), &[1, 2, 26]);
        assert_eq!(decode(&codes), "abz");
        assert!(encode("").unwrap().is_empty());
    }

    #[test]
    fn validate_reports_first_offender() {
        let err = validate("ab1c2").unwrap_err();
        assert_eq!(
            err,
            RankError::AlphabetViolation {
                key: "ab1c2".to_string(),
                index: 2,
                found: '1',
            }
        );
    }

    #[test]
    fn validate_reports_byte_offset_of_multibyte_char() {
        let err = validate("aé").unwrap_err();
        assert_eq!(
            err,
            RankError::AlphabetViolation {
                key: "aé".to_string(),
                index: 1,
                found: 'é',
            }
        );
    }

    #[test]
    fn uppercase_is_rejected() {
        assert!(validate("Abc").unwrap_err().is_alphabet_violation());
    }
}
