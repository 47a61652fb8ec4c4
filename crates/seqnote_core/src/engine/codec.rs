//! Letter numeral system for alphabetic components.
//!
//! Values map to `(L-1)` copies of `z` followed by one letter: `1 -> a`,
//! `26 -> z`, `27 -> za`, `53 -> zza`. This is not positional base-26; only
//! the final letter carries a digit value.
//!
//! `increment_letters` is the allocator's successor and works on any letter
//! run, canonical or not. `encode_letters`/`decode_letters` only accept the
//! canonical form and are used by the converter.

use super::{SequenceError, SequenceResult};

const ALPHABET_LEN: u64 = 26;

/// Longest letter run `encode_letters` will produce (values up to
/// 27_262_976). Larger values would allocate a run of that many `z`s.
pub const MAX_ENCODED_LETTERS: u64 = 1 << 20;

/// Encodes `value` (1-based) into its canonical letter run.
///
/// # Errors
/// - `InvalidComponent` for `0`.
/// - `ComponentOverflow` when the run would exceed `MAX_ENCODED_LETTERS`.
pub fn encode_letters(value: u64) -> SequenceResult<String> {
    if value == 0 {
        return Err(SequenceError::InvalidComponent(value.to_string()));
    }
    let length = (value - 1) / ALPHABET_LEN + 1;
    if length > MAX_ENCODED_LETTERS {
        return Err(SequenceError::ComponentOverflow(value.to_string()));
    }
    let last = ((value - 1) % ALPHABET_LEN) as u8;

    let mut encoded = "z".repeat((length - 1) as usize);
    encoded.push(char::from(b'a' + last));
    Ok(encoded)
}

/// Decodes a canonical letter run back to its value.
///
/// # Errors
/// - `InvalidComponent` when `letters` is empty, has a character outside
///   `a-z`, or has a non-final character other than `z` (e.g. `"ab"`).
pub fn decode_letters(letters: &str) -> SequenceResult<u64> {
    let invalid = || SequenceError::InvalidComponent(letters.to_string());
    let bytes = letters.as_bytes();
    let (&last, prefix) = bytes.split_last().ok_or_else(invalid)?;
    if !last.is_ascii_lowercase() || prefix.iter().any(|&b| b != b'z') {
        return Err(invalid());
    }

    let last_value = u64::from(last - b'a') + 1;
    (prefix.len() as u64)
        .checked_mul(ALPHABET_LEN)
        .and_then(|base| base.checked_add(last_value))
        .ok_or_else(invalid)
}

/// Returns the letter run that follows `letters`.
///
/// A trailing `z` grows the run by one `a`; any other trailing letter is
/// bumped in place. Earlier characters are never touched, so non-canonical
/// runs such as `"ab"` stay non-canonical (`"ac"`). An empty run yields `"a"`.
pub fn increment_letters(letters: &str) -> String {
    let mut next = letters.to_string();
    match next.pop() {
        None => next.push('a'),
        Some('z') => {
            next.push('z');
            next.push('a');
        }
        Some(last) => {
            let bumped = char::from_u32(u32::from(last) + 1).unwrap_or('a');
            next.push(bumped);
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::{decode_letters, encode_letters, increment_letters, MAX_ENCODED_LETTERS};
    use crate::engine::SequenceError;

    #[test]
    fn encode_matches_reference_values() {
        assert_eq!(encode_letters(1).unwrap(), "a");
        assert_eq!(encode_letters(3).unwrap(), "c");
        assert_eq!(encode_letters(18).unwrap(), "r");
        assert_eq!(encode_letters(26).unwrap(), "z");
        assert_eq!(encode_letters(27).unwrap(), "za");
        assert_eq!(encode_letters(130).unwrap(), "zzzzz");
        assert_eq!(encode_letters(131).unwrap(), "zzzzza");
    }

    #[test]
    fn encode_rejects_zero() {
        assert_eq!(
            encode_letters(0).unwrap_err(),
            SequenceError::InvalidComponent("0".to_string())
        );
    }

    #[test]
    fn encode_handles_large_sibling_counts() {
        let encoded = encode_letters(200_000).unwrap();
        assert_eq!(encoded.len(), 7693);
        assert!(encoded.ends_with("zh"));
        assert_eq!(decode_letters(&encoded).unwrap(), 200_000);
    }

    #[test]
    fn encode_refuses_runs_past_the_cap() {
        let largest = MAX_ENCODED_LETTERS * 26;
        assert_eq!(encode_letters(largest).unwrap().len() as u64, MAX_ENCODED_LETTERS);
        assert_eq!(
            encode_letters(largest + 1).unwrap_err(),
            SequenceError::ComponentOverflow((largest + 1).to_string())
        );
    }

    #[test]
    fn decode_rejects_non_canonical_runs() {
        assert!(decode_letters("ab").is_err());
        assert!(decode_letters("").is_err());
        assert!(decode_letters("zA").is_err());
        assert!(decode_letters("z1").is_err());
        assert_eq!(decode_letters("zzc").unwrap(), 55);
    }

    #[test]
    fn increment_bumps_or_appends() {
        assert_eq!(increment_letters("b"), "c");
        assert_eq!(increment_letters("z"), "za");
        assert_eq!(increment_letters("zz"), "zza");
        assert_eq!(increment_letters("ab"), "ac");
        assert_eq!(increment_letters("az"), "aza");
        assert_eq!(increment_letters(""), "a");
    }
}
