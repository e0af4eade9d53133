//! Streaming whitespace tokenizer.
//!
//! Splits cleaned text into word tokens without allocating: tokens are
//! slices of the input, emitted through a callback. Used by the stopword
//! filter and anywhere tokens need counting.
//!
//! ## The Input Contract
//!
//! Input must be **pre-cleaned** (see [`normalizer`](super::normalizer)):
//! ASCII-only, lowercase, no leading/trailing whitespace, no consecutive
//! spaces. Violations panic in debug builds with a pointed message.

use core::str;
use memchr::memchr_iter;

#[cfg(debug_assertions)]
fn assert_cleaned(bytes: &[u8]) {
    debug_assert!(
        bytes.first().is_none_or(|&b| b != b' '),
        "tokenizer: leading whitespace — cleaner contract violated"
    );
    debug_assert!(
        bytes.last().is_none_or(|&b| b != b' '),
        "tokenizer: trailing whitespace — cleaner contract violated"
    );
    debug_assert!(
        !bytes.windows(2).any(|w| w == b"  "),
        "tokenizer: consecutive spaces — cleaner contract violated"
    );
}

/// Emits each space-separated token of `cleaned` as `(text, position)`.
///
/// Single forward scan over ASCII space bytes (0x20). Tokens are slices
/// of the input string, so no allocation happens here.
///
/// # Example
///
/// ```
/// use scour_core::analyzer::tokenizer::for_each_token;
///
/// let mut words = Vec::new();
/// for_each_token("quick brown fox", |text, pos| words.push((text, pos)));
/// assert_eq!(words, [("quick", 0), ("brown", 1), ("fox", 2)]);
/// ```
#[inline]
pub fn for_each_token<'a, F>(cleaned: &'a str, mut emit: F)
where
    F: FnMut(&'a str, u32),
{
    let bytes = cleaned.as_bytes();

    #[cfg(debug_assertions)]
    assert_cleaned(bytes);

    if bytes.is_empty() {
        return;
    }

    let mut start = 0usize;
    let mut pos = 0u32;

    for i in memchr_iter(b' ', bytes) {
        if start < i {
            // SAFETY: `cleaned` is valid UTF-8 and we split only on ASCII
            // space (0x20), which never appears inside a multi-byte
            // sequence, so `bytes[start..i]` is a valid UTF-8 subslice.
            let text = unsafe { str::from_utf8_unchecked(&bytes[start..i]) };
            emit(text, pos);
            if pos == u32::MAX {
                return;
            }
            pos += 1;
        }
        start = i + 1;
    }

    if start < bytes.len() {
        // SAFETY: same invariant — `start` only ever follows an ASCII space.
        let text = unsafe { str::from_utf8_unchecked(&bytes[start..]) };
        emit(text, pos);
    }
}

/// Counts tokens without allocating.
#[inline]
pub fn count_tokens(cleaned: &str) -> usize {
    let mut n = 0usize;
    for_each_token(cleaned, |_, _| n += 1);
    n
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(input: &str) -> Vec<(&str, u32)> {
        let mut out = Vec::new();
        for_each_token(input, |text, pos| out.push((text, pos)));
        out
    }

    #[test]
    fn single_word() {
        assert_eq!(collect("hello"), [("hello", 0)]);
    }

    #[test]
    fn two_words() {
        assert_eq!(collect("hello world"), [("hello", 0), ("world", 1)]);
    }

    #[test]
    fn positions_are_sequential() {
        let out = collect("the quick brown fox");
        for (i, (_, pos)) in out.iter().enumerate() {
            assert_eq!(*pos, i as u32);
        }
    }

    #[test]
    fn empty_emits_nothing() {
        assert!(collect("").is_empty());
    }

    #[test]
    fn single_char_token() {
        assert_eq!(collect("a"), [("a", 0)]);
    }

    #[test]
    fn tokens_are_slices_of_input() {
        let input = String::from("hello world");
        let base = input.as_ptr() as usize;
        let end = base + input.len();

        for_each_token(&input, |text, _| {
            let ptr = text.as_ptr() as usize;
            assert!(ptr >= base && ptr < end);
        });
    }

    #[test]
    fn emit_order_is_left_to_right() {
        let words = ["one", "two", "three", "four"];
        let input = words.join(" ");
        let mut i = 0usize;

        for_each_token(&input, |text, pos| {
            assert_eq!(text, words[i]);
            assert_eq!(pos, i as u32);
            i += 1;
        });

        assert_eq!(i, words.len());
    }

    #[test]
    fn count_matches_emission() {
        assert_eq!(count_tokens(""), 0);
        assert_eq!(count_tokens("a"), 1);
        assert_eq!(count_tokens("a b c d e"), 5);
    }
}
