//! Basic cleaning stage.
//!
//! First stage of the pipeline: turns arbitrary input text into lowercase
//! ASCII words separated by single spaces. Everything downstream (stopword
//! and leakage filtering) assumes this shape.
//!
//! ## The Output Contract
//!
//! For any input, `clean` produces a string that is either empty or
//! contains only `a`-`z` and single interior spaces, with no leading or
//! trailing whitespace. The tokenizer relies on this contract and checks
//! it with debug assertions.
//!
//! ## Why Byte-Identical Matters
//!
//! The downstream classifier's features are only valid if this transform
//! matches the one used to produce its training column. The step order
//! below is fixed; changing it (or any pattern) silently shifts model
//! accuracy without raising an error.

use once_cell::sync::Lazy;
use regex::Regex;

/// URL-like runs: `http`, `https`, or `www` followed by non-whitespace.
/// Applied after lowercasing, so uppercase scheme prefixes are covered.
static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:http|www)\S+").expect("url pattern compiles"));

/// HTML-tag-like runs: `<` ... `>`, non-greedy.
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<.*?>").expect("tag pattern compiles"));

/// Whitespace runs, for the final collapse in standalone helpers.
static WS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern compiles"));

/// Collapses whitespace runs to single spaces and trims both ends.
///
/// Shared by the leakage filter, which reopens gaps when it deletes
/// phrases mid-string.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    WS_RE.replace_all(text, " ").trim().to_string()
}

/// Deterministic text cleaner.
///
/// Applies a fixed, ordered sequence of transformations:
///
/// 1. Lowercase (Unicode-aware)
/// 2. URL-like substrings become a single space
/// 3. HTML-tag-like substrings become a single space
/// 4. Every character that is not an ASCII letter or whitespace becomes
///    a space
/// 5. Whitespace runs collapse to one space; the result is trimmed
///
/// Steps 4 and 5 are fused into a single forward scan: non-letter bytes
/// open a gap, and at most one space is emitted per gap. The observable
/// output is identical to running the two steps separately.
///
/// # Examples
///
/// ```
/// use scour_core::analyzer::normalizer::TextNormalizer;
///
/// let cleaner = TextNormalizer::new();
/// assert_eq!(cleaner.clean("Visit http://x.com <b>now</b>!!"), "visit now");
/// assert_eq!(cleaner.clean("  Hello,   WORLD 42 "), "hello world");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct TextNormalizer;

impl TextNormalizer {
    /// Creates a new cleaner. Stateless; patterns are compiled once per
    /// process on first use.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Cleans text into an existing buffer, reusing its capacity.
    ///
    /// Clears the buffer before writing. Intermediate regex passes still
    /// allocate; the final scan writes straight into `out`.
    pub fn clean_into(&self, input: &str, out: &mut String) {
        out.clear();
        if input.trim().is_empty() {
            return;
        }

        let lowered = input.to_lowercase();
        let no_urls = URL_RE.replace_all(&lowered, " ");
        let no_tags = TAG_RE.replace_all(&no_urls, " ");

        out.reserve(no_tags.len());
        let mut in_gap = true; // swallows leading non-letters
        for b in no_tags.bytes() {
            if b.is_ascii_alphabetic() {
                out.push(b as char);
                in_gap = false;
            } else if !in_gap {
                out.push(' ');
                in_gap = true;
            }
        }
        if out.ends_with(' ') {
            out.pop();
        }
    }

    /// Cleans text and returns a new String.
    #[inline]
    pub fn clean(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.clean_into(input, &mut out);
        out
    }
}
