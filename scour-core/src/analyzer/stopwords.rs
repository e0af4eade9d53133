//! Stopword loading and filtering.
//!
//! The stopword set is the pipeline's one external linguistic resource.
//! It is provisioned once at startup and read-only afterwards; per-call
//! filtering never fails.
//!
//! ## Loading Contract
//!
//! [`StopwordSet::load`] tries a custom list file first (one word per
//! line, `#` starts a comment). On any read failure it logs a warning and
//! retries by fetching the built-in English list from the `stop-words`
//! corpus. The load is fatal only if the surviving set is empty — an
//! empty set would silently diverge from the training-time transform.

use std::fs;
use std::path::Path;

use log::{debug, warn};
use rustc_hash::FxHashSet;
use scour_types::StopwordError;
use stop_words::{get, LANGUAGE};

use super::tokenizer::for_each_token;

/// Immutable set of lowercase English stopwords.
#[derive(Debug, Clone)]
pub struct StopwordSet {
    words: FxHashSet<String>,
}

impl StopwordSet {
    /// Fetches the built-in English list from the `stop-words` corpus.
    pub fn builtin() -> Self {
        let words: FxHashSet<String> = get(LANGUAGE::English)
            .iter()
            .map(|w| w.to_string())
            .collect();
        debug!("loaded {} built-in stopwords", words.len());
        Self { words }
    }

    /// Builds a set from an explicit word list, lowercasing entries.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }

    /// Reads a custom list file: one word per line, blank lines and
    /// `#`-prefixed comments ignored, entries lowercased.
    pub fn from_file(path: &Path) -> Result<Self, StopwordError> {
        let raw = fs::read_to_string(path).map_err(|source| StopwordError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let words: FxHashSet<String> = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_lowercase)
            .collect();

        debug!("loaded {} stopwords from {}", words.len(), path.display());
        Ok(Self { words })
    }

    /// Provisions the set at startup.
    ///
    /// With `custom = None` this is just the built-in fetch. With a path,
    /// a failed read falls back to the built-in fetch instead of aborting.
    /// Errors only if the final set is empty.
    pub fn load(custom: Option<&Path>) -> Result<Self, StopwordError> {
        let set = match custom {
            Some(path) => Self::from_file(path).unwrap_or_else(|err| {
                warn!("{err}; falling back to built-in stopword list");
                Self::builtin()
            }),
            None => Self::builtin(),
        };

        if set.is_empty() {
            return Err(StopwordError::EmptyResource);
        }
        Ok(set)
    }

    /// Membership test. Exact match; callers must lowercase first.
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of words in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True if the set holds no words.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Removes stopwords from cleaned text.
///
/// Splits on single spaces, drops tokens present in the set, rejoins
/// with single spaces. Matching is exact against a lowercase set, so
/// input must already be cleaned (see the normalizer's output contract).
///
/// # Example
///
/// ```
/// use scour_core::analyzer::stopwords::{StopwordFilter, StopwordSet};
///
/// let filter = StopwordFilter::new(StopwordSet::builtin());
/// assert_eq!(filter.remove("the cat and the hat"), "cat hat");
/// ```
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    set: StopwordSet,
}

impl StopwordFilter {
    /// Wraps a loaded set.
    pub fn new(set: StopwordSet) -> Self {
        Self { set }
    }

    /// Returns `text` with stopword tokens removed. Empty in, empty out.
    pub fn remove(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for_each_token(text, |token, _| {
            if !self.set.contains(token) {
                if !out.is_empty() {
                    out.push(' ');
                }
                out.push_str(token);
            }
        });
        out
    }

    /// The underlying set.
    #[inline]
    pub fn set(&self) -> &StopwordSet {
        &self.set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn custom(words: &[&str]) -> StopwordFilter {
        StopwordFilter::new(StopwordSet::from_words(words))
    }

    #[test]
    fn builtin_is_nonempty_and_lowercase() {
        let set = StopwordSet::builtin();
        assert!(set.len() > 100);
        assert!(set.contains("the"));
        assert!(set.contains("a"));
        assert!(set.contains("and"));
        assert!(!set.contains("washington"));
    }

    #[test]
    fn load_without_custom_path_succeeds() {
        let set = StopwordSet::load(None).expect("built-in load");
        assert!(!set.is_empty());
    }

    #[test]
    fn load_with_missing_file_falls_back() {
        let set = StopwordSet::load(Some(Path::new("/nonexistent/words.txt")))
            .expect("fallback load");
        assert!(set.contains("the"));
    }

    #[test]
    fn from_file_parses_comments_and_blanks() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "# custom list").unwrap();
        writeln!(file, "FOO").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  bar  ").unwrap();

        let set = StopwordSet::from_file(file.path()).expect("parse");
        assert_eq!(set.len(), 2);
        assert!(set.contains("foo"));
        assert!(set.contains("bar"));
    }

    #[test]
    fn from_file_missing_path_errors() {
        let err = StopwordSet::from_file(Path::new("/nonexistent/words.txt"));
        assert!(matches!(err, Err(StopwordError::Io { .. })));
    }

    #[test]
    fn empty_custom_file_is_fatal_on_load() {
        let file = tempfile::NamedTempFile::new().expect("temp file");
        let err = StopwordSet::load(Some(file.path()));
        assert!(matches!(err, Err(StopwordError::EmptyResource)));
    }

    #[test]
    fn remove_drops_listed_tokens() {
        let filter = custom(&["the", "on"]);
        assert_eq!(filter.remove("the cat sat on the mat"), "cat sat mat");
    }

    #[test]
    fn remove_empty_input() {
        let filter = custom(&["the"]);
        assert_eq!(filter.remove(""), "");
    }

    #[test]
    fn remove_can_empty_the_text() {
        let filter = custom(&["the", "a"]);
        assert_eq!(filter.remove("the a the"), "");
    }

    #[test]
    fn matching_is_exact_not_substring() {
        let filter = custom(&["he"]);
        assert_eq!(filter.remove("he helped her"), "helped her");
    }

    #[test]
    fn no_stray_spaces_in_output() {
        let filter = custom(&["b"]);
        let out = filter.remove("a b c b d");
        assert_eq!(out, "a c d");
        assert!(!out.contains("  "));
        assert!(!out.ends_with(' '));
    }
}
