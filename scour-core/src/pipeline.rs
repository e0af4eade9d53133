//! The preprocessing contract relied on by the inference layer.
//!
//! Everything the model-serving side calls lives here: [`Preprocessor`]
//! for normalization, [`combine_title_content`] for assembling request
//! fields, and [`validate_input`] for rejecting unsuitable input before
//! inference.
//!
//! ## Determinism
//!
//! Given the same raw string, [`Preprocessor::preprocess`] always returns
//! the same normalized string. Stage order is fixed — clean, stopword
//! removal, leakage removal — because that is the order the training
//! column was produced in. Any drift here degrades model accuracy
//! silently, so the order is not configurable.
//!
//! ## Threading
//!
//! A [`Preprocessor`] holds only immutable state after construction; it
//! is `Send + Sync` and callable concurrently without locking.

use std::path::Path;

use log::debug;
use scour_types::{StopwordError, DEFAULT_MIN_INPUT_CHARS};

use crate::analyzer::{LeakageFilter, StopwordFilter, StopwordSet, TextNormalizer};

/// The full normalization pipeline.
///
/// # Example
///
/// ```
/// use scour_core::Preprocessor;
///
/// let pipeline = Preprocessor::new().expect("stopword resource");
/// let out = pipeline.preprocess("WASHINGTON (Reuters) - The president said today.");
/// assert!(!out.split(' ').any(|w| w == "reuters" || w == "said"));
/// ```
#[derive(Debug, Clone)]
pub struct Preprocessor {
    cleaner: TextNormalizer,
    stopwords: StopwordFilter,
    leakage: LeakageFilter,
}

impl Preprocessor {
    /// Builds a pipeline over the built-in English stopword list.
    ///
    /// The only fallible step is provisioning the stopword resource;
    /// this is a startup error, never a per-call one.
    pub fn new() -> Result<Self, StopwordError> {
        Ok(Self::with_stopwords(StopwordSet::load(None)?))
    }

    /// Builds a pipeline over a custom stopword list file. A failed read
    /// falls back to the built-in list rather than aborting.
    pub fn with_stopword_file(path: &Path) -> Result<Self, StopwordError> {
        Ok(Self::with_stopwords(StopwordSet::load(Some(path))?))
    }

    /// Builds a pipeline over an already-loaded set.
    pub fn with_stopwords(set: StopwordSet) -> Self {
        Self {
            cleaner: TextNormalizer::new(),
            stopwords: StopwordFilter::new(set),
            leakage: LeakageFilter::new(),
        }
    }

    /// Normalizes one text: basic clean, then stopword removal, then
    /// leakage removal. Empty or whitespace-only input yields `""`.
    ///
    /// Output contains only lowercase ASCII letters and single spaces
    /// (or is empty). Applying `preprocess` to its own output is a
    /// no-op: there is nothing left for any stage to strip.
    pub fn preprocess(&self, text: &str) -> String {
        if text.trim().is_empty() {
            return String::new();
        }

        let cleaned = self.cleaner.clean(text);
        if cleaned.is_empty() {
            return cleaned;
        }
        let kept = self.stopwords.remove(&cleaned);
        self.leakage.remove(&kept)
    }

    /// Normalizes a batch element-wise, preserving order and length.
    pub fn preprocess_batch<S: AsRef<str>>(&self, texts: &[S]) -> Vec<String> {
        debug!("preprocessing batch of {} texts", texts.len());
        texts.iter().map(|t| self.preprocess(t.as_ref())).collect()
    }
}

/// Joins a title and content as `"{title} {content}"`, trimmed at both
/// ends. `None` coerces to empty; no inner normalization happens here.
pub fn combine_title_content(title: Option<&str>, content: Option<&str>) -> String {
    let title = title.unwrap_or_default();
    let content = content.unwrap_or_default();
    format!("{title} {content}").trim().to_string()
}

/// True iff `text`, after trimming whitespace, holds at least `min_chars`
/// characters. Empty or blank input is always rejected.
pub fn validate_input(text: &str, min_chars: usize) -> bool {
    let trimmed = text.trim();
    !trimmed.is_empty() && trimmed.chars().count() >= min_chars
}

/// [`validate_input`] with the default threshold of
/// [`DEFAULT_MIN_INPUT_CHARS`] characters.
#[inline]
pub fn validate_input_default(text: &str) -> bool {
    validate_input(text, DEFAULT_MIN_INPUT_CHARS)
}
