//! Leakage-phrase removal.
//!
//! Publisher names and media boilerplate ("reuters", "getty images",
//! "pic twitter" and friends) correlate with the training labels for
//! reasons unrelated to article content. Left in place they hand the
//! classifier a shortcut; this stage strips them.
//!
//! ## Ordered, Cumulative Substitution
//!
//! Phrases are removed one at a time, in the fixed order of
//! [`LEAKAGE_PHRASES`], each pass rewriting the text the next pass sees.
//! This is deliberately NOT longest-match: `getty` runs before
//! `getty images`, so `"getty images"` loses only `getty` and the
//! orphaned `images` survives. The training column was produced this
//! way, so the quirk is contract, not bug.

use once_cell::sync::Lazy;
use regex::Regex;
use scour_types::LEAKAGE_PHRASES;

use super::normalizer::collapse_whitespace;

/// Leading citation/dateline: shortest prefix running through the first
/// hyphen after the first `reuters`/`ap`, e.g. `"WASHINGTON (Reuters) - "`.
static CITATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)^.*?(?:reuters|ap).*?-").expect("citation pattern compiles"));

/// One whole-word pattern per phrase, in table order.
static PHRASE_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    LEAKAGE_PHRASES
        .iter()
        .map(|phrase| {
            Regex::new(&format!(r"(?i)\b{}\b", regex::escape(phrase)))
                .expect("phrase pattern compiles")
        })
        .collect()
});

/// Strips label-leaking phrases from text.
///
/// # Example
///
/// ```
/// use scour_core::analyzer::leakage::LeakageFilter;
///
/// let filter = LeakageFilter::new();
/// assert_eq!(filter.remove("photo by getty images"), "photo by images");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct LeakageFilter;

impl LeakageFilter {
    /// Creates the filter. Stateless; patterns compile once per process.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Removes the citation prefix (at most once), then every phrase in
    /// table order, then collapses whitespace and trims.
    pub fn remove(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let mut current = CITATION_RE.replace(text, "").into_owned();
        for pattern in PHRASE_RES.iter() {
            if pattern.is_match(&current) {
                current = pattern.replace_all(&current, " ").into_owned();
            }
        }
        collapse_whitespace(&current)
    }
}
