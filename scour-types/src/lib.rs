//! Core types and constants for the Scour normalization pipeline.
//!
//! This crate provides the fundamental pieces shared across the Scour
//! ecosystem. Keeping them separate ensures:
//!
//! - **One source of truth**: the leakage phrase table and validation
//!   defaults are defined exactly once
//! - **Cross-crate compatibility**: core and any future serving layer
//!   share the same contract
//! - **Clean boundaries**: no circular dependencies between crates

#![warn(missing_docs)]

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Phrases stripped from normalized text because they leak the training
/// label (publisher names, media boilerplate) rather than describe content.
///
/// Order is part of the contract. Removal is a cumulative sequence of
/// whole-word substitutions, so an earlier phrase can consume words that
/// a later, longer phrase would have matched (`reuters` runs before
/// `washington reuters`, `getty` before `getty images`). Reordering this
/// table changes pipeline output and silently invalidates any model whose
/// training data was produced with the original order.
pub const LEAKAGE_PHRASES: [&str; 14] = [
    "reuters",
    "washington reuters",
    "getty",
    "getty images",
    "image",
    "featured image",
    "featured",
    "twitter",
    "twitter com",
    "breitbart",
    "pic twitter",
    "said",
    "mr",
    "ms",
];

/// Default minimum trimmed character count for input validation.
///
/// Inputs shorter than this are rejected before inference; the downstream
/// model was trained on full articles and degrades on fragments.
pub const DEFAULT_MIN_INPUT_CHARS: usize = 20;

/// Failure to provision the stopword set at startup.
///
/// This is the only fallible path in the pipeline. Per-call operations
/// never return errors; malformed input degrades to an empty result.
#[derive(Debug, Error)]
pub enum StopwordError {
    /// A custom stopword list file could not be read.
    #[error("failed to read stopword list {}: {source}", path.display())]
    Io {
        /// Path of the list file that failed to load.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Neither the requested resource nor the built-in fallback produced
    /// any words. A pipeline with an empty stopword set would silently
    /// diverge from the training-time transform, so this is fatal.
    #[error("stopword resource is empty")]
    EmptyResource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phrase_table_order_is_fixed() {
        assert_eq!(LEAKAGE_PHRASES[0], "reuters");
        assert_eq!(LEAKAGE_PHRASES[1], "washington reuters");
        assert_eq!(LEAKAGE_PHRASES[13], "ms");
        assert_eq!(LEAKAGE_PHRASES.len(), 14);
    }

    #[test]
    fn phrases_are_lowercase_alpha() {
        for phrase in LEAKAGE_PHRASES {
            assert!(
                phrase.chars().all(|c| c.is_ascii_lowercase() || c == ' '),
                "phrase {phrase:?} must be lowercase words"
            );
            assert!(!phrase.starts_with(' ') && !phrase.ends_with(' '));
        }
    }

    #[test]
    fn shorter_phrases_precede_their_extensions() {
        let pos = |p: &str| {
            LEAKAGE_PHRASES
                .iter()
                .position(|&x| x == p)
                .expect("phrase present")
        };
        assert!(pos("reuters") < pos("washington reuters"));
        assert!(pos("getty") < pos("getty images"));
        assert!(pos("twitter") < pos("twitter com"));
        assert!(pos("twitter") < pos("pic twitter"));
    }

    #[test]
    fn error_messages_name_the_resource() {
        let err = StopwordError::Io {
            path: PathBuf::from("/tmp/words.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains("/tmp/words.txt"));

        let err = StopwordError::EmptyResource;
        assert!(err.to_string().contains("empty"));
    }
}
