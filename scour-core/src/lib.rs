//! Deterministic text normalization for news-classification preprocessing.
//!
//! Scour is the preprocessing stage in front of a text classifier. The
//! classifier's features (TF-IDF vectors) are only valid if inference-time
//! normalization is byte-identical to the transform that produced the
//! training data, so this crate's whole job is to be exact and boring:
//!
//! - **Clean**: lowercase, strip URLs/HTML, keep only ASCII letters,
//!   collapse whitespace
//! - **Stopwords**: drop high-frequency English words
//! - **Leakage**: strip publisher names and boilerplate that leak the
//!   training label
//!
//! ## Quick Start
//!
//! ```
//! use scour_core::{validate_input_default, Preprocessor, TextNormalizer};
//!
//! // The clean stage alone:
//! let cleaner = TextNormalizer::new();
//! assert_eq!(cleaner.clean("Visit http://x.com <b>now</b>!!"), "visit now");
//!
//! // The full pipeline also drops stopwords ("the") and leakage words:
//! let pipeline = Preprocessor::new().expect("stopword resource");
//! let raw = "The president, the economy. (Reuters)";
//! assert_eq!(pipeline.preprocess(raw), "president economy");
//!
//! assert!(!validate_input_default("too short"));
//! ```
//!
//! ## Threading
//!
//! All state is immutable after construction. [`Preprocessor`] is
//! `Send + Sync`; call it from as many threads as you like.

#![warn(missing_docs)]

pub mod analyzer;
pub mod pipeline;

pub use analyzer::{LeakageFilter, StopwordFilter, StopwordSet, TextNormalizer};
pub use pipeline::{combine_title_content, validate_input, validate_input_default, Preprocessor};
