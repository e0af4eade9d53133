//! Text analysis stages.
//!
//! This module provides the individual pipeline stages:
//! - **Normalizer**: basic cleaning of raw text
//! - **Tokenizer**: splits cleaned text into word tokens
//! - **Stopwords**: loads and applies the stopword set
//! - **Leakage**: strips label-leaking phrases

pub mod leakage;
pub mod normalizer;
pub mod stopwords;
pub mod tokenizer;

pub use leakage::LeakageFilter;
pub use normalizer::TextNormalizer;
pub use stopwords::{StopwordFilter, StopwordSet};
