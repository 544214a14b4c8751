//! Text analysis stages.
//!
//! - **Tokenizer**: Splits raw text on whitespace
//! - **Normalizer**: Lowercases tokens and keeps only Latin letters

pub mod normalizer;
pub mod tokenizer;

pub use normalizer::{normalize, NormalizerConfig, WordNormalizer};
pub use tokenizer::{split_words, Tokenizer};
