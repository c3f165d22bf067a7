//! Linguistic engine abstraction
//!
//! The matchers never tokenize or compare text themselves. They go through a
//! [`LinguisticEngine`], which supplies:
//! - Tokens classified as stop-word / punctuation, each with a lemma
//! - A vector per text and a similarity score between two vectors
//!
//! [`BasicEngine`] is the built-in implementation used by the server.

mod basic;
mod lemma;
mod stopwords;

pub use basic::{BasicEngine, TermVector, MAX_INPUT_CHARS};
pub use lemma::lemmatize;
pub use stopwords::ENGLISH_STOP_WORDS;

use crate::error::EngineError;

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// A single token produced by [`LinguisticEngine::analyze`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub surface: String,
    pub lemma: String,
    pub is_stopword: bool,
    pub is_punctuation: bool,
}

impl Token {
    /// Whether the token carries meaning for matching
    pub fn is_content(&self) -> bool {
        !self.is_stopword && !self.is_punctuation
    }
}

/// Text-processing capability consumed by the matchers.
///
/// Implementations must be deterministic and free of shared mutable state so
/// one engine can serve concurrent queries.
pub trait LinguisticEngine: Send + Sync {
    /// Vector representation of a text, computed once per corpus entry
    type Vector: Send + Sync;

    /// Tokenize and classify text
    fn analyze(&self, text: &str) -> EngineResult<Vec<Token>>;

    /// Compute the vector for a text
    fn vectorize(&self, text: &str) -> EngineResult<Self::Vector>;

    /// Symmetric similarity, roughly in [0, 1] with 1.0 meaning identical
    fn vector_similarity(&self, a: &Self::Vector, b: &Self::Vector) -> f32;

    /// Similarity between two texts
    fn similarity(&self, a: &str, b: &str) -> EngineResult<f32> {
        let a = self.vectorize(a)?;
        let b = self.vectorize(b)?;
        Ok(self.vector_similarity(&a, &b))
    }
}
