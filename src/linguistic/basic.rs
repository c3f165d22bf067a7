//! Built-in linguistic engine
//!
//! Tokenizes on Unicode word boundaries, classifies tokens against an English
//! stop-word list and builds sparse term-frequency vectors over lemmas.
//! Similarity is the cosine between two such vectors.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

use unicode_segmentation::UnicodeSegmentation;

use super::lemma::lemmatize;
use super::stopwords::ENGLISH_STOP_WORDS;
use super::{EngineResult, LinguisticEngine, Token};
use crate::error::EngineError;

/// Longest input accepted by the engine, in characters
pub const MAX_INPUT_CHARS: usize = 10_000;

/// L2-normalised sparse term vector.
///
/// Weights are stored in term order, so sums over them always run in the
/// same order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermVector {
    weights: BTreeMap<String, f32>,
}

impl TermVector {
    fn from_counts(counts: BTreeMap<String, f32>) -> Self {
        let norm = counts.values().map(|w| w * w).sum::<f32>().sqrt();
        if norm == 0.0 {
            return Self::default();
        }

        let weights = counts
            .into_iter()
            .map(|(term, weight)| (term, weight / norm))
            .collect();
        Self { weights }
    }

    /// Cosine similarity; both vectors are already unit length
    pub fn cosine(&self, other: &TermVector) -> f32 {
        let (small, large) = if self.weights.len() <= other.weights.len() {
            (self, other)
        } else {
            (other, self)
        };

        let dot: f32 = small
            .weights
            .iter()
            .filter_map(|(term, w)| large.weights.get(term).map(|v| w * v))
            .sum();

        dot.clamp(0.0, 1.0)
    }
}

/// Engine backed by a stop-word list, a rule lemmatizer and term vectors
#[derive(Debug, Clone)]
pub struct BasicEngine {
    stop_words: HashSet<String>,
}

impl BasicEngine {
    /// Create an engine with the built-in English stop words
    pub fn new() -> Self {
        Self {
            stop_words: ENGLISH_STOP_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Create an engine, optionally extending the stop words from a file.
    ///
    /// The file holds one word per line; blank lines and lines starting with
    /// `#` are ignored. An unreadable file means the engine cannot start.
    pub fn with_stop_words_file(path: Option<&Path>) -> EngineResult<Self> {
        let mut engine = Self::new();

        let Some(path) = path else {
            return Ok(engine);
        };

        let content = fs::read_to_string(path).map_err(|e| {
            EngineError::Unavailable(format!(
                "cannot read stop words from {}: {e}",
                path.display()
            ))
        })?;

        let before = engine.stop_words.len();
        engine.stop_words.extend(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .map(str::to_lowercase),
        );

        tracing::info!(
            path = %path.display(),
            added = engine.stop_words.len() - before,
            "loaded extra stop words"
        );

        Ok(engine)
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    fn validate(text: &str) -> EngineResult<()> {
        let len = text.chars().count();
        if len > MAX_INPUT_CHARS {
            return Err(EngineError::InputTooLong {
                len,
                max: MAX_INPUT_CHARS,
            });
        }

        if let Some((offset, ch)) = text
            .char_indices()
            .find(|(_, c)| c.is_control() && !c.is_whitespace())
        {
            return Err(EngineError::UnsupportedInput { ch, offset });
        }

        Ok(())
    }

    fn classify(&self, surface: &str) -> Token {
        let lower = surface.to_lowercase();
        let is_punctuation = !lower.chars().any(char::is_alphanumeric);
        let lemma = if is_punctuation {
            lower.clone()
        } else {
            lemmatize(&lower)
        };

        Token {
            is_stopword: self.stop_words.contains(&lower),
            is_punctuation,
            surface: lower,
            lemma,
        }
    }
}

impl Default for BasicEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl LinguisticEngine for BasicEngine {
    type Vector = TermVector;

    fn analyze(&self, text: &str) -> EngineResult<Vec<Token>> {
        Self::validate(text)?;

        Ok(text
            .split_word_bounds()
            .filter(|segment| !segment.trim().is_empty())
            .map(|segment| self.classify(segment))
            .collect())
    }

    fn vectorize(&self, text: &str) -> EngineResult<TermVector> {
        let mut counts: BTreeMap<String, f32> = BTreeMap::new();
        for token in self.analyze(text)? {
            if token.is_content() {
                *counts.entry(token.lemma).or_default() += 1.0;
            }
        }

        Ok(TermVector::from_counts(counts))
    }

    fn vector_similarity(&self, a: &TermVector, b: &TermVector) -> f32 {
        a.cosine(b)
    }
}
