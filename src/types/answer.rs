//! The answer returned for a single question

use serde::{Deserialize, Serialize};

use super::FaqEntry;

/// Result of answering one question.
///
/// `confidence` tells which pipeline stage produced the answer rather than
/// being a calibrated probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerResult {
    pub answer: String,
    pub confidence: f32,
    /// The matched FAQ question, for context
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
}

impl AnswerResult {
    /// A plain message with no source or suggestions
    pub fn message(answer: impl Into<String>, confidence: f32) -> Self {
        Self {
            answer: answer.into(),
            confidence,
            source: None,
            suggestions: None,
        }
    }

    /// A direct answer taken from a matched entry
    pub fn from_entry(entry: &FaqEntry, confidence: f32) -> Self {
        Self {
            answer: entry.answer.clone(),
            confidence,
            source: Some(entry.question.clone()),
            suggestions: None,
        }
    }

    pub fn with_suggestions(
        answer: impl Into<String>,
        confidence: f32,
        suggestions: Vec<String>,
    ) -> Self {
        Self {
            answer: answer.into(),
            confidence,
            source: None,
            suggestions: Some(suggestions),
        }
    }
}
