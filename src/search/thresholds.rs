//! Matching thresholds and confidence levels
//!
//! The values were calibrated against the student handbook corpus. They live
//! here so they can be tuned (see [`crate::config::Config`]) without touching
//! the matching code.

/// Minimum keyword overlap ratio (best tally / query keyword count) for a
/// rule-based match. The ratio must be strictly greater.
pub const KEYWORD_MATCH_THRESHOLD: f32 = 0.3;

/// Minimum similarity for a semantic match (strictly greater)
pub const SEMANTIC_MATCH_THRESHOLD: f32 = 0.6;

/// Minimum question similarity for a question to be offered as a suggestion
pub const SUGGESTION_THRESHOLD: f32 = 0.4;

/// Weight applied to answer similarity; answers reflect query intent less
/// reliably than questions
pub const ANSWER_SIMILARITY_WEIGHT: f32 = 0.5;

/// Maximum number of suggested questions
pub const MAX_SUGGESTIONS: usize = 3;

/// Confidence reported for a rule-based answer
pub const RULE_BASED_CONFIDENCE: f32 = 0.9;

/// Confidence reported for a semantic answer
pub const SEMANTIC_CONFIDENCE: f32 = 0.7;

/// Confidence reported when only suggestions are returned
pub const SUGGESTION_CONFIDENCE: f32 = 0.3;

/// Confidence reported for prompts and no-match responses
pub const NO_MATCH_CONFIDENCE: f32 = 0.0;

/// Tunable thresholds used by the answer pipeline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchThresholds {
    pub keyword_match: f32,
    pub semantic_match: f32,
    pub suggestion: f32,
    pub answer_weight: f32,
    pub max_suggestions: usize,
}

impl Default for MatchThresholds {
    fn default() -> Self {
        Self {
            keyword_match: KEYWORD_MATCH_THRESHOLD,
            semantic_match: SEMANTIC_MATCH_THRESHOLD,
            suggestion: SUGGESTION_THRESHOLD,
            answer_weight: ANSWER_SIMILARITY_WEIGHT,
            max_suggestions: MAX_SUGGESTIONS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds_are_ordered() {
        let t = MatchThresholds::default();
        // suggestions must be looser than a semantic answer
        assert!(t.suggestion < t.semantic_match);
        assert!(t.answer_weight > 0.0 && t.answer_weight <= 1.0);
    }

    #[test]
    fn test_confidence_reflects_stage() {
        assert!(RULE_BASED_CONFIDENCE > SEMANTIC_CONFIDENCE);
        assert!(SEMANTIC_CONFIDENCE > SUGGESTION_CONFIDENCE);
        assert!(SUGGESTION_CONFIDENCE > NO_MATCH_CONFIDENCE);
    }
}
