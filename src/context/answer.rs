//! The answer pipeline
//!
//! A strict fallback chain, first success wins:
//! 1. blank question → prompt
//! 2. rule-based keyword match → 0.9
//! 3. semantic match → 0.7
//! 4. related-question suggestions → 0.3
//! 5. apology → 0

use super::{suggest, SearchContext};
use crate::linguistic::LinguisticEngine;
use crate::search::thresholds::{
    NO_MATCH_CONFIDENCE, RULE_BASED_CONFIDENCE, SEMANTIC_CONFIDENCE, SUGGESTION_CONFIDENCE,
};
use crate::types::{AnswerResult, FaqEntry};

/// Reply to an empty or blank question
pub const EMPTY_QUERY_PROMPT: &str = "Please ask a question.";

/// Reply when nothing in the handbook is close enough
pub const NO_MATCH_MESSAGE: &str = "I couldn't find that specific information in the handbook. \
Please try rephrasing your question or contact the Registrar's Office \
for more detailed information.";

/// First line of a suggestion reply
pub const SUGGESTION_INTRO: &str =
    "I couldn't find an exact match, but you might be interested in these topics:\n\n";

pub(super) fn answer<E: LinguisticEngine>(ctx: &SearchContext<E>, question: &str) -> AnswerResult {
    if question.trim().is_empty() {
        tracing::debug!("blank question");
        return AnswerResult::message(EMPTY_QUERY_PROMPT, NO_MATCH_CONFIDENCE);
    }

    if let Some(entry) = ctx.rule_based_search(question) {
        return AnswerResult::from_entry(entry, RULE_BASED_CONFIDENCE);
    }

    // Semantic matching and suggestions share one query vector
    let Some(query_vector) = vectorize_query(&ctx.engine, question) else {
        return AnswerResult::message(NO_MATCH_MESSAGE, NO_MATCH_CONFIDENCE);
    };

    if let Some(entry) = semantic_entry(ctx, &query_vector) {
        return AnswerResult::from_entry(entry, SEMANTIC_CONFIDENCE);
    }

    let suggestions = suggest::related_questions(ctx, &query_vector);
    if !suggestions.is_empty() {
        tracing::debug!(count = suggestions.len(), "answering with suggestions");
        return AnswerResult::with_suggestions(
            compose_suggestion_message(&suggestions),
            SUGGESTION_CONFIDENCE,
            suggestions,
        );
    }

    tracing::debug!("no match");
    AnswerResult::message(NO_MATCH_MESSAGE, NO_MATCH_CONFIDENCE)
}

/// Build the suggestion reply: intro followed by one bullet per question
pub fn compose_suggestion_message(suggestions: &[String]) -> String {
    let bullets: Vec<String> = suggestions.iter().map(|q| format!("• {q}")).collect();
    format!("{SUGGESTION_INTRO}{}", bullets.join("\n"))
}

pub(super) fn vectorize_query<E: LinguisticEngine>(engine: &E, query: &str) -> Option<E::Vector> {
    match engine.vectorize(query) {
        Ok(vector) => Some(vector),
        Err(e) => {
            tracing::warn!(error = %e, "failed to vectorize question");
            None
        }
    }
}

pub(super) fn semantic_entry<'a, E: LinguisticEngine>(
    ctx: &'a SearchContext<E>,
    query_vector: &E::Vector,
) -> Option<&'a FaqEntry> {
    let found = ctx.semantic_index.search(
        &ctx.engine,
        query_vector,
        ctx.thresholds.answer_weight,
        ctx.thresholds.semantic_match,
    )?;

    tracing::debug!(index = found.index, score = found.score, "semantic match");
    ctx.corpus.get(found.index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_suggestion_message() {
        let message = compose_suggestion_message(&[
            "What is the tuition fee?".to_string(),
            "Where is the library?".to_string(),
        ]);

        assert_eq!(
            message,
            "I couldn't find an exact match, but you might be interested in these topics:\n\n\
             • What is the tuition fee?\n• Where is the library?"
        );
    }

    #[test]
    fn test_no_match_message_mentions_registrar() {
        assert!(NO_MATCH_MESSAGE.contains("Registrar's Office"));
        assert!(!NO_MATCH_MESSAGE.contains("  "));
    }
}
