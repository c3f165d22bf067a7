//! Related-question suggestions for low-confidence queries

use super::SearchContext;
use crate::linguistic::LinguisticEngine;

/// Questions whose similarity to the query is above the suggestion
/// threshold, in corpus order, capped at `max_suggestions`
pub(super) fn related_questions<E: LinguisticEngine>(
    ctx: &SearchContext<E>,
    query_vector: &E::Vector,
) -> Vec<String> {
    let threshold = ctx.thresholds.suggestion;

    ctx.semantic_index
        .question_scores(&ctx.engine, query_vector)
        .into_iter()
        .zip(ctx.corpus.iter())
        .filter(|(score, _)| *score > threshold)
        .take(ctx.thresholds.max_suggestions)
        .map(|(_, faq)| faq.question.clone())
        .collect()
}
