//! Semantic matching by vector similarity
//!
//! Question and answer vectors are computed once when the index is built;
//! a query only needs its own vector per call.

use rayon::prelude::*;

use crate::linguistic::LinguisticEngine;
use crate::types::FaqCorpus;

/// Corpus size above which entries are scored in parallel
const PARALLEL_SCORING_THRESHOLD: usize = 256;

/// Precomputed vectors for one entry. `None` when the engine could not
/// process the text, which scores as zero similarity.
#[derive(Debug, Clone)]
struct EntryVectors<V> {
    question: Option<V>,
    answer: Option<V>,
}

/// Best semantic match for a query, before the threshold is applied
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SemanticMatch {
    pub index: usize,
    pub score: f32,
}

/// Read-only vectors for every corpus entry
#[derive(Debug, Clone)]
pub struct SemanticIndex<V> {
    entries: Vec<EntryVectors<V>>,
}

impl<V: Send + Sync> SemanticIndex<V> {
    pub fn build<E>(engine: &E, corpus: &FaqCorpus) -> Self
    where
        E: LinguisticEngine<Vector = V>,
    {
        let entries = corpus
            .iter()
            .map(|faq| EntryVectors {
                question: vectorize_or_none(engine, &faq.question),
                answer: vectorize_or_none(engine, &faq.answer),
            })
            .collect();

        Self { entries }
    }

    /// Best entry by `max(question similarity, answer similarity × answer_weight)`.
    ///
    /// Ties go to the lowest corpus index. `None` only for an empty corpus.
    pub fn best_match<E>(
        &self,
        engine: &E,
        query: &V,
        answer_weight: f32,
    ) -> Option<SemanticMatch>
    where
        E: LinguisticEngine<Vector = V>,
    {
        let scores = self.score_entries(|vectors| {
            let question = similarity_or_zero(engine, query, vectors.question.as_ref());
            let answer = similarity_or_zero(engine, query, vectors.answer.as_ref()) * answer_weight;
            question.max(answer)
        });

        scores
            .into_iter()
            .enumerate()
            .fold(None, |best: Option<SemanticMatch>, (index, score)| match best {
                Some(b) if score <= b.score => best,
                _ => Some(SemanticMatch { index, score }),
            })
    }

    /// Best match whose score is strictly above `threshold`
    pub fn search<E>(
        &self,
        engine: &E,
        query: &V,
        answer_weight: f32,
        threshold: f32,
    ) -> Option<SemanticMatch>
    where
        E: LinguisticEngine<Vector = V>,
    {
        self.best_match(engine, query, answer_weight)
            .filter(|m| m.score > threshold)
    }

    /// Question similarity for every entry, in corpus order
    pub fn question_scores<E>(&self, engine: &E, query: &V) -> Vec<f32>
    where
        E: LinguisticEngine<Vector = V>,
    {
        self.score_entries(|vectors| {
            similarity_or_zero(engine, query, vectors.question.as_ref())
        })
    }

    /// Score entries in corpus order, in parallel for large corpora
    fn score_entries<F>(&self, score: F) -> Vec<f32>
    where
        F: Fn(&EntryVectors<V>) -> f32 + Sync + Send,
    {
        if self.entries.len() > PARALLEL_SCORING_THRESHOLD {
            self.entries.par_iter().map(&score).collect()
        } else {
            self.entries.iter().map(&score).collect()
        }
    }
}

fn vectorize_or_none<E: LinguisticEngine>(engine: &E, text: &str) -> Option<E::Vector> {
    match engine.vectorize(text) {
        Ok(vector) => Some(vector),
        Err(e) => {
            tracing::warn!(
                error = %e,
                "failed to vectorize FAQ text, it will never match semantically"
            );
            None
        }
    }
}

/// Similarity clamped to a finite, non-negative value
fn similarity_or_zero<E: LinguisticEngine>(
    engine: &E,
    query: &E::Vector,
    other: Option<&E::Vector>,
) -> f32 {
    match other {
        Some(other) => {
            let score = engine.vector_similarity(query, other);
            if score.is_finite() {
                score.max(0.0)
            } else {
                0.0
            }
        }
        None => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linguistic::BasicEngine;
    use crate::types::FaqEntry;

    fn corpus() -> FaqCorpus {
        FaqCorpus::new(vec![
            FaqEntry::new("Where is the library located?", "The library is in Building A."),
            FaqEntry::new("When are library hours?", "Open daily from 8am to 8pm."),
            FaqEntry::new("What sports teams exist?", "Basketball, volleyball and chess."),
        ])
    }

    #[test]
    fn test_exact_question_scores_one() {
        let engine = BasicEngine::new();
        let index = SemanticIndex::build(&engine, &corpus());
        let query = engine.vectorize("What sports teams exist?").unwrap();

        let m = index.search(&engine, &query, 0.5, 0.6).unwrap();
        assert_eq!(m.index, 2);
        assert!((m.score - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_answer_similarity_discounted() {
        let engine = BasicEngine::new();
        let index = SemanticIndex::build(&engine, &corpus());
        // identical to an answer, unrelated to every question
        let query = engine.vectorize("Basketball, volleyball and chess.").unwrap();

        let m = index.best_match(&engine, &query, 0.5).unwrap();
        assert_eq!(m.index, 2);
        assert!((m.score - 0.5).abs() < 1e-5);
        assert!(index.search(&engine, &query, 0.5, 0.6).is_none());
    }

    #[test]
    fn test_tie_goes_to_lowest_index() {
        let engine = BasicEngine::new();
        let index = SemanticIndex::build(&engine, &corpus());
        let query = engine.vectorize("library").unwrap();

        let scores = index.question_scores(&engine, &query);
        assert_eq!(scores[0], scores[1]);
        assert_eq!(index.best_match(&engine, &query, 0.0).unwrap().index, 0);
    }

    #[test]
    fn test_question_scores_in_corpus_order() {
        let engine = BasicEngine::new();
        let index = SemanticIndex::build(&engine, &corpus());
        let query = engine.vectorize("sports").unwrap();

        let scores = index.question_scores(&engine, &query);
        assert_eq!(scores.len(), 3);
        assert_eq!(scores[0], 0.0);
        assert!(scores[2] > 0.0);
    }

    #[test]
    fn test_empty_corpus() {
        let engine = BasicEngine::new();
        let index = SemanticIndex::build(&engine, &FaqCorpus::default());
        let query = engine.vectorize("library").unwrap();
        assert!(index.best_match(&engine, &query, 0.5).is_none());
    }

    #[test]
    fn test_parallel_scoring_matches_sequential() {
        let engine = BasicEngine::new();
        let entries: Vec<FaqEntry> = (0..PARALLEL_SCORING_THRESHOLD + 10)
            .map(|i| FaqEntry::new(format!("question {i} about topic{}", i % 7), "answer"))
            .collect();
        let corpus = FaqCorpus::new(entries);
        let index = SemanticIndex::build(&engine, &corpus);
        let query = engine.vectorize("topic3 question").unwrap();

        let expected: Vec<f32> = corpus
            .iter()
            .map(|faq| {
                let question = engine.vectorize(&faq.question).unwrap();
                engine.vector_similarity(&query, &question)
            })
            .collect();
        let scores = index.question_scores(&engine, &query);
        assert_eq!(scores.len(), expected.len());
        for (got, want) in scores.iter().zip(&expected) {
            assert_eq!(got.to_bits(), want.to_bits());
        }

        let m = index.best_match(&engine, &query, 0.5).unwrap();
        // first entry mentioning topic3
        assert_eq!(m.index, 3);
    }
}
