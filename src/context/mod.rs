//! Search context - the read-only state behind every answer
//!
//! The corpus, synonym table and both indexes are built once at startup and
//! never change afterwards. The context holds no interior mutability, so an
//! `Arc<SearchContext<_>>` can serve concurrent queries without locking.

mod answer;
mod suggest;

pub use answer::{
    compose_suggestion_message, EMPTY_QUERY_PROMPT, NO_MATCH_MESSAGE, SUGGESTION_INTRO,
};

use serde::Serialize;

use crate::linguistic::LinguisticEngine;
use crate::search::{
    expand_keywords_or_empty, rule_based_match, KeywordIndex, MatchThresholds, SemanticIndex,
    SynonymTable,
};
use crate::types::{AnswerResult, FaqCorpus, FaqEntry};

/// Immutable matching state built once from the corpus
pub struct SearchContext<E: LinguisticEngine> {
    pub(crate) engine: E,
    pub(crate) synonyms: SynonymTable,
    pub(crate) corpus: FaqCorpus,
    pub(crate) keyword_index: KeywordIndex,
    pub(crate) semantic_index: SemanticIndex<E::Vector>,
    pub(crate) thresholds: MatchThresholds,
}

impl<E: LinguisticEngine> SearchContext<E> {
    /// Build the context with the default thresholds
    pub fn build(engine: E, synonyms: SynonymTable, corpus: FaqCorpus) -> Self {
        Self::with_thresholds(engine, synonyms, corpus, MatchThresholds::default())
    }

    /// Build the keyword and semantic indexes over `corpus`
    pub fn with_thresholds(
        engine: E,
        synonyms: SynonymTable,
        corpus: FaqCorpus,
        thresholds: MatchThresholds,
    ) -> Self {
        let keyword_index = KeywordIndex::build(&engine, &synonyms, &corpus);
        let semantic_index = SemanticIndex::build(&engine, &corpus);

        let stats = keyword_index.stats();
        tracing::info!(
            entries = stats.entry_count,
            keywords = stats.unique_keywords,
            synonym_keys = synonyms.len(),
            "search context ready"
        );

        Self {
            engine,
            synonyms,
            corpus,
            keyword_index,
            semantic_index,
            thresholds,
        }
    }

    /// Answer a question. Never fails; problems lower the confidence instead.
    pub fn answer(&self, question: &str) -> AnswerResult {
        answer::answer(self, question)
    }

    /// Entry selected by keyword overlap, if its ratio clears the threshold
    pub fn rule_based_search(&self, query: &str) -> Option<&FaqEntry> {
        let keywords = expand_keywords_or_empty(&self.engine, &self.synonyms, query);
        let found = rule_based_match(
            &self.keyword_index,
            &keywords,
            self.thresholds.keyword_match,
        )?;

        tracing::debug!(
            index = found.index,
            tally = found.tally,
            score = found.score,
            "rule-based match"
        );
        self.corpus.get(found.index)
    }

    /// Entry selected by vector similarity, if its score clears the threshold
    pub fn semantic_search(&self, query: &str) -> Option<&FaqEntry> {
        let query_vector = answer::vectorize_query(&self.engine, query)?;
        answer::semantic_entry(self, &query_vector)
    }

    /// Related questions for a query, in corpus order
    pub fn suggestions(&self, query: &str) -> Vec<String> {
        match answer::vectorize_query(&self.engine, query) {
            Some(query_vector) => suggest::related_questions(self, &query_vector),
            None => Vec::new(),
        }
    }

    pub fn corpus(&self) -> &FaqCorpus {
        &self.corpus
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn synonyms(&self) -> &SynonymTable {
        &self.synonyms
    }

    pub fn keyword_index(&self) -> &KeywordIndex {
        &self.keyword_index
    }

    pub fn thresholds(&self) -> &MatchThresholds {
        &self.thresholds
    }

    pub fn stats(&self) -> ContextStats {
        ContextStats {
            entries: self.corpus.len(),
            keywords: self.keyword_index.stats().unique_keywords,
            synonym_keys: self.synonyms.len(),
        }
    }
}

/// Summary of the loaded state, reported by `/api/stats`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContextStats {
    pub entries: usize,
    pub keywords: usize,
    pub synonym_keys: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linguistic::BasicEngine;
    use crate::search::thresholds::{RULE_BASED_CONFIDENCE, SEMANTIC_CONFIDENCE};

    fn handbook_context() -> SearchContext<BasicEngine> {
        let corpus = FaqCorpus::new(vec![
            FaqEntry::new("What is the tuition fee?", "Tuition is paid per semester."),
            FaqEntry::new("Where is the library?", "The library is in Building A."),
            FaqEntry::new(
                "What happens if I fail a subject?",
                "You must retake the subject the following term.",
            ),
        ]);
        SearchContext::build(BasicEngine::new(), SynonymTable::handbook(), corpus)
    }

    #[test]
    fn test_stats() {
        let ctx = handbook_context();
        let stats = ctx.stats();
        assert_eq!(stats.entries, 3);
        assert_eq!(stats.synonym_keys, ctx.synonyms().len());
        assert!(stats.keywords > 3);
    }

    #[test]
    fn test_rule_based_search_via_synonym() {
        let ctx = handbook_context();
        let entry = ctx.rule_based_search("How much is the tuition?").unwrap();
        assert_eq!(entry.answer, "Tuition is paid per semester.");
    }

    #[test]
    fn test_every_question_answers_itself() {
        let ctx = handbook_context();
        for entry in ctx.corpus().iter() {
            let result = ctx.answer(&entry.question);
            assert_eq!(result.confidence, RULE_BASED_CONFIDENCE);
            assert_eq!(result.source.as_deref(), Some(entry.question.as_str()));
        }
    }

    #[test]
    fn test_semantic_search_when_keywords_miss() {
        let thresholds = MatchThresholds {
            // disable the keyword stage
            keyword_match: 1.0,
            ..MatchThresholds::default()
        };
        let ctx = SearchContext::with_thresholds(
            BasicEngine::new(),
            SynonymTable::handbook(),
            handbook_context().corpus().clone(),
            thresholds,
        );

        assert!(ctx.rule_based_search("Where is the library?").is_none());
        let result = ctx.answer("Where is the library?");
        assert_eq!(result.confidence, SEMANTIC_CONFIDENCE);
        assert_eq!(result.answer, "The library is in Building A.");
    }

    #[test]
    fn test_context_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SearchContext<BasicEngine>>();
    }
}
