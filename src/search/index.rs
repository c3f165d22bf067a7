//! Keyword index over FAQ questions
//!
//! Inverted index from expanded keyword to the entries whose question
//! produced it. Built once from the corpus and never mutated afterwards.

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use super::keywords::expand_keywords_or_empty;
use super::synonyms::SynonymTable;
use crate::linguistic::LinguisticEngine;
use crate::types::FaqCorpus;

/// Finalised inverted index: keyword → sorted, unique entry indices
#[derive(Debug, Default, Clone)]
pub struct KeywordIndex {
    postings: HashMap<String, Vec<usize>>,

    /// Number of corpus entries the index was built from
    entry_count: usize,
}

impl KeywordIndex {
    /// Build the index from every question in the corpus
    pub fn build<E: LinguisticEngine>(
        engine: &E,
        synonyms: &SynonymTable,
        corpus: &FaqCorpus,
    ) -> Self {
        let mut builder = KeywordIndexBuilder::default();
        for (i, faq) in corpus.iter().enumerate() {
            builder.add_entry(i, expand_keywords_or_empty(engine, synonyms, &faq.question));
        }
        builder.finish(corpus.len())
    }

    /// Entries indexed under `keyword`; empty when the keyword is unknown
    pub fn postings(&self, keyword: &str) -> &[usize] {
        self.postings.get(keyword).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            entry_count: self.entry_count,
            unique_keywords: self.postings.len(),
        }
    }
}

/// Accumulates postings before they are frozen into a [`KeywordIndex`]
#[derive(Debug, Default)]
struct KeywordIndexBuilder {
    postings: HashMap<String, BTreeSet<usize>>,
}

impl KeywordIndexBuilder {
    fn add_entry(&mut self, entry: usize, keywords: impl IntoIterator<Item = String>) {
        for keyword in keywords {
            self.postings.entry(keyword).or_default().insert(entry);
        }
    }

    fn finish(self, entry_count: usize) -> KeywordIndex {
        let postings = self
            .postings
            .into_iter()
            .map(|(keyword, entries)| (keyword, entries.into_iter().collect()))
            .collect();

        KeywordIndex {
            postings,
            entry_count,
        }
    }
}

/// Index statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    pub entry_count: usize,
    pub unique_keywords: usize,
}
