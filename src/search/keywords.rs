//! Keyword expansion shared by indexing and querying

use std::collections::BTreeSet;

use super::synonyms::SynonymTable;
use crate::linguistic::{EngineResult, LinguisticEngine};

/// Keywords derived from one piece of text.
///
/// Ordered so that iteration, and everything scored from it, is deterministic.
pub type KeywordSet = BTreeSet<String>;

/// Expand text into its matchable keywords.
///
/// Each content token contributes its surface form, its lemma, and every
/// synonym group (members plus canonical key) that contains either form.
pub fn expand_keywords<E: LinguisticEngine>(
    engine: &E,
    synonyms: &SynonymTable,
    text: &str,
) -> EngineResult<KeywordSet> {
    let mut keywords = KeywordSet::new();

    let lowered = text.to_lowercase();
    if lowered.trim().is_empty() {
        return Ok(keywords);
    }

    for token in engine.analyze(&lowered)? {
        if !token.is_content() {
            continue;
        }

        synonyms.expand_into(&token.surface, &mut keywords);
        if token.lemma != token.surface {
            synonyms.expand_into(&token.lemma, &mut keywords);
        }

        keywords.insert(token.surface);
        keywords.insert(token.lemma);
    }

    Ok(keywords)
}

/// Like [`expand_keywords`], treating an engine failure as "no keywords"
pub fn expand_keywords_or_empty<E: LinguisticEngine>(
    engine: &E,
    synonyms: &SynonymTable,
    text: &str,
) -> KeywordSet {
    expand_keywords(engine, synonyms, text).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "keyword extraction failed, using no keywords");
        KeywordSet::new()
    })
}
