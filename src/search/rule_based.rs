//! Rule-based matching by keyword overlap
//!
//! Every query keyword adds one to the tally of each entry indexed under it.
//! The best entry's tally divided by the number of query keywords gives an
//! overlap ratio, so a query whose keywords concentrate on one entry beats a
//! query spread thin over many.

use std::collections::BTreeMap;

use super::index::KeywordIndex;
use super::keywords::KeywordSet;

/// Best keyword match for a query, before the threshold is applied
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleMatch {
    /// Corpus index of the selected entry
    pub index: usize,
    /// Number of query keywords found in the entry's postings
    pub tally: f32,
    /// `tally / |query keywords|`
    pub score: f32,
}

/// Score every entry reachable from `query_keywords` and return the best.
///
/// Ties on the tally go to the lowest corpus index. Returns `None` when the
/// query has no keywords or none of them is indexed.
pub fn best_keyword_match(
    index: &KeywordIndex,
    query_keywords: &KeywordSet,
) -> Option<RuleMatch> {
    if query_keywords.is_empty() {
        return None;
    }

    let mut tallies: BTreeMap<usize, f32> = BTreeMap::new();
    for keyword in query_keywords {
        for &entry in index.postings(keyword) {
            *tallies.entry(entry).or_default() += 1.0;
        }
    }

    // BTreeMap iterates in index order; strict `>` keeps the first maximum
    let (best_index, best_tally) = tallies
        .into_iter()
        .fold(None, |best: Option<(usize, f32)>, (entry, tally)| match best {
            Some((_, best_tally)) if tally <= best_tally => best,
            _ => Some((entry, tally)),
        })?;

    Some(RuleMatch {
        index: best_index,
        tally: best_tally,
        score: best_tally / query_keywords.len() as f32,
    })
}

/// Best keyword match whose overlap ratio is strictly above `threshold`
pub fn rule_based_match(
    index: &KeywordIndex,
    query_keywords: &KeywordSet,
    threshold: f32,
) -> Option<RuleMatch> {
    best_keyword_match(index, query_keywords).filter(|m| m.score > threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linguistic::BasicEngine;
    use crate::search::keywords::expand_keywords;
    use crate::search::synonyms::SynonymTable;
    use crate::types::{FaqCorpus, FaqEntry};

    fn fixture(questions: &[&str]) -> (KeywordIndex, BasicEngine, SynonymTable) {
        let engine = BasicEngine::new();
        let synonyms = SynonymTable::handbook();
        let corpus = FaqCorpus::new(
            questions
                .iter()
                .map(|q| FaqEntry::new(*q, "answer"))
                .collect(),
        );
        let index = KeywordIndex::build(&engine, &synonyms, &corpus);
        (index, engine, synonyms)
    }

    fn keywords(engine: &BasicEngine, synonyms: &SynonymTable, text: &str) -> KeywordSet {
        expand_keywords(engine, synonyms, text).unwrap()
    }

    #[test]
    fn test_best_match_by_overlap() {
        let (index, engine, synonyms) =
            fixture(&["Where is the library?", "What is the tuition fee?"]);

        let query = keywords(&engine, &synonyms, "How much is the tuition?");
        let m = rule_based_match(&index, &query, 0.3).unwrap();
        assert_eq!(m.index, 1);
        assert_eq!(m.tally, 1.0);
        assert_eq!(m.score, 1.0);
    }

    #[test]
    fn test_tie_goes_to_lowest_index() {
        let (index, engine, synonyms) = fixture(&[
            "Library rules",
            "Library location",
            "Library hours",
        ]);

        let query = keywords(&engine, &synonyms, "library");
        let m = best_keyword_match(&index, &query).unwrap();
        assert_eq!(m.index, 0);
    }

    #[test]
    fn test_score_below_threshold_rejected() {
        let (index, engine, synonyms) = fixture(&["Where is the library?"]);

        // one keyword out of many
        let query = keywords(
            &engine,
            &synonyms,
            "library parking cafeteria dormitory elevator shuttle",
        );
        let m = best_keyword_match(&index, &query).unwrap();
        assert!(m.score <= 0.3);
        assert!(rule_based_match(&index, &query, 0.3).is_none());
    }

    #[test]
    fn test_no_overlap() {
        let (index, engine, synonyms) = fixture(&["Where is the library?"]);
        let query = keywords(&engine, &synonyms, "parking permit");
        assert!(best_keyword_match(&index, &query).is_none());
    }

    #[test]
    fn test_empty_query_keywords() {
        let (index, _, _) = fixture(&["Where is the library?"]);
        assert!(best_keyword_match(&index, &KeywordSet::new()).is_none());
    }

    #[test]
    fn test_unindexed_term_keeps_selection_and_tally() {
        let (index, engine, synonyms) =
            fixture(&["What is the tuition fee?", "Where is the library?"]);

        let base = keywords(&engine, &synonyms, "tuition library books");
        let mut extended = base.clone();
        extended.insert("zeppelin".to_string());

        let a = best_keyword_match(&index, &base).unwrap();
        let b = best_keyword_match(&index, &extended).unwrap();
        assert_eq!(a.index, b.index);
        assert_eq!(a.tally, b.tally);
    }
}
