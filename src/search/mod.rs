//! Two-stage FAQ matching
//!
//! This module provides the matching primitives used by the answer pipeline:
//! - Synonym table and keyword expansion
//! - Keyword index with overlap scoring (rule-based stage)
//! - Precomputed entry vectors with similarity scoring (semantic stage)
//! - Named thresholds and confidence levels

mod index;
mod keywords;
mod rule_based;
mod semantic;
mod synonyms;
pub mod thresholds;

pub use index::{IndexStats, KeywordIndex};
pub use keywords::{expand_keywords, expand_keywords_or_empty, KeywordSet};
pub use rule_based::{best_keyword_match, rule_based_match, RuleMatch};
pub use semantic::{SemanticIndex, SemanticMatch};
pub use synonyms::{SynonymTable, HANDBOOK_SYNONYMS};
pub use thresholds::MatchThresholds;
