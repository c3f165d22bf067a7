//! Handbook FAQ Assistant
//!
//! Answers natural-language questions against a fixed corpus of FAQ entries
//! using two matching stages and a suggestion fallback.
//!
//! # Pipeline
//!
//! 1. **Rule-based**: synonym-aware keyword overlap against an inverted index
//! 2. **Semantic**: vector similarity against every question (and, at half
//!    weight, every answer)
//! 3. **Suggestions**: up to three related questions when nothing is confident
//!
//! # Modules
//!
//! - `types`: FAQ entries, corpus loading and the answer result
//! - `linguistic`: the text-processing engine trait and the built-in engine
//! - `search`: synonym table, keyword index, matchers and thresholds
//! - `context`: the immutable search context and answer pipeline
//! - `config`: environment-driven configuration
//! - `api`: HTTP transport
//!
//! # Example
//!
//! ```
//! use handbook_faq::{BasicEngine, FaqCorpus, FaqEntry, SearchContext, SynonymTable};
//!
//! let corpus = FaqCorpus::new(vec![FaqEntry::new(
//!     "What is the tuition fee?",
//!     "Tuition is paid per semester.",
//! )]);
//! let ctx = SearchContext::build(BasicEngine::new(), SynonymTable::handbook(), corpus);
//!
//! let result = ctx.answer("How much is the tuition?");
//! assert_eq!(result.answer, "Tuition is paid per semester.");
//! assert_eq!(result.confidence, 0.9);
//! ```

pub mod api;
pub mod config;
pub mod context;
pub mod error;
pub mod linguistic;
pub mod search;
pub mod types;

// Re-export commonly used items at crate root
pub use config::Config;
pub use context::{ContextStats, SearchContext};
pub use error::{ConfigError, CorpusError, EngineError, Error, Result};
pub use linguistic::{BasicEngine, LinguisticEngine, Token};
pub use search::{MatchThresholds, SynonymTable};
pub use types::{AnswerResult, FaqCorpus, FaqEntry};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
