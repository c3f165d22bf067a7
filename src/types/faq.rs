//! FAQ entries and the corpus loaded at startup

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CorpusError;

/// A single question/answer pair from the handbook
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

impl FaqEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// On-disk layouts accepted by [`FaqCorpus::load`]
#[derive(Deserialize)]
#[serde(untagged)]
enum FaqFile {
    Wrapped { faqs: Vec<FaqEntry> },
    Bare(Vec<FaqEntry>),
}

/// Ordered, read-only collection of FAQ entries.
///
/// An entry is identified by its position, which never changes for the
/// lifetime of the corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaqCorpus {
    entries: Vec<FaqEntry>,
}

impl FaqCorpus {
    pub fn new(entries: Vec<FaqEntry>) -> Self {
        Self { entries }
    }

    /// Load the corpus from a JSON file.
    ///
    /// Accepts `{"faqs": [...]}` or a bare array. Entries with a blank
    /// question are skipped since they can never be matched.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CorpusError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CorpusError::Missing(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).map_err(|source| CorpusError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let file: FaqFile =
            serde_json::from_str(&content).map_err(|source| CorpusError::Malformed {
                path: path.to_path_buf(),
                source,
            })?;

        let raw = match file {
            FaqFile::Wrapped { faqs } => faqs,
            FaqFile::Bare(faqs) => faqs,
        };

        let total = raw.len();
        let entries: Vec<FaqEntry> = raw
            .into_iter()
            .filter(|faq| !faq.question.trim().is_empty())
            .collect();

        if entries.len() < total {
            tracing::warn!(
                path = %path.display(),
                skipped = total - entries.len(),
                "skipped FAQ entries with a blank question"
            );
        }

        Ok(Self { entries })
    }

    /// Load the corpus, degrading to an empty one if the file is missing or invalid
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(corpus) => corpus,
            Err(e) => {
                tracing::warn!(error = %e, "FAQ corpus unavailable, continuing with no entries");
                Self::default()
            }
        }
    }

    pub fn get(&self, index: usize) -> Option<&FaqEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[FaqEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FaqEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<FaqEntry>> for FaqCorpus {
    fn from(entries: Vec<FaqEntry>) -> Self {
        Self::new(entries)
    }
}
