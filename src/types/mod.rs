//! Data types for the FAQ assistant
//!
//! This module contains the corpus entries and the answer returned to callers.

mod answer;
mod faq;

pub use answer::AnswerResult;
pub use faq::{FaqCorpus, FaqEntry};
