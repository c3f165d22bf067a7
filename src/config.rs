//! Runtime configuration from environment variables
//!
//! | Variable | Default |
//! |----------|---------|
//! | `FAQ_FILE_PATH` | `static/faqs.json` |
//! | `FAQ_STATIC_DIR` | `static` |
//! | `FAQ_HOST` | `127.0.0.1` |
//! | `FAQ_PORT` | `5000` |
//! | `FAQ_STOPWORDS_PATH` | unset |
//! | `FAQ_KEYWORD_THRESHOLD` | 0.3 |
//! | `FAQ_SEMANTIC_THRESHOLD` | 0.6 |
//! | `FAQ_SUGGESTION_THRESHOLD` | 0.4 |
//! | `FAQ_ANSWER_WEIGHT` | 0.5 |
//!
//! Relative paths are resolved against the working directory.

use std::env;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::search::MatchThresholds;

const DEFAULT_FAQ_FILE: &str = "static/faqs.json";
const DEFAULT_STATIC_DIR: &str = "static";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;

/// Server configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub faq_file: PathBuf,
    pub static_dir: PathBuf,
    pub host: String,
    pub port: u16,
    pub stopwords_file: Option<PathBuf>,
    pub thresholds: MatchThresholds,
}

impl Config {
    /// Read the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let current_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::from_lookup(&current_dir, |var| env::var(var).ok())
    }

    /// Read the configuration through `lookup`, resolving paths against `base_dir`
    pub fn from_lookup<F>(base_dir: &Path, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let resolve = |value: String| {
            let path = PathBuf::from(value);
            if path.is_absolute() {
                path
            } else {
                base_dir.join(path)
            }
        };

        let faq_file = resolve(
            lookup("FAQ_FILE_PATH").unwrap_or_else(|| DEFAULT_FAQ_FILE.to_string()),
        );
        let static_dir = resolve(
            lookup("FAQ_STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string()),
        );
        let stopwords_file = lookup("FAQ_STOPWORDS_PATH")
            .filter(|v| !v.trim().is_empty())
            .map(resolve);

        let host = lookup("FAQ_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("FAQ_PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort {
                    var: "FAQ_PORT",
                    value,
                })?,
            None => DEFAULT_PORT,
        };

        let defaults = MatchThresholds::default();
        let thresholds = MatchThresholds {
            keyword_match: ratio(&lookup, "FAQ_KEYWORD_THRESHOLD", defaults.keyword_match)?,
            semantic_match: ratio(&lookup, "FAQ_SEMANTIC_THRESHOLD", defaults.semantic_match)?,
            suggestion: ratio(&lookup, "FAQ_SUGGESTION_THRESHOLD", defaults.suggestion)?,
            answer_weight: ratio(&lookup, "FAQ_ANSWER_WEIGHT", defaults.answer_weight)?,
            max_suggestions: defaults.max_suggestions,
        };

        Ok(Self {
            faq_file,
            static_dir,
            host,
            port,
            stopwords_file,
            thresholds,
        })
    }

    /// Address the HTTP server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Parse an optional value in [0, 1]
fn ratio<F>(lookup: &F, var: &'static str, default: f32) -> Result<f32, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(var) else {
        return Ok(default);
    };

    let parsed = value
        .trim()
        .parse::<f32>()
        .map_err(|_| ConfigError::InvalidNumber { var, value })?;

    if !(0.0..=1.0).contains(&parsed) {
        return Err(ConfigError::OutOfRange { var, value: parsed });
    }

    Ok(parsed)
}
