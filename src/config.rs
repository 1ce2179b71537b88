//! Configuration for corpus analysis and queries.
//!
//! Every section has a `Default` that reproduces the plain behaviour of the
//! library, so a configuration file only needs the fields it changes.
//!
//! ```
//! use lexitrie::config::LexitrieConfig;
//!
//! let config: LexitrieConfig =
//!     serde_json::from_str(r#"{ "query": { "max_count": 3 } }"#).unwrap();
//! assert_eq!(config.query.max_count, Some(3));
//! assert!(config.analysis.lowercase);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Sentence normalization applied by the default sentence splitter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Lowercase every sentence.
    pub lowercase: bool,
    /// Replace punctuation with whitespace, keeping in-word apostrophes.
    pub strip_punctuation: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            lowercase: true,
            strip_punctuation: true,
        }
    }
}

/// Defaults for ranked queries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Maximum number of results; `None` returns everything.
    pub max_count: Option<usize>,
}

/// Edit families generated by autocorrect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutocorrectConfig {
    pub insertions: bool,
    pub deletions: bool,
    pub substitutions: bool,
    pub transpositions: bool,
}

impl Default for AutocorrectConfig {
    fn default() -> Self {
        AutocorrectConfig {
            insertions: true,
            deletions: true,
            substitutions: true,
            transpositions: true,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexitrieConfig {
    pub analysis: AnalysisConfig,
    pub query: QueryConfig,
    pub autocorrect: AutocorrectConfig,
}

impl LexitrieConfig {
    /// Load a configuration from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save the configuration as pretty-printed JSON.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}
