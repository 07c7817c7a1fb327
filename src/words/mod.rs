//! Word-list sources: where root words come from.
//!
//! A source yields the full pool of candidate root words. Duplicates are
//! allowed. An empty pool is a configuration fault, raised by the session
//! when it tries to draw from it.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::WordListError;

/// Trait for root-word pools.
pub trait WordSource {
    /// Load the full pool of candidate root words.
    fn load(&self) -> Result<Vec<String>, WordListError>;
}

/// Split newline-delimited text into words, trimming each line and
/// skipping blank ones.
#[must_use]
pub fn parse_word_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Fixed in-memory pool.
#[derive(Clone, Debug, Default)]
pub struct StaticWordSource {
    words: Vec<String>,
}

impl StaticWordSource {
    /// Create a pool from any list of words.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }
}

impl WordSource for StaticWordSource {
    fn load(&self) -> Result<Vec<String>, WordListError> {
        Ok(self.words.clone())
    }
}

/// Newline-delimited word file, read on every `load`.
#[derive(Clone, Debug)]
pub struct FileWordSource {
    path: PathBuf,
}

impl FileWordSource {
    /// Point at a word file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordSource for FileWordSource {
    fn load(&self) -> Result<Vec<String>, WordListError> {
        let text = fs::read_to_string(&self.path).map_err(|source| WordListError::Io {
            path: self.path.clone(),
            source,
        })?;
        let words = parse_word_list(&text);
        tracing::debug!(path = %self.path.display(), count = words.len(), "loaded word list");
        Ok(words)
    }
}
