//! Dictionary backed by an in-memory word set.

use std::fs;
use std::path::Path;

use rustc_hash::FxHashSet;

use super::DictionaryOracle;
use crate::core::error::WordListError;
use crate::core::word::normalize;

/// Set of recognized words for a single language.
///
/// Entries are normalized on insertion. Lookups with any other language tag
/// report `false`.
///
/// ## Example
///
/// ```
/// use word_scramble::dictionary::{DictionaryOracle, WordListDictionary};
///
/// let dict = WordListDictionary::new("en", ["Lines", "silent "]);
/// assert!(dict.is_valid("lines", "en"));
/// assert!(dict.is_valid("silent", "en"));
/// assert!(!dict.is_valid("stinel", "en"));
/// assert!(!dict.is_valid("lines", "de"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct WordListDictionary {
    language: String,
    words: FxHashSet<String>,
}

impl WordListDictionary {
    /// Build from an iterator of words. Blank entries are skipped.
    pub fn new<I, S>(language: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dict = Self {
            language: language.into(),
            words: FxHashSet::default(),
        };
        dict.extend(words);
        dict
    }

    /// Build from newline-delimited text.
    #[must_use]
    pub fn from_text(language: impl Into<String>, text: &str) -> Self {
        Self::new(language, text.lines())
    }

    /// Load a newline-delimited word file.
    pub fn from_path(
        language: impl Into<String>,
        path: impl AsRef<Path>,
    ) -> Result<Self, WordListError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| WordListError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dict = Self::from_text(language, &text);
        tracing::debug!(path = %path.display(), entries = dict.len(), "loaded dictionary");
        Ok(dict)
    }

    /// Add more words.
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words.extend(
            words
                .into_iter()
                .map(|w| normalize(w.as_ref()))
                .filter(|w| !w.is_empty()),
        );
    }

    /// Language tag this dictionary answers for.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the dictionary has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl DictionaryOracle for WordListDictionary {
    fn is_valid(&self, word: &str, language: &str) -> bool {
        language == self.language && self.words.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_lookup() {
        let dict = WordListDictionary::new("en", ["lines", "silent", "listen"]);
        assert_eq!(dict.len(), 3);
        assert!(dict.is_valid("silent", "en"));
        assert!(!dict.is_valid("Silent", "en"));
        assert!(!dict.is_valid("tinsel", "en"));
    }

    #[test]
    fn test_language_mismatch_is_invalid() {
        let dict = WordListDictionary::new("en", ["lines"]);
        assert_eq!(dict.language(), "en");
        assert!(!dict.is_valid("lines", "fr"));
    }

    #[test]
    fn test_from_text_skips_blank_lines() {
        let dict = WordListDictionary::from_text("en", "lines\n\n  SILENT\r\n\n");
        assert_eq!(dict.len(), 2);
        assert!(dict.is_valid("silent", "en"));
        assert!(!dict.is_valid("", "en"));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "listen\ntinsel").unwrap();

        let dict = WordListDictionary::from_path("en", file.path()).unwrap();
        assert!(dict.is_valid("tinsel", "en"));
        assert!(!dict.is_empty());
    }

    #[test]
    fn test_from_missing_path() {
        let result = WordListDictionary::from_path("en", "/nonexistent/dictionary.txt");
        assert!(matches!(result, Err(WordListError::Io { .. })));
    }
}
