//! Word normalization, letter multisets, and the used-word list.
//!
//! ## Normalization
//!
//! Every string that reaches the rule chain is normalized exactly once:
//! leading/trailing whitespace (including newlines) is trimmed and the
//! result is lowercased. Normalizing twice yields the same string.
//!
//! ## Letter multisets
//!
//! `LetterCounts` is a frequency map (letter -> count) backed by `FxHashMap`.
//! Subset checks decrement a working copy of the root's counts per candidate
//! letter, scanning left to right, and stop at the first unmatched letter.
//!
//! ## UsedWords
//!
//! Accepted words for the current round, most recent first. Backed by an
//! `im::Vector` so session snapshots clone in O(1).

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Minimum accepted word length, in characters.
pub const MIN_WORD_LENGTH: usize = 3;

/// Normalize raw input: trim surrounding whitespace, then lowercase.
///
/// ```
/// use word_scramble::core::normalize;
///
/// assert_eq!(normalize("  Lines \n"), "lines");
/// assert_eq!(normalize(&normalize(" SiLeNt ")), normalize(" SiLeNt "));
/// assert_eq!(normalize(" \t\n"), "");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Length of a word in characters (not bytes).
#[must_use]
pub fn letter_count(word: &str) -> usize {
    word.chars().count()
}

/// Letter multiset of a word.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LetterCounts {
    counts: FxHashMap<char, u32>,
}

impl LetterCounts {
    /// Count the letters of `word`.
    #[must_use]
    pub fn of(word: &str) -> Self {
        let mut counts = FxHashMap::default();
        for letter in word.chars() {
            *counts.entry(letter).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Occurrences of `letter`.
    #[must_use]
    pub fn get(&self, letter: char) -> u32 {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Number of distinct letters.
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Consume one occurrence of `letter`.
    ///
    /// Returns `false` (leaving the counts untouched) if none remain.
    pub fn take(&mut self, letter: char) -> bool {
        match self.counts.get_mut(&letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }

    /// Check whether every letter of `word` can be drawn from these counts.
    ///
    /// Works on a scratch copy; `self` is not modified.
    ///
    /// ```
    /// use word_scramble::core::LetterCounts;
    ///
    /// let swift = LetterCounts::of("swift");
    /// assert!(swift.can_spell("wit"));
    /// assert!(swift.can_spell("swift"));
    /// assert!(!swift.can_spell("fists"));
    /// ```
    #[must_use]
    pub fn can_spell(&self, word: &str) -> bool {
        let mut remaining = self.clone();
        word.chars().all(|letter| remaining.take(letter))
    }
}

/// Accepted words for a round, most recently accepted first.
///
/// Invariant: no duplicates. Only the session adds words, and only after
/// the rule chain accepted them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsedWords {
    words: Vector<String>,
}

impl UsedWords {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether `word` was already accepted.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Number of accepted words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if no word has been accepted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// The most recently accepted word.
    #[must_use]
    pub fn latest(&self) -> Option<&str> {
        self.words.front().map(String::as_str)
    }

    /// Sum of the lengths of all words.
    #[must_use]
    pub fn total_letters(&self) -> usize {
        self.iter().map(letter_count).sum()
    }

    /// Copy into a plain `Vec`, most recent first.
    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        self.words.iter().cloned().collect()
    }

    /// Record a newly accepted word at the front.
    pub(crate) fn prepend(&mut self, word: String) {
        self.words.push_front(word);
    }

    /// Check the no-duplicates invariant.
    pub(crate) fn has_duplicates(&self) -> bool {
        self.words
            .iter()
            .enumerate()
            .any(|(i, w)| self.words.iter().skip(i + 1).any(|other| other == w))
    }
}

/// Builds a list in iteration order: the first item is treated as the most
/// recent word.
impl<S: Into<String>> FromIterator<S> for UsedWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}
