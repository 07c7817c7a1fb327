//! Error types for session setup and word-list loading.
//!
//! Validation rejections are not errors: they are returned as
//! [`Verdict::Rejected`](crate::rules::Verdict) values. The types here cover
//! faults that stop a round from being established.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading a word-list source.
#[derive(Debug, Error)]
pub enum WordListError {
    /// The backing file could not be read.
    #[error("could not read word list {path}: {source}")]
    Io {
        /// File that failed to load.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised by `GameSession` lifecycle operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The word-list source yielded no usable root word.
    #[error("could not load the words file: word list is empty")]
    EmptyWordList,

    /// An explicitly supplied root word normalized to the empty string.
    #[error("root word is empty after normalization")]
    EmptyRootWord,

    /// A submission arrived before any round was started.
    #[error("no round in progress; start a new game first")]
    NotStarted,

    /// A snapshot violated a session invariant.
    #[error("inconsistent session snapshot: {0}")]
    InconsistentSnapshot(String),

    /// A snapshot could not be encoded or decoded.
    #[error("snapshot encoding failed: {0}")]
    Snapshot(#[from] bincode::Error),

    /// The word-list source failed.
    #[error(transparent)]
    WordList(#[from] WordListError),
}

impl SessionError {
    /// Check whether this error is a configuration fault (no usable root word).
    #[must_use]
    pub fn is_configuration_fault(&self) -> bool {
        matches!(
            self,
            SessionError::EmptyWordList | SessionError::EmptyRootWord | SessionError::WordList(_)
        )
    }
}
