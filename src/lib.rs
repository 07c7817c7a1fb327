//! # word-scramble
//!
//! Word-validation and scoring engine for a root-word anagram puzzle.
//!
//! A round draws a random root word. The player submits words built from
//! its letters; each submission is normalized and run through a fixed rule
//! chain. Accepted words are recorded most-recent-first and the score is
//! the sum of their lengths.
//!
//! ## Design Principles
//!
//! 1. **Pure rules**: `ValidationEngine` reads its inputs and nothing else.
//!    All mutation happens in `GameSession`, and only after acceptance.
//!
//! 2. **Ordered verdicts**: Length, novelty, letter subset, dictionary.
//!    The first failure is the reported reason.
//!
//! 3. **Pluggable collaborators**: Root words come from a `WordSource`,
//!    dictionary answers from a `DictionaryOracle`. An oracle that fails
//!    counts as "not a word"; an empty word source is a fatal setup error.
//!
//! ## Modules
//!
//! - `core`: Normalization, letter multisets, used words, RNG, config, errors
//! - `rules`: Rule chain and verdicts
//! - `dictionary`: Oracle trait and implementations
//! - `words`: Root-word sources
//! - `session`: Round lifecycle, snapshots, serialized shared access

pub mod core;
pub mod rules;
pub mod dictionary;
pub mod words;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    normalize, LetterCounts, UsedWords, MIN_WORD_LENGTH,
    GameRng, GameRngState, GameConfig, DEFAULT_LANGUAGE,
    SessionError, WordListError,
};

pub use crate::rules::{RejectReason, Rule, ValidationEngine, Verdict};

pub use crate::dictionary::{
    bounded, DictionaryOracle, FnOracle, SharedOracle, TimeoutOracle, WordListDictionary,
};

pub use crate::words::{FileWordSource, StaticWordSource, WordSource};

pub use crate::session::{GameSession, SessionSnapshot, SessionState, SharedSession};
