//! Core building blocks: normalization, letter multisets, RNG, configuration, errors.
//!
//! Nothing here knows about rule order or session lifecycle; `rules` and
//! `session` are built on top of these types.

pub mod word;
pub mod rng;
pub mod config;
pub mod error;

pub use word::{letter_count, normalize, LetterCounts, UsedWords, MIN_WORD_LENGTH};
pub use rng::{GameRng, GameRngState};
pub use config::{GameConfig, DEFAULT_LANGUAGE};
pub use error::{SessionError, WordListError};
