//! Per-round session state and snapshots.
//!
//! ## SessionState
//!
//! - `root`: normalized root word, fixed for the round
//! - `used`: accepted words, most recent first
//! - `score`: sum of the lengths of `used`, recomputed on every commit
//!
//! Fields are read-only outside the crate; `GameSession` is the only writer.
//!
//! ## SessionSnapshot
//!
//! In-memory checkpoint of a whole session (round state plus RNG position),
//! encodable with `bincode`. Restoring re-checks the invariants above.

use serde::{Deserialize, Serialize};

use crate::core::error::SessionError;
use crate::core::rng::GameRngState;
use crate::core::word::{letter_count, normalize, LetterCounts, UsedWords, MIN_WORD_LENGTH};

/// State of the round in progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    root: String,
    used: UsedWords,
    score: usize,
}

impl SessionState {
    /// Fresh round: no words, zero score.
    pub(crate) fn new(root: String) -> Self {
        Self {
            root,
            used: UsedWords::new(),
            score: 0,
        }
    }

    /// Root word for this round.
    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Accepted words, most recent first.
    #[must_use]
    pub fn used_words(&self) -> &UsedWords {
        &self.used
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    /// Record an accepted word and recompute the score from scratch.
    pub(crate) fn commit(&mut self, word: String) {
        self.used.prepend(word);
        self.score = self.used.total_letters();
    }

    /// Check the round invariants. Dictionary membership is not re-checked.
    pub fn validate(&self) -> Result<(), SessionError> {
        let fail = |msg: String| Err(SessionError::InconsistentSnapshot(msg));

        if self.root.is_empty() {
            return fail("root word is empty".into());
        }
        if normalize(&self.root) != self.root {
            return fail(format!("root word {:?} is not normalized", self.root));
        }
        if self.used.has_duplicates() {
            return fail("used words contain duplicates".into());
        }

        let letters = LetterCounts::of(&self.root);
        for word in self.used.iter() {
            if normalize(word) != *word {
                return fail(format!("used word {word:?} is not normalized"));
            }
            if letter_count(word) < MIN_WORD_LENGTH {
                return fail(format!("used word {word:?} is too short"));
            }
            if !letters.can_spell(word) {
                return fail(format!(
                    "used word {word:?} is not spellable from {:?}",
                    self.root
                ));
            }
        }

        let expected = self.used.total_letters();
        if self.score != expected {
            return fail(format!(
                "score {} does not match word lengths {expected}",
                self.score
            ));
        }
        Ok(())
    }
}

/// Serializable checkpoint of a `GameSession`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Round in progress, `None` if idle.
    pub state: Option<SessionState>,
    /// RNG position, so later draws continue the same sequence.
    pub rng: GameRngState,
}

impl SessionSnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SessionError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bincode.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SessionError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_round() {
        let state = SessionState::new("listen".into());
        assert_eq!(state.root(), "listen");
        assert!(state.used_words().is_empty());
        assert_eq!(state.score(), 0);
        assert!(state.validate().is_ok());
    }

    #[test]
    fn test_commit_recomputes_score() {
        let mut state = SessionState::new("listen".into());
        state.commit("lines".into());
        assert_eq!(state.score(), 5);
        state.commit("silent".into());
        assert_eq!(state.score(), 11);
        assert_eq!(state.used_words().to_vec(), vec!["silent", "lines"]);
        assert!(state.validate().is_ok());
    }

    #[test]
    fn test_validate_catches_score_drift() {
        let mut state = SessionState::new("listen".into());
        state.commit("lines".into());
        state.score = 99;
        assert!(matches!(state.validate(), Err(SessionError::InconsistentSnapshot(_))));
    }

    #[test]
    fn test_validate_catches_bad_words() {
        let mut state = SessionState::new("listen".into());
        state.used = ["zebra"].into_iter().collect();
        state.score = 5;
        assert!(state.validate().is_err());

        state.used = ["it"].into_iter().collect();
        state.score = 2;
        assert!(state.validate().is_err());

        state.used = ["tin", "tin"].into_iter().collect();
        state.score = 6;
        assert!(state.validate().is_err());

        // Letters fit, but the stored form differs from what a player submits.
        state.used = ["Tin"].into_iter().collect();
        state.score = 3;
        assert!(state.validate().is_err());

        state.root = " LISTEN".into();
        state.used = UsedWords::new();
        state.score = 0;
        assert!(state.validate().is_err());

        state.root = "Listen".into();
        assert!(state.validate().is_err());

        state.root = String::new();
        assert!(state.validate().is_err());
    }

    #[test]
    fn test_snapshot_bytes() {
        let mut state = SessionState::new("listen".into());
        state.commit("tin".into());
        let snapshot = SessionSnapshot {
            state: Some(state),
            rng: GameRngState { seed: 1, word_pos: 64 },
        };

        let bytes = snapshot.to_bytes().unwrap();
        assert_eq!(SessionSnapshot::from_bytes(&bytes).unwrap(), snapshot);
        assert!(SessionSnapshot::from_bytes(&[0xff]).is_err());
    }
}
