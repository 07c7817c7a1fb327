//! Game session: owns round state and drives the validation engine.
//!
//! Two states: idle (no root word yet) and active. `start_new_game` moves
//! idle to active and resets an active round; `submit` keeps it active.
//! There is no terminal state.

use crate::core::config::GameConfig;
use crate::core::error::SessionError;
use crate::core::rng::GameRng;
use crate::core::word::normalize;
use crate::dictionary::DictionaryOracle;
use crate::rules::{ValidationEngine, Verdict};
use crate::words::WordSource;

use super::state::{SessionSnapshot, SessionState};

/// Single-player word-building session.
///
/// ## Example
///
/// ```
/// use word_scramble::core::GameConfig;
/// use word_scramble::dictionary::WordListDictionary;
/// use word_scramble::rules::Verdict;
/// use word_scramble::session::GameSession;
///
/// let dict = WordListDictionary::new("en", ["lines", "silent"]);
/// let mut session = GameSession::new(vec!["listen".into()], dict, &GameConfig::default());
///
/// session.start_new_game().unwrap();
/// assert_eq!(session.submit(" Lines\n").unwrap(), Verdict::Accepted);
/// assert_eq!(session.submit("silent").unwrap(), Verdict::Accepted);
/// assert_eq!(session.score(), 11);
/// ```
#[derive(Debug)]
pub struct GameSession<D> {
    engine: ValidationEngine<D>,
    pool: Vec<String>,
    rng: GameRng,
    state: Option<SessionState>,
}

impl<D: DictionaryOracle> GameSession<D> {
    /// Create an idle session over a root-word pool.
    ///
    /// Pool entries are normalized; entries that normalize to the empty
    /// string are dropped.
    pub fn new(pool: Vec<String>, oracle: D, config: &GameConfig) -> Self {
        let pool: Vec<String> = pool
            .iter()
            .map(|w| normalize(w))
            .filter(|w| !w.is_empty())
            .collect();
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);

        Self {
            engine: ValidationEngine::new(oracle, config.language.clone()),
            pool,
            rng,
            state: None,
        }
    }

    /// Load the pool from `source` and start the first round.
    ///
    /// Fails with `EmptyWordList` if the source has no usable words.
    pub fn load(
        source: &impl WordSource,
        oracle: D,
        config: &GameConfig,
    ) -> Result<Self, SessionError> {
        let words = source.load()?;
        let mut session = Self::new(words, oracle, config);
        session.start_new_game()?;
        Ok(session)
    }

    /// Draw a random root word and reset the round.
    ///
    /// Any pool entry may be drawn, including earlier rounds' roots.
    pub fn start_new_game(&mut self) -> Result<&str, SessionError> {
        let root = self
            .rng
            .choose(&self.pool)
            .cloned()
            .ok_or(SessionError::EmptyWordList)?;
        tracing::info!(root = %root, pool = self.pool.len(), "starting new round");
        Ok(self.state.insert(SessionState::new(root)).root())
    }

    /// Reset the round with a caller-chosen root word.
    pub fn start_with_root(&mut self, root: &str) -> Result<(), SessionError> {
        let root = normalize(root);
        if root.is_empty() {
            return Err(SessionError::EmptyRootWord);
        }
        tracing::info!(root = %root, "starting round with fixed root");
        self.state = Some(SessionState::new(root));
        Ok(())
    }

    /// Normalize `raw`, run the rule chain, and commit if accepted.
    ///
    /// Rejections leave the session untouched. Only an idle session is an
    /// error.
    pub fn submit(&mut self, raw: &str) -> Result<Verdict, SessionError> {
        let state = self.state.as_mut().ok_or(SessionError::NotStarted)?;
        let candidate = normalize(raw);

        let verdict = self.engine.evaluate(&candidate, state.root(), state.used_words());
        match verdict {
            Verdict::Accepted => {
                state.commit(candidate);
                tracing::debug!(
                    word = state.used_words().latest(),
                    score = state.score(),
                    "accepted"
                );
            }
            Verdict::Rejected(reason) => {
                tracing::debug!(candidate = %candidate, %reason, "rejected");
            }
        }
        Ok(verdict)
    }

    /// Check if a round is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state.is_some()
    }

    /// Round in progress, if any.
    #[must_use]
    pub fn state(&self) -> Option<&SessionState> {
        self.state.as_ref()
    }

    /// Current root word.
    #[must_use]
    pub fn root(&self) -> Option<&str> {
        self.state.as_ref().map(SessionState::root)
    }

    /// Accepted words, most recent first. Empty when idle.
    #[must_use]
    pub fn used_words(&self) -> Vec<String> {
        self.state
            .as_ref()
            .map(|s| s.used_words().to_vec())
            .unwrap_or_default()
    }

    /// Current score. Zero when idle.
    #[must_use]
    pub fn score(&self) -> usize {
        self.state.as_ref().map_or(0, SessionState::score)
    }

    /// Normalized root-word pool.
    #[must_use]
    pub fn pool(&self) -> &[String] {
        &self.pool
    }

    /// The rule engine this session drives.
    #[must_use]
    pub fn engine(&self) -> &ValidationEngine<D> {
        &self.engine
    }

    /// Capture round state and RNG position.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            state: self.state.clone(),
            rng: self.rng.state(),
        }
    }

    /// Replace round state and RNG position from a snapshot.
    ///
    /// The snapshot is validated first; on error the session is unchanged.
    pub fn restore(&mut self, snapshot: SessionSnapshot) -> Result<(), SessionError> {
        if let Some(state) = &snapshot.state {
            state.validate()?;
        }
        self.rng = GameRng::from_state(&snapshot.rng);
        self.state = snapshot.state;
        Ok(())
    }
}
