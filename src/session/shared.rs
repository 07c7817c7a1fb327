//! Thread-safe handle to a session.
//!
//! Every operation takes the session lock for its whole duration, so one
//! submission is fully evaluated and committed before the next begins and
//! the score never drifts from the used-word list.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::core::error::SessionError;
use crate::dictionary::DictionaryOracle;
use crate::rules::Verdict;

use super::game::GameSession;
use super::state::SessionSnapshot;

/// Cloneable, lock-serialized `GameSession`.
#[derive(Debug)]
pub struct SharedSession<D> {
    inner: Arc<Mutex<GameSession<D>>>,
}

impl<D> Clone for SharedSession<D> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<D: DictionaryOracle> SharedSession<D> {
    /// Take ownership of a session.
    pub fn new(session: GameSession<D>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    // Operations never leave a half-committed session; a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, GameSession<D>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// See [`GameSession::submit`].
    pub fn submit(&self, raw: &str) -> Result<Verdict, SessionError> {
        self.lock().submit(raw)
    }

    /// See [`GameSession::start_new_game`]. Returns the new root word.
    pub fn start_new_game(&self) -> Result<String, SessionError> {
        self.lock().start_new_game().map(str::to_string)
    }

    /// Current root word.
    #[must_use]
    pub fn root(&self) -> Option<String> {
        self.lock().root().map(str::to_string)
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> usize {
        self.lock().score()
    }

    /// Accepted words, most recent first.
    #[must_use]
    pub fn used_words(&self) -> Vec<String> {
        self.lock().used_words()
    }

    /// Consistent checkpoint of the whole session.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.lock().snapshot()
    }

    /// Run `f` with exclusive access to the session.
    pub fn with_session<R>(&self, f: impl FnOnce(&mut GameSession<D>) -> R) -> R {
        f(&mut self.lock())
    }
}
