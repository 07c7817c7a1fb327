//! Deadline wrapper for oracles that may hang.
//!
//! Lookups are handed to one long-lived worker thread over a bounded queue.
//! If no answer arrives before the deadline the lookup reports `false`. While
//! the worker is stuck, at most one more lookup can wait in the queue; the
//! rest report `false` without blocking, so a hung backend holds one thread.

use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{self, RecvTimeoutError, SyncSender, TrySendError};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use super::DictionaryOracle;

/// Lookups that may wait behind the one the worker is running.
const QUEUE_DEPTH: usize = 1;

#[derive(Debug)]
struct Lookup {
    word: String,
    language: String,
    deadline: Instant,
    reply: SyncSender<bool>,
}

/// Oracle that gives up after a fixed duration.
#[derive(Debug)]
pub struct TimeoutOracle {
    requests: Option<SyncSender<Lookup>>,
    timeout: Duration,
}

impl TimeoutOracle {
    /// Wrap `inner`, bounding every lookup by `timeout`.
    pub fn new<O>(inner: O, timeout: Duration) -> Self
    where
        O: DictionaryOracle + Send + Sync + 'static,
    {
        Self::from_shared(Arc::new(inner), timeout)
    }

    /// Wrap an already shared oracle.
    ///
    /// If the worker thread can't be spawned every lookup reports `false`.
    pub fn from_shared<O>(inner: Arc<O>, timeout: Duration) -> Self
    where
        O: DictionaryOracle + Send + Sync + 'static,
    {
        let (tx, rx) = mpsc::sync_channel::<Lookup>(QUEUE_DEPTH);

        let spawned = thread::Builder::new()
            .name("dictionary-lookup".into())
            .spawn(move || {
                // Ends once the oracle and its queue are dropped.
                for lookup in rx {
                    if Instant::now() >= lookup.deadline {
                        continue;
                    }
                    let answer = panic::catch_unwind(AssertUnwindSafe(|| {
                        inner.is_valid(&lookup.word, &lookup.language)
                    }))
                    .unwrap_or_else(|_| {
                        tracing::warn!(word = %lookup.word, "dictionary backend panicked");
                        false
                    });
                    // Caller is gone if the deadline already passed.
                    let _ = lookup.reply.send(answer);
                }
            });

        let requests = match spawned {
            Ok(_) => Some(tx),
            Err(err) => {
                tracing::warn!(%err, "could not spawn dictionary worker");
                None
            }
        };

        Self { requests, timeout }
    }

    /// Configured deadline.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl DictionaryOracle for TimeoutOracle {
    fn is_valid(&self, word: &str, language: &str) -> bool {
        let Some(requests) = &self.requests else {
            return false;
        };

        let (reply, answer) = mpsc::sync_channel(1);
        let lookup = Lookup {
            word: word.to_owned(),
            language: language.to_owned(),
            deadline: Instant::now() + self.timeout,
            reply,
        };

        match requests.try_send(lookup) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                tracing::warn!(word, language, "dictionary backend busy");
                return false;
            }
            Err(TrySendError::Disconnected(_)) => {
                tracing::warn!(word, language, "dictionary worker stopped");
                return false;
            }
        }

        match answer.recv_timeout(self.timeout) {
            Ok(valid) => valid,
            Err(RecvTimeoutError::Timeout) => {
                tracing::warn!(
                    word,
                    language,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "dictionary lookup timed out"
                );
                false
            }
            Err(RecvTimeoutError::Disconnected) => {
                tracing::warn!(word, language, "dictionary lookup failed");
                false
            }
        }
    }
}
