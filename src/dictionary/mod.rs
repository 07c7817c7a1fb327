//! Dictionary oracle: the external "is this a real word?" capability.
//!
//! The rule chain only ever sees a `bool`. Any internal failure of an oracle
//! (missing data, wrong language, a lookup that never returns) must surface
//! as `false`, which the engine reports as `NotInDictionary`.
//!
//! Implementations:
//! - `WordListDictionary`: in-memory hash set for one language
//! - `FnOracle`: adapts a closure
//! - `TimeoutOracle`: bounds a slow oracle with a deadline

pub mod timeout;
pub mod word_list;

pub use timeout::TimeoutOracle;
pub use word_list::WordListDictionary;

use std::sync::Arc;
use std::time::Duration;

/// Trait for dictionary lookups.
///
/// `word` is already normalized (trimmed, lowercase). `language` is the
/// session's fixed language tag.
pub trait DictionaryOracle {
    /// Check whether `word` is a recognized entry for `language`.
    fn is_valid(&self, word: &str, language: &str) -> bool;
}

impl<O: DictionaryOracle + ?Sized> DictionaryOracle for Arc<O> {
    fn is_valid(&self, word: &str, language: &str) -> bool {
        (**self).is_valid(word, language)
    }
}

impl<O: DictionaryOracle + ?Sized> DictionaryOracle for Box<O> {
    fn is_valid(&self, word: &str, language: &str) -> bool {
        (**self).is_valid(word, language)
    }
}

/// Type-erased oracle usable across threads.
pub type SharedOracle = Arc<dyn DictionaryOracle + Send + Sync>;

/// Wrap `oracle` in a `TimeoutOracle` when a deadline is configured.
///
/// ```
/// use std::time::Duration;
/// use word_scramble::dictionary::{bounded, DictionaryOracle, WordListDictionary};
///
/// let oracle = bounded(WordListDictionary::new("en", ["lines"]), Some(Duration::from_secs(1)));
/// assert!(oracle.is_valid("lines", "en"));
/// ```
pub fn bounded<O>(oracle: O, timeout: Option<Duration>) -> SharedOracle
where
    O: DictionaryOracle + Send + Sync + 'static,
{
    match timeout {
        Some(timeout) => Arc::new(TimeoutOracle::new(oracle, timeout)),
        None => Arc::new(oracle),
    }
}

/// Oracle backed by a closure.
///
/// ```
/// use word_scramble::dictionary::{DictionaryOracle, FnOracle};
///
/// let oracle = FnOracle::new(|word: &str, _lang: &str| word.ends_with('s'));
/// assert!(oracle.is_valid("lines", "en"));
/// assert!(!oracle.is_valid("silent", "en"));
/// ```
#[derive(Clone)]
pub struct FnOracle<F> {
    lookup: F,
}

impl<F> FnOracle<F>
where
    F: Fn(&str, &str) -> bool,
{
    /// Wrap a lookup function.
    pub fn new(lookup: F) -> Self {
        Self { lookup }
    }
}

impl<F> DictionaryOracle for FnOracle<F>
where
    F: Fn(&str, &str) -> bool,
{
    fn is_valid(&self, word: &str, language: &str) -> bool {
        (self.lookup)(word, language)
    }
}

impl<F> std::fmt::Debug for FnOracle<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnOracle").finish_non_exhaustive()
    }
}
