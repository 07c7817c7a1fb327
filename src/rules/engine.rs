//! Ordered rule chain for candidate words.
//!
//! Rules run strictly in this order and stop at the first failure:
//!
//! 1. `Length`: more than two characters
//! 2. `Novelty`: not already accepted this round
//! 3. `LetterSubset`: letters drawn from the root's letter multiset
//! 4. `Dictionary`: recognized by the oracle
//!
//! The order is part of the contract: a two-letter non-word is always
//! `TooShort`, a used word that isn't spellable from the root is always
//! `AlreadyUsed`. A candidate equal to the root passes `LetterSubset`.

use smallvec::SmallVec;

use super::verdict::{RejectReason, Verdict};
use crate::core::word::{letter_count, LetterCounts, UsedWords, MIN_WORD_LENGTH};
use crate::dictionary::DictionaryOracle;

/// One step of the rule chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Minimum length.
    Length,
    /// Not previously accepted.
    Novelty,
    /// Spellable from the root word's letters.
    LetterSubset,
    /// Recognized by the dictionary oracle.
    Dictionary,
}

impl Rule {
    /// Evaluation order.
    pub const CHAIN: [Rule; 4] = [
        Rule::Length,
        Rule::Novelty,
        Rule::LetterSubset,
        Rule::Dictionary,
    ];

    /// Reason reported when this rule fails.
    #[must_use]
    pub const fn reason(self) -> RejectReason {
        match self {
            Rule::Length => RejectReason::TooShort,
            Rule::Novelty => RejectReason::AlreadyUsed,
            Rule::LetterSubset => RejectReason::NotSubsetOfRoot,
            Rule::Dictionary => RejectReason::NotInDictionary,
        }
    }
}

/// Stateless rule evaluator.
///
/// Holds only the dictionary oracle and its language tag; every call reads
/// its three inputs and nothing else, so identical inputs give identical
/// verdicts (for a stable oracle).
///
/// ## Example
///
/// ```
/// use word_scramble::core::UsedWords;
/// use word_scramble::dictionary::WordListDictionary;
/// use word_scramble::rules::{RejectReason, ValidationEngine, Verdict};
///
/// let engine = ValidationEngine::new(WordListDictionary::new("en", ["lines"]), "en");
/// let used = UsedWords::new();
///
/// assert_eq!(engine.evaluate("lines", "listen", &used), Verdict::Accepted);
/// assert_eq!(
///     engine.evaluate("stinel", "listen", &used),
///     Verdict::Rejected(RejectReason::NotInDictionary),
/// );
/// ```
#[derive(Clone, Debug)]
pub struct ValidationEngine<D> {
    oracle: D,
    language: String,
}

impl<D: DictionaryOracle> ValidationEngine<D> {
    /// Create an engine that asks `oracle` about words in `language`.
    pub fn new(oracle: D, language: impl Into<String>) -> Self {
        Self {
            oracle,
            language: language.into(),
        }
    }

    /// Language tag passed to the oracle.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The dictionary oracle.
    #[must_use]
    pub fn oracle(&self) -> &D {
        &self.oracle
    }

    /// Run the rule chain, stopping at the first failure.
    ///
    /// `candidate` and `root` must already be normalized.
    #[must_use]
    pub fn evaluate(&self, candidate: &str, root: &str, used: &UsedWords) -> Verdict {
        for rule in Rule::CHAIN {
            if !self.check(rule, candidate, root, used) {
                tracing::debug!(candidate, ?rule, "rule failed");
                return Verdict::Rejected(rule.reason());
            }
        }
        Verdict::Accepted
    }

    /// Run every rule and report all failures, in chain order.
    ///
    /// The first entry always matches what `evaluate` reports. The oracle
    /// is not consulted for candidates that fail `Length`.
    #[must_use]
    pub fn diagnose(
        &self,
        candidate: &str,
        root: &str,
        used: &UsedWords,
    ) -> SmallVec<[RejectReason; 4]> {
        let too_short = !self.check(Rule::Length, candidate, root, used);
        Rule::CHAIN
            .into_iter()
            .filter(|&rule| match rule {
                Rule::Length => too_short,
                Rule::Dictionary if too_short => false,
                _ => !self.check(rule, candidate, root, used),
            })
            .map(Rule::reason)
            .collect()
    }

    /// Check a single rule.
    #[must_use]
    pub fn check(&self, rule: Rule, candidate: &str, root: &str, used: &UsedWords) -> bool {
        match rule {
            Rule::Length => letter_count(candidate) >= MIN_WORD_LENGTH,
            Rule::Novelty => !used.contains(candidate),
            Rule::LetterSubset => LetterCounts::of(root).can_spell(candidate),
            Rule::Dictionary => self.oracle.is_valid(candidate, &self.language),
        }
    }
}
