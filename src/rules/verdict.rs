//! Outcome of evaluating a candidate word.

use serde::{Deserialize, Serialize};

/// Why a candidate was rejected.
///
/// Codes are stable so a presentation layer can map them 1:1 to messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// Fewer than three characters.
    TooShort,
    /// Already accepted this round.
    AlreadyUsed,
    /// Uses a letter (or more copies of one) the root word doesn't have.
    NotSubsetOfRoot,
    /// The dictionary oracle didn't recognize it, or couldn't answer.
    NotInDictionary,
}

impl RejectReason {
    /// All reasons, in rule-chain order.
    pub const ALL: [RejectReason; 4] = [
        RejectReason::TooShort,
        RejectReason::AlreadyUsed,
        RejectReason::NotSubsetOfRoot,
        RejectReason::NotInDictionary,
    ];

    /// Stable machine-readable code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            RejectReason::TooShort => "too_short",
            RejectReason::AlreadyUsed => "already_used",
            RejectReason::NotSubsetOfRoot => "not_subset_of_root",
            RejectReason::NotInDictionary => "not_in_dictionary",
        }
    }

    /// Short alert title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            RejectReason::TooShort => "Keep Going!",
            RejectReason::AlreadyUsed => "Whoops",
            RejectReason::NotSubsetOfRoot => "Nope!",
            RejectReason::NotInDictionary => "Sorry!",
        }
    }

    /// Player-facing explanation.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            RejectReason::TooShort => "Your word must be at least 3 characters",
            RejectReason::AlreadyUsed => "You already used this word!",
            RejectReason::NotSubsetOfRoot => "Some of your letters are not in the root word.",
            RejectReason::NotInDictionary => "That word is not in our dictionary. Try another!",
        }
    }
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Result of running the rule chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// Every rule passed.
    Accepted,
    /// The first failing rule.
    Rejected(RejectReason),
}

impl Verdict {
    /// Check if the candidate was accepted.
    #[must_use]
    pub fn is_accepted(self) -> bool {
        matches!(self, Verdict::Accepted)
    }

    /// Rejection reason, if any.
    #[must_use]
    pub fn reason(self) -> Option<RejectReason> {
        match self {
            Verdict::Accepted => None,
            Verdict::Rejected(reason) => Some(reason),
        }
    }
}

impl From<RejectReason> for Verdict {
    fn from(reason: RejectReason) -> Self {
        Verdict::Rejected(reason)
    }
}
