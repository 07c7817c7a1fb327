//! Word validation rules.
//!
//! `ValidationEngine` decides whether a normalized candidate is acceptable
//! for a given root word and used-word list. It has no side effects; the
//! session applies its verdicts.

pub mod engine;
pub mod verdict;

pub use engine::{Rule, ValidationEngine};
pub use verdict::{RejectReason, Verdict};
