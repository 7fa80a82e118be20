//! Error types for rank key generation.
//!
//! Generation is pure, so every failure is a property of the inputs: either
//! the two neighbors leave no room for a key between them, or one of them is
//! not a well-formed key. Neither is worth retrying with the same inputs.

use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, RankError>;

/// Structured errors for rank key operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankError {
    /// No key sorts strictly between the two neighbors.
    ///
    /// Raised when `prev >= next`, and also when `next` is `prev` followed
    /// only by `a` letters, since nothing over `a..=z` fits in that gap.
    #[error("no key sorts strictly between {prev:?} and {next:?}")]
    OrderingViolation { prev: Option<String>, next: String },

    /// A key contains a character outside `a..=z`.
    #[error("key {key:?} has {found:?} at byte {index}, only 'a'..='z' are allowed")]
    AlphabetViolation {
        key: String,
        index: usize,
        found: char,
    },
}

impl RankError {
    pub(crate) fn ordering(prev: Option<&str>, next: &str) -> RankError {
        return RankError::OrderingViolation {
            prev: prev.map(str::to_owned),
            next: next.to_owned(),
        };
    }

    /// Check if the neighbors were out of order or left no room.
    pub fn is_ordering_violation(&self) -> bool {
        return matches!(self, RankError::OrderingViolation { .. });
    }

    /// Check if a key was malformed.
    pub fn is_alphabet_violation(&self) -> bool {
        return matches!(self, RankError::AlphabetViolation { .. });
    }
}
