//! The error taxonomy shared by every engine in the crate.
//!
//! A single flat [`CollectionError`] enum replaces the source runtime's
//! class hierarchy: each variant is one error kind, carrying enough context
//! (offending value, valid bounds, length at failure time) to reconstruct a
//! diagnostic message.  Errors are terminal for the call that produced them;
//! nothing in this crate retries or recovers internally, and no operation
//! mutates structure after failing validation.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CollectionError>;

/// Every failure a collection operation can surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// An index argument was outside `0..length`.
    ///
    /// `length` is the indexable's length at the time of the failure, so the
    /// message stays accurate even when the collection has since changed.
    #[error("index out of range: {index} not in 0..{length}")]
    IndexOutOfRange { index: usize, length: usize },

    /// A range argument violated `0 <= start <= end <= length`.
    #[error("invalid range: {start}..{end} not within 0..{length}")]
    InvalidRange {
        start: usize,
        end: usize,
        length: usize,
    },

    /// A supplied value was invalid for a reason other than range.
    #[error("invalid argument `{name}`: {message}")]
    InvalidArgument {
        name: &'static str,
        message: String,
    },

    /// The operation needed at least one element and found none.
    #[error("bad state: no element")]
    NoElement,

    /// The operation needed exactly one element and found several.
    #[error("bad state: too many elements")]
    TooManyElements,

    /// Structural mutation was attempted on a fixed-length or unmodifiable
    /// structure.
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),

    /// A structural change to the backing collection was detected while an
    /// iterator derived from it was still stepping.
    #[error("concurrent modification during iteration")]
    ConcurrentModification,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_context() {
        let err = CollectionError::IndexOutOfRange {
            index: 7,
            length: 3,
        };
        assert_eq!(err.to_string(), "index out of range: 7 not in 0..3");

        let err = CollectionError::InvalidRange {
            start: 1,
            end: 5,
            length: 3,
        };
        assert_eq!(err.to_string(), "invalid range: 1..5 not within 0..3");

        let err = CollectionError::Unsupported("add on a non-growable list");
        assert_eq!(
            err.to_string(),
            "unsupported operation: add on a non-growable list"
        );
    }

    #[test]
    fn test_errors_are_comparable_values() {
        assert_eq!(
            CollectionError::ConcurrentModification,
            CollectionError::ConcurrentModification
        );
        assert_ne!(
            CollectionError::NoElement,
            CollectionError::TooManyElements
        );
    }
}
