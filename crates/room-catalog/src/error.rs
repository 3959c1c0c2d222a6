//! Error types for the room-catalog crate.
//!
//! Catalogue queries never fail; the variants here cover record construction,
//! rate parsing, rejected writes against read-only snapshots, and report
//! rendering.

use thiserror::Error;

/// Errors raised while building rooms or touching read-only collections.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A write was attempted against a read-only snapshot.
    #[error("cannot {operation}: collection is read-only")]
    ReadOnly {
        /// Name of the rejected write operation.
        operation: &'static str,
    },

    /// A rate string could not be parsed as a non-negative decimal.
    #[error("invalid rate '{value}': {reason}")]
    InvalidRate {
        /// The rejected input.
        value: String,
        /// Why the input was rejected.
        reason: &'static str,
    },

    /// A room was declared with room for nobody.
    #[error("room capacity must be at least 1")]
    InvalidCapacity,

    /// A room name was empty or whitespace-only.
    #[error("room name must not be blank")]
    BlankName,

    /// A report could not be rendered as JSON.
    #[error("failed to serialize report: {message}")]
    Serialization {
        /// Description of the serializer failure.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::read_only(
        CatalogError::ReadOnly { operation: "push" },
        "cannot push: collection is read-only"
    )]
    #[case::invalid_rate(
        CatalogError::InvalidRate { value: "-1".to_owned(), reason: "rate must not be negative" },
        "invalid rate '-1': rate must not be negative"
    )]
    #[case::capacity(CatalogError::InvalidCapacity, "room capacity must be at least 1")]
    #[case::blank_name(CatalogError::BlankName, "room name must not be blank")]
    #[case::serialization(
        CatalogError::Serialization { message: "boom".to_owned() },
        "failed to serialize report: boom"
    )]
    fn formats_correctly(#[case] err: CatalogError, #[case] expected: &str) {
        assert_eq!(err.to_string(), expected);
    }
}
