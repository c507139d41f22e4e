//! Error types for identifier construction, parsing, and comparison.

use thiserror::Error;

/// Errors that can occur when constructing or parsing identifiers.
///
/// Every variant names the identifier kind involved and, where there
/// was input text, echoes it verbatim so failures can be traced back
/// to the offending value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// A populated identifier was requested from the nil UUID.
    #[error("{kind} identifier cannot be created from the nil UUID")]
    NilUuid { kind: &'static str },

    /// The input text is not a syntactically valid UUID.
    #[error("'{input}' is not a valid {kind} identifier")]
    InvalidFormat { kind: &'static str, input: String },

    /// The input text is a valid UUID but denotes nil.
    ///
    /// Empty identifiers are only reached via the empty constant,
    /// never by parsing zero-text.
    #[error("'{input}' denotes the nil UUID and is not a valid {kind} identifier")]
    NilText { kind: &'static str, input: String },

    /// No input text was supplied at all.
    #[error("no text supplied for {kind} identifier")]
    Missing { kind: &'static str },

    /// A dynamic comparison paired identifiers of different kinds.
    #[error("cannot compare {expected} identifier with {actual} identifier")]
    KindMismatch {
        expected: &'static str,
        actual: &'static str,
    },
}

impl IdError {
    /// Returns true if this error rejected the nil UUID, whether it
    /// arrived as a raw value or as text.
    pub fn is_nil_rejection(&self) -> bool {
        matches!(self, IdError::NilUuid { .. } | IdError::NilText { .. })
    }

    /// The kind name the failing operation was targeting.
    pub fn kind(&self) -> &'static str {
        match self {
            IdError::NilUuid { kind }
            | IdError::InvalidFormat { kind, .. }
            | IdError::NilText { kind, .. }
            | IdError::Missing { kind } => kind,
            IdError::KindMismatch { expected, .. } => expected,
        }
    }
}
