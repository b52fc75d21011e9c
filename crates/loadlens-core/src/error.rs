//! Error types for core encoding operations.

use thiserror::Error;

/// Result type alias for encoding operations.
pub type EncodeResult<T> = Result<T, EncodeError>;

/// Errors produced by [`crate::LabelEncoder`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The label was not part of the encoder's fitted vocabulary.
    #[error("Label {0:?} is not in the fitted vocabulary")]
    UnknownLabel(String),

    /// The integer code has no corresponding label.
    #[error("Code {code} is out of range for a vocabulary of {vocab_size} labels")]
    CodeOutOfRange {
        /// The offending code.
        code: i64,
        /// Size of the fitted vocabulary.
        vocab_size: usize,
    },

    /// The encoder was constructed with an empty vocabulary.
    #[error("Encoder vocabulary is empty")]
    EmptyVocabulary,
}

impl EncodeError {
    /// Create an unknown-label error.
    pub fn unknown(label: impl Into<String>) -> Self {
        Self::UnknownLabel(label.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EncodeError::unknown("Payments");
        assert_eq!(
            err.to_string(),
            "Label \"Payments\" is not in the fitted vocabulary"
        );

        let err = EncodeError::CodeOutOfRange {
            code: 7,
            vocab_size: 2,
        };
        assert_eq!(
            err.to_string(),
            "Code 7 is out of range for a vocabulary of 2 labels"
        );
    }
}
