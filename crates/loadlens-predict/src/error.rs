//! Error types for the prediction service.

use loadlens_artifacts::ArtifactError;
use thiserror::Error;

/// Result type alias for prediction operations.
pub type PredictResult<T> = Result<T, PredictError>;

/// Errors that can occur while making a prediction.
///
/// Input problems (empty or unseen values) are kept apart from model
/// failures so callers can react differently: the GUI phrases the former as
/// guidance about what to type and the latter as an internal fault.
#[derive(Debug, Error)]
pub enum PredictError {
    /// An input field was empty after trimming.
    #[error("Please enter a value for {field}")]
    EmptyInput {
        /// Which input was empty ("category" or "method").
        field: &'static str,
    },

    /// The input value is not part of the trained vocabulary.
    #[error("Unknown {field} {value:?}: not part of the trained vocabulary")]
    UnknownValue {
        /// Which input was unseen ("category" or "method").
        field: &'static str,
        /// The offending value.
        value: String,
    },

    /// Model invocation or label decoding failed.
    #[error("Model invocation failed: {0}")]
    Model(String),

    /// Loading the artifact bundle failed.
    #[error(transparent)]
    Artifact(#[from] ArtifactError),
}

impl PredictError {
    /// Create an empty-input error.
    pub fn empty(field: &'static str) -> Self {
        Self::EmptyInput { field }
    }

    /// Create an unknown-value error.
    pub fn unknown(field: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownValue {
            field,
            value: value.into(),
        }
    }

    /// Create a model-failure error.
    pub fn model(msg: impl Into<String>) -> Self {
        Self::Model(msg.into())
    }

    /// Check if this error was caused by user input rather than the
    /// pipeline itself.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::EmptyInput { .. } | Self::UnknownValue { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PredictError::empty("category");
        assert_eq!(err.to_string(), "Please enter a value for category");

        let err = PredictError::unknown("method", "PATCH");
        assert_eq!(
            err.to_string(),
            "Unknown method \"PATCH\": not part of the trained vocabulary"
        );
    }

    #[test]
    fn test_is_input_error() {
        assert!(PredictError::empty("method").is_input_error());
        assert!(PredictError::unknown("category", "Payments").is_input_error());
        assert!(!PredictError::model("shape mismatch").is_input_error());
    }
}
