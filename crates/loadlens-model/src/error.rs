//! Error types for model construction and invocation.

use thiserror::Error;

/// Result type alias for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors that can occur when building or invoking a model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A parameter array does not match the declared dimensions.
    #[error("Param {name:?} has len {len}, expected {expected} for shape {rows}x{cols}")]
    ShapeMismatch {
        /// Name of the offending parameter.
        name: &'static str,
        /// Actual array length.
        len: usize,
        /// Expected array length.
        expected: usize,
        /// Declared row count.
        rows: usize,
        /// Declared column count.
        cols: usize,
    },

    /// The input vector does not match the model's input dimension.
    #[error("Input has {got} features, model expects {expected}")]
    InputDimMismatch {
        /// Number of features supplied.
        got: usize,
        /// Input dimension the model was built with.
        expected: usize,
    },

    /// The model was declared with a zero-sized dimension.
    #[error("Model dimension must be non-zero: {0}")]
    ZeroDimension(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ModelError::InputDimMismatch { got: 3, expected: 2 };
        assert_eq!(err.to_string(), "Input has 3 features, model expects 2");

        let err = ModelError::ZeroDimension("output_dim");
        assert_eq!(err.to_string(), "Model dimension must be non-zero: output_dim");
    }
}
