//! Core domain types for the loadlens prediction pipeline.
//!
//! This crate defines the vocabulary shared by every other loadlens crate:
//!
//! - [`LabelEncoder`]: a fitted mapping between categorical strings and
//!   integer codes, used for the API category, the HTTP method, and the
//!   recommended-tool label.
//! - [`PredictionRequest`]: the normalized pair of user inputs.
//! - [`Prediction`]: the structured result produced by the prediction
//!   service (three performance metrics plus a recommended tool).
//! - [`ToolLabel`]: the closed set of tool labels the classifier can emit,
//!   with an exhaustive justification-text mapping.
//!
//! All types here are plain data: no I/O, no model math. Artifact
//! persistence lives in `loadlens-artifacts` and inference in
//! `loadlens-predict`.

#![warn(missing_docs)]

pub mod encoder;
pub mod error;
pub mod prediction;
pub mod tool;

pub use encoder::LabelEncoder;
pub use error::{EncodeError, EncodeResult};
pub use prediction::{feature_vector, Prediction, PredictionRequest};
pub use tool::ToolLabel;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert_eq!(NAME, "loadlens-core");
    }
}
