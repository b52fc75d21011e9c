//! The loadlens prediction service.
//!
//! A [`Predictor`] wraps an immutable [`ArtifactBundle`] loaded once at
//! startup and exposes a single pure operation:
//!
//! ```text
//! (category, method) ──encode──▶ [code, code] ──regressor──▶ 3 metrics
//!                                      │
//!                                      └──classifier──▶ code ──decode──▶ tool
//! ```
//!
//! Failures are typed: an unseen category or method is a
//! [`PredictError::UnknownValue`] the UI can phrase as user feedback, while
//! dimensional or decoding problems are [`PredictError::Model`] and point at
//! a broken bundle.
//!
//! # Example
//!
//! ```
//! use loadlens_artifacts::ArtifactBundle;
//! use loadlens_predict::Predictor;
//!
//! let predictor = Predictor::from_bundle(ArtifactBundle::sample()).unwrap();
//! let prediction = predictor.predict("Users", "GET").unwrap();
//! assert!(prediction.is_finite());
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod predictor;

pub use error::{PredictError, PredictResult};
pub use predictor::Predictor;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;
    use loadlens_artifacts::ArtifactBundle;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert_eq!(NAME, "loadlens-predict");
    }

    #[test]
    fn test_sample_bundle_loads() {
        let predictor = Predictor::from_bundle(ArtifactBundle::sample()).unwrap();
        assert!(predictor.bundle().validate().is_ok());
    }
}
