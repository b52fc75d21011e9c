//! Artifact persistence for loadlens.
//!
//! A trained deployment of loadlens consists of five fitted objects: a
//! regression model, a classification model, and three label encoders. This
//! crate bundles them into a single [`ArtifactBundle`] and provides the
//! serialization formats and file I/O used to persist and load it.
//!
//! # Overview
//!
//! - [`ArtifactBundle`]: the five fitted objects plus format version and
//!   free-form metadata, validated for dimensional consistency at load.
//! - [`ArtifactSerializer`]: trait over byte-level encodings, with
//!   [`BincodeSerializer`] (fast binary) and [`JsonSerializer`]
//!   (human-readable) implementations.
//! - [`ArtifactWriter`] / [`ArtifactReader`]: file I/O with optional gzip
//!   compression.
//!
//! # Example
//!
//! ```no_run
//! use loadlens_artifacts::{
//!     ArtifactBundle, ArtifactReader, ArtifactWriter, BincodeSerializer,
//! };
//! use std::path::Path;
//!
//! fn main() -> loadlens_artifacts::Result<()> {
//!     let bundle = ArtifactBundle::sample();
//!
//!     let writer = ArtifactWriter::new(BincodeSerializer::new());
//!     writer.write_to_file(Path::new("loadlens.artifacts"), &bundle)?;
//!
//!     let reader = ArtifactReader::new(BincodeSerializer::new());
//!     let restored = reader.read_from_file(Path::new("loadlens.artifacts"))?;
//!     assert_eq!(restored.format_version, bundle.format_version);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

pub mod bundle;
pub mod serialization;

pub use bundle::{ArtifactBundle, BundleMetadata};
pub use serialization::{
    ArtifactReader, ArtifactSerializer, ArtifactWriter, BincodeSerializer, CompressionType,
    JsonSerializer,
};

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for artifact operations.
pub type Result<T> = std::result::Result<T, ArtifactError>;

/// Errors that can occur while persisting or loading artifacts.
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// The artifact file does not exist.
    #[error("Artifact bundle not found: {}", .0.display())]
    NotFound(PathBuf),

    /// An I/O operation failed.
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        /// Path involved in the failed operation.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization failed.
    #[error("JSON serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    /// JSON deserialization failed.
    #[error("JSON deserialization error: {0}")]
    Deserialization(#[source] serde_json::Error),

    /// The artifact data could not be decoded.
    #[error("Corrupted artifact bundle: {0}")]
    Corrupted(String),

    /// The bundle decoded but its contents are inconsistent.
    #[error("Invalid artifact bundle: {0}")]
    Invalid(String),
}

impl ArtifactError {
    /// Create an invalid-bundle error.
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::Invalid(msg.into())
    }

    /// Create a corrupted-bundle error.
    pub fn corrupted(msg: impl Into<String>) -> Self {
        Self::Corrupted(msg.into())
    }
}

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
        assert_eq!(NAME, "loadlens-artifacts");
    }

    #[test]
    fn test_error_display() {
        let err = ArtifactError::NotFound(PathBuf::from("/missing/bundle"));
        assert_eq!(err.to_string(), "Artifact bundle not found: /missing/bundle");

        let err = ArtifactError::corrupted("truncated header");
        assert_eq!(err.to_string(), "Corrupted artifact bundle: truncated header");
    }
}
