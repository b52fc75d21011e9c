//! Artifact serialization formats and file I/O.
//!
//! Two encodings are supported: [`BincodeSerializer`] for the compact binary
//! format the GUI loads by default, and [`JsonSerializer`] for a
//! human-readable format useful when inspecting a bundle by hand. Files can
//! optionally be gzip-compressed on both the write and read side.

use crate::bundle::ArtifactBundle;
use crate::{ArtifactError, Result};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::{Read, Write};
use std::path::Path;

/// Trait for bundle serialization.
pub trait ArtifactSerializer: Send + Sync {
    /// Serialize a bundle to bytes.
    fn serialize(&self, bundle: &ArtifactBundle) -> Result<Vec<u8>>;

    /// Deserialize a bundle from bytes.
    fn deserialize(&self, data: &[u8]) -> Result<ArtifactBundle>;
}

/// Bincode serializer for the fast binary artifact format.
#[derive(Debug, Clone, Default)]
pub struct BincodeSerializer;

impl BincodeSerializer {
    /// Create a new bincode serializer.
    pub fn new() -> Self {
        Self
    }
}

impl ArtifactSerializer for BincodeSerializer {
    fn serialize(&self, bundle: &ArtifactBundle) -> Result<Vec<u8>> {
        bincode::serialize(bundle).map_err(|e| {
            ArtifactError::corrupted(format!("Bincode serialization failed: {e}"))
        })
    }

    fn deserialize(&self, data: &[u8]) -> Result<ArtifactBundle> {
        bincode::deserialize(data).map_err(|e| {
            ArtifactError::corrupted(format!("Bincode deserialization failed: {e}"))
        })
    }
}

/// JSON serializer for a human-readable artifact format.
#[derive(Debug, Clone, Default)]
pub struct JsonSerializer {
    /// Whether to pretty-print the JSON output.
    pretty: bool,
}

impl JsonSerializer {
    /// Create a new JSON serializer.
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Create a JSON serializer with pretty-printing enabled.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl ArtifactSerializer for JsonSerializer {
    fn serialize(&self, bundle: &ArtifactBundle) -> Result<Vec<u8>> {
        let result = if self.pretty {
            serde_json::to_vec_pretty(bundle)
        } else {
            serde_json::to_vec(bundle)
        };
        result.map_err(ArtifactError::Serialization)
    }

    fn deserialize(&self, data: &[u8]) -> Result<ArtifactBundle> {
        serde_json::from_slice(data).map_err(ArtifactError::Deserialization)
    }
}

/// Compression applied to artifact files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompressionType {
    /// No compression.
    #[default]
    None,
    /// Gzip compression at the default level.
    Gzip,
}

impl CompressionType {
    fn level(&self) -> Compression {
        match self {
            CompressionType::None => Compression::none(),
            CompressionType::Gzip => Compression::default(),
        }
    }

    /// Check if compression is enabled.
    pub fn is_compressed(&self) -> bool {
        !matches!(self, CompressionType::None)
    }
}

/// Writer for artifact files.
pub struct ArtifactWriter<S: ArtifactSerializer> {
    serializer: S,
    compression: CompressionType,
}

impl<S: ArtifactSerializer> ArtifactWriter<S> {
    /// Create a new writer with the given serializer.
    pub fn new(serializer: S) -> Self {
        Self {
            serializer,
            compression: CompressionType::None,
        }
    }

    /// Set the compression type for writing.
    pub fn with_compression(mut self, compression: CompressionType) -> Self {
        self.compression = compression;
        self
    }

    /// Write a bundle to a file.
    ///
    /// The bundle is validated before anything touches the filesystem.
    pub fn write_to_file(&self, path: &Path, bundle: &ArtifactBundle) -> Result<()> {
        bundle.validate()?;

        tracing::info!(
            path = %path.display(),
            compression = ?self.compression,
            "Writing artifact bundle"
        );

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| ArtifactError::Io {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let data = self.serializer.serialize(bundle)?;

        let final_data = if self.compression.is_compressed() {
            let mut encoder = GzEncoder::new(Vec::new(), self.compression.level());
            encoder.write_all(&data).map_err(|e| ArtifactError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;
            encoder.finish().map_err(|e| ArtifactError::Io {
                path: path.to_path_buf(),
                source: e,
            })?
        } else {
            data
        };

        std::fs::write(path, &final_data).map_err(|e| ArtifactError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        tracing::debug!(
            path = %path.display(),
            size = final_data.len(),
            "Artifact bundle written"
        );

        Ok(())
    }
}

/// Reader for artifact files.
pub struct ArtifactReader<S: ArtifactSerializer> {
    serializer: S,
    compression: CompressionType,
}

impl<S: ArtifactSerializer> ArtifactReader<S> {
    /// Create a new reader with the given serializer.
    pub fn new(serializer: S) -> Self {
        Self {
            serializer,
            compression: CompressionType::None,
        }
    }

    /// Set the compression type for reading.
    pub fn with_compression(mut self, compression: CompressionType) -> Self {
        self.compression = compression;
        self
    }

    /// Read and validate a bundle from a file.
    ///
    /// # Errors
    ///
    /// Returns [`ArtifactError::NotFound`] for a missing path,
    /// [`ArtifactError::Corrupted`] / [`ArtifactError::Deserialization`]
    /// when decoding fails, and [`ArtifactError::Invalid`] when the decoded
    /// bundle is dimensionally inconsistent.
    pub fn read_from_file(&self, path: &Path) -> Result<ArtifactBundle> {
        tracing::info!(path = %path.display(), "Reading artifact bundle");

        if !path.exists() {
            return Err(ArtifactError::NotFound(path.to_path_buf()));
        }

        let raw_data = std::fs::read(path).map_err(|e| ArtifactError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let data = if self.compression.is_compressed() {
            let mut decoder = GzDecoder::new(&raw_data[..]);
            let mut decompressed = Vec::new();
            decoder
                .read_to_end(&mut decompressed)
                .map_err(|e| ArtifactError::Io {
                    path: path.to_path_buf(),
                    source: e,
                })?;
            decompressed
        } else {
            raw_data
        };

        let bundle = self.serializer.deserialize(&data)?;
        bundle.validate()?;

        tracing::info!(
            path = %path.display(),
            format_version = bundle.format_version,
            categories = bundle.category_encoder.len(),
            methods = bundle.method_encoder.len(),
            tools = bundle.tool_encoder.len(),
            "Artifact bundle loaded"
        );

        Ok(bundle)
    }
}
