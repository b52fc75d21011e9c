//! Seed command implementation.
//!
//! Writes the hand-specified sample bundle to disk. This is not training;
//! the weights are fixed demonstration values (see
//! `ArtifactBundle::sample`).

use anyhow::{Context, Result};
use clap::Args;
use loadlens_artifacts::{
    ArtifactBundle, ArtifactWriter, BincodeSerializer, CompressionType, JsonSerializer,
};
use std::path::PathBuf;
use tracing::info;

/// On-disk encoding for the bundle.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum BundleFormat {
    /// Compact binary format (what the GUI loads by default)
    #[default]
    Bincode,
    /// Human-readable JSON
    Json,
}

impl std::fmt::Display for BundleFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BundleFormat::Bincode => write!(f, "bincode"),
            BundleFormat::Json => write!(f, "json"),
        }
    }
}

/// Write a sample artifact bundle to disk
#[derive(Args, Debug, Clone)]
pub struct SeedCommand {
    /// Output path for the bundle
    #[arg(long, short = 'o', default_value = "loadlens.artifacts")]
    pub out: PathBuf,

    /// Serialization format
    #[arg(long, short = 'f', default_value = "bincode")]
    pub format: BundleFormat,

    /// Gzip-compress the output
    #[arg(long)]
    pub gzip: bool,
}

impl SeedCommand {
    /// Execute the seed command.
    pub fn run(&self) -> Result<()> {
        info!("Seeding sample bundle to {:?} ({})", self.out, self.format);

        let bundle = ArtifactBundle::sample();
        let compression = if self.gzip {
            CompressionType::Gzip
        } else {
            CompressionType::None
        };

        match self.format {
            BundleFormat::Bincode => ArtifactWriter::new(BincodeSerializer::new())
                .with_compression(compression)
                .write_to_file(&self.out, &bundle),
            BundleFormat::Json => ArtifactWriter::new(JsonSerializer::pretty())
                .with_compression(compression)
                .write_to_file(&self.out, &bundle),
        }
        .with_context(|| format!("failed to write bundle to {}", self.out.display()))?;

        println!("Wrote sample bundle: {}", self.out.display());
        println!(
            "  categories: {} | methods: {} | tools: {}",
            bundle.category_encoder.len(),
            bundle.method_encoder.len(),
            bundle.tool_encoder.len()
        );
        Ok(())
    }
}
