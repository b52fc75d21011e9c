//! Inspect command implementation.

use anyhow::{Context, Result};
use clap::Args;
use loadlens_predict::Predictor;
use std::path::PathBuf;

/// Print metadata and vocabularies of an artifact bundle
///
/// The serialization format and compression are inferred from the file
/// name, the same way the GUI does at startup.
#[derive(Args, Debug, Clone)]
pub struct InspectCommand {
    /// Path to the artifact bundle
    #[arg(long, short = 'b')]
    pub bundle: PathBuf,
}

impl InspectCommand {
    /// Execute the inspect command.
    pub fn run(&self) -> Result<()> {
        let predictor = Predictor::load(&self.bundle)
            .with_context(|| format!("failed to load bundle {}", self.bundle.display()))?;
        let bundle = predictor.bundle();

        println!("Bundle: {}", self.bundle.display());
        println!("  format version: {}", bundle.format_version);
        println!("  name: {}", bundle.metadata.name);
        if !bundle.metadata.description.is_empty() {
            println!("  description: {}", bundle.metadata.description);
        }
        for (key, value) in &bundle.metadata.custom {
            println!("  {key}: {value}");
        }
        println!("  categories ({}):", bundle.category_encoder.len());
        for class in bundle.category_encoder.classes() {
            println!("    {class}");
        }
        println!("  methods ({}):", bundle.method_encoder.len());
        for class in bundle.method_encoder.classes() {
            println!("    {class}");
        }
        println!("  tools ({}):", bundle.tool_encoder.len());
        for class in bundle.tool_encoder.classes() {
            println!("    {class}");
        }
        Ok(())
    }
}
