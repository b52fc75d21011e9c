//! Predict command implementation.

use anyhow::{Context, Result};
use clap::Args;
use loadlens_core::ToolLabel;
use loadlens_predict::Predictor;
use std::path::PathBuf;

/// Run a one-shot prediction without the GUI
///
/// Applies the same input rules as the desktop application: both values are
/// trimmed and the method is upper-cased before encoding.
///
/// # Example
///
/// ```bash
/// loadlens predict --bundle loadlens.artifacts --category Users --method get
/// ```
#[derive(Args, Debug, Clone)]
pub struct PredictCommand {
    /// Path to the artifact bundle
    #[arg(long, short = 'b')]
    pub bundle: PathBuf,

    /// API category, e.g. "Users"
    #[arg(long, short = 'c')]
    pub category: String,

    /// HTTP method, e.g. "GET"
    #[arg(long, short = 'm')]
    pub method: String,
}

impl PredictCommand {
    /// Execute the predict command.
    pub fn run(&self) -> Result<()> {
        let predictor = Predictor::load(&self.bundle)
            .with_context(|| format!("failed to load bundle {}", self.bundle.display()))?;

        let prediction = predictor
            .predict(&self.category, &self.method)
            .context("prediction failed")?;
        let tool = ToolLabel::from_name(&prediction.recommended_tool);

        println!("Prediction for ({}, {}):", self.category.trim(), self.method.trim());
        println!("  Response Time: {}", prediction.response_time_text());
        println!("  Error Rate:    {}", prediction.error_rate_text());
        println!("  Throughput:    {}", prediction.throughput_text());
        println!("  Recommended Tool: {tool}");
        println!("  {}", tool.justification());
        Ok(())
    }
}
