//! Loadlens CLI library.
//!
//! This crate provides the command-line companion to the loadlens GUI:
//!
//! - **Seed**: write a sample artifact bundle to disk
//! - **Inspect**: print metadata and vocabularies of a bundle
//! - **Predict**: run a headless one-shot prediction
//!
//! # Example
//!
//! ```bash
//! # Write the sample bundle the GUI loads at startup
//! loadlens seed --out loadlens.artifacts
//!
//! # Look inside a bundle
//! loadlens inspect --bundle loadlens.artifacts
//!
//! # Predict without opening a window
//! loadlens predict --bundle loadlens.artifacts --category Users --method get
//! ```

#![warn(missing_docs)]

pub mod commands;

use clap::{Parser, Subcommand};

pub use commands::{InspectCommand, PredictCommand, SeedCommand};

/// Loadlens - predictive load-testing advisor tools
///
/// Seeds, inspects, and queries the artifact bundles consumed by the
/// loadlens desktop application.
#[derive(Parser, Debug)]
#[command(name = "loadlens")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a sample artifact bundle to disk
    Seed(SeedCommand),

    /// Print metadata and vocabularies of an artifact bundle
    Inspect(InspectCommand),

    /// Run a one-shot prediction without the GUI
    Predict(PredictCommand),
}
