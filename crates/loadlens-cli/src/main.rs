//! Loadlens CLI - seed, inspect, and query artifact bundles.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use loadlens_cli::{Cli, Commands};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("loadlens=info".parse()?))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Seed(cmd) => cmd.run()?,
        Commands::Inspect(cmd) => cmd.run()?,
        Commands::Predict(cmd) => cmd.run()?,
    }

    Ok(())
}
