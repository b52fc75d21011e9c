//! Loadlens desktop application.
//!
//! Loads the artifact bundle once at startup and runs the egui event loop.
//! A missing or incompatible bundle terminates the process before any
//! window opens; run `loadlens seed` to create the sample bundle.

mod app;
mod chart;

use app::LoadlensApp;
use loadlens_predict::Predictor;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Fixed artifact path, resolved relative to the working directory.
const BUNDLE_PATH: &str = "loadlens.artifacts";

fn main() -> eframe::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::from_default_env()
                .add_directive("loadlens=info".parse().expect("static directive parses")),
        )
        .init();

    let predictor = match Predictor::load(BUNDLE_PATH) {
        Ok(predictor) => predictor,
        Err(e) => {
            eprintln!("Error loading artifacts from {BUNDLE_PATH}: {e}");
            eprintln!("Run `loadlens seed` to create the sample bundle.");
            std::process::exit(2);
        }
    };

    let native_options = eframe::NativeOptions::default();
    eframe::run_native(
        "API Load Tester & Tool Recommender",
        native_options,
        Box::new(|_cc| Ok(Box::new(LoadlensApp::new(predictor)))),
    )
}
