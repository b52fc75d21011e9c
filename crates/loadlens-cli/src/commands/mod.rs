//! CLI command implementations.

mod inspect;
mod predict;
mod seed;

pub use inspect::InspectCommand;
pub use predict::PredictCommand;
pub use seed::{BundleFormat, SeedCommand};
