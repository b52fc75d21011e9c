//! Fitted model types for loadlens inference.
//!
//! The prediction pipeline needs exactly two model families:
//!
//! - [`LinearRegressor`]: maps a feature vector to a vector of continuous
//!   performance metrics (`y = W x + b`).
//! - [`LinearClassifier`]: maps a feature vector to a discrete class code by
//!   scoring each class with a linear head and taking the highest score.
//!
//! Both hold flat `f32` parameter arrays in row-major layout and validate
//! their shapes at construction time, so a bundle with inconsistent
//! dimensions is rejected when it is loaded rather than failing mid-predict.
//! Inference is a handful of multiply-adds over two features; there is no
//! tensor backend behind these types.

#![warn(missing_docs)]

pub mod error;
pub mod linear;

pub use error::{ModelError, ModelResult};
pub use linear::{LinearClassifier, LinearRegressor};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
