//! lingrad: batch gradient descent for linear regression.
//!
//! Fits a linear model (bias + per-feature weights) to an in-memory tabular
//! dataset by full-batch gradient descent on mean squared error, recording a
//! per-epoch loss trace.
//!
//! # Key Types
//!
//! - [`LinearModel`] / [`Trainer`] - Model state and the epoch loop
//! - [`LinearConfig`] - Configuration builder
//! - [`Dataset`] - Feature matrix + target vector with validation
//! - [`Standardizer`] - Per-column zero-mean/unit-variance scaling
//! - [`LossTrace`] - Ordered history of per-epoch loss values
//!
//! # Training
//!
//! Build a [`LinearConfig`], create a [`LinearModel`] from it, then run
//! [`Trainer::train`]. See the [`training`] module for details.
//!
//! # Writing Results
//!
//! The [`io`] module writes loss traces and predictions as delimited text.

// Re-export approx traits for users who want to compare predictions
pub use approx;

pub mod data;
pub mod io;
pub mod model;
pub mod preprocessing;
pub mod testing;
pub mod training;

// =============================================================================
// Convenience Re-exports
// =============================================================================

// High-level model and configuration types
pub use model::{ConfigError, LinearConfig, LinearModel};

// Training types
pub use training::{LossTrace, Mse, TrainError, Trainer, Verbosity};

// Data types (for preparing training data)
pub use data::{Dataset, DatasetError};

// Preprocessing
pub use preprocessing::Standardizer;
