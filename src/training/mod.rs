//! Batch gradient descent training.
//!
//! [`Trainer`] runs the epoch loop: predict with the current parameters,
//! record mean squared error, accumulate the full-batch gradient, then apply
//! one parameter update. The loop always runs the configured number of
//! epochs; there is no convergence detection.

mod gradient;
mod logger;
mod loss;
mod trace;
mod trainer;

pub use gradient::GradientBuffer;
pub use logger::{TrainingLogger, Verbosity};
pub use loss::Mse;
pub use trace::{LossRecord, LossTrace};
pub use trainer::Trainer;

// =============================================================================
// TrainError
// =============================================================================

/// Errors raised before any training arithmetic runs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrainError {
    #[error("prediction/target length mismatch: {predictions} predictions vs {targets} targets")]
    DimensionMismatch { predictions: usize, targets: usize },

    #[error("model expects {model} features but dataset has {dataset}")]
    FeatureCountMismatch { model: usize, dataset: usize },
}
