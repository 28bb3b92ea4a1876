//! The batch gradient descent epoch loop.

use crate::data::Dataset;
use crate::model::{LinearConfig, LinearModel};

use super::{GradientBuffer, LossTrace, Mse, TrainError, TrainingLogger, Verbosity};

// =============================================================================
// Trainer
// =============================================================================

/// Runs full-batch gradient descent on mean squared error.
///
/// The trainer itself holds only observation settings (verbosity, logging
/// cadence); the hyperparameters live on the [`LinearModel`]. Each epoch
/// predicts with the pre-update parameters, records the loss, accumulates the
/// full gradient, then applies a single update. Iteration order is fixed, so
/// identical inputs always produce identical traces and parameters.
///
/// # Example
///
/// ```
/// use lingrad::{Dataset, LinearModel, Trainer};
///
/// let rows = vec![vec![1.0], vec![2.0], vec![3.0]];
/// let data = Dataset::from_rows(&rows, &[2.0, 4.0, 6.0]).unwrap();
///
/// let mut model = LinearModel::new(100, 0.05, data.n_features());
/// let trace = Trainer::default().train(&mut model, &data).unwrap();
///
/// assert_eq!(trace.len(), 100);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Trainer {
    verbosity: Verbosity,
    log_every: u32,
}

impl Trainer {
    pub fn new(verbosity: Verbosity, log_every: u32) -> Self {
        Self {
            verbosity,
            log_every,
        }
    }

    /// Take observation settings from a validated config.
    pub fn from_config(config: &LinearConfig) -> Self {
        Self::new(config.verbosity, config.log_every)
    }

    /// Train the model in place, returning the per-epoch loss trace.
    ///
    /// Runs exactly `model.n_epochs()` epochs; zero epochs returns an empty
    /// trace and leaves the parameters untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TrainError::FeatureCountMismatch`] if the model and dataset
    /// disagree on feature count, before any epoch runs.
    pub fn train(&self, model: &mut LinearModel, data: &Dataset) -> Result<LossTrace, TrainError> {
        if model.n_features() != data.n_features() {
            return Err(TrainError::FeatureCountMismatch {
                model: model.n_features(),
                dataset: data.n_features(),
            });
        }

        let m = data.n_samples();
        let loss_fn = Mse;
        let mut gradient = GradientBuffer::new(model.n_features());
        let mut trace = LossTrace::with_capacity(model.n_epochs() as usize);
        let logger = TrainingLogger::new(self.verbosity, self.log_every);

        logger.start_training(model.n_epochs());

        // The 2 comes from d/dθ of the squared error.
        let step = model.learning_rate() as f64 * 2.0 / m as f64;

        for epoch in 0..model.n_epochs() {
            // Predictions come from the pre-update parameters; the recorded
            // loss must match what this epoch's gradient is computed against.
            let predictions = model.predict_batch(data.features());
            let loss = loss_fn.compute(predictions.view(), data.targets())?;
            trace.record(epoch, loss);
            logger.log_epoch(epoch, loss);

            gradient.reset();
            for (row, (&pred, &target)) in data
                .features()
                .rows()
                .into_iter()
                .zip(predictions.iter().zip(data.targets().iter()))
            {
                gradient.accumulate((pred - target) as f64, row);
            }

            model.apply_gradient(gradient.values(), step);
        }

        logger.finish_training(&trace);
        Ok(trace)
    }
}

impl Default for Trainer {
    fn default() -> Self {
        Self::new(Verbosity::Silent, 100)
    }
}
