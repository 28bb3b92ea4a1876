//! Loss computation.

use ndarray::ArrayView1;

use super::TrainError;

/// Mean squared error: `(1/m) * Σ (pred_i - target_i)²`.
///
/// The sum is accumulated in `f64` even though predictions and targets are
/// `f32`, so long traces do not drift.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mse;

impl Mse {
    /// Compute the loss over aligned prediction/target vectors.
    ///
    /// # Errors
    ///
    /// Returns [`TrainError::DimensionMismatch`] if the lengths differ; no
    /// arithmetic runs in that case. Empty inputs yield 0.0.
    pub fn compute(
        &self,
        predictions: ArrayView1<f32>,
        targets: ArrayView1<f32>,
    ) -> Result<f64, TrainError> {
        if predictions.len() != targets.len() {
            return Err(TrainError::DimensionMismatch {
                predictions: predictions.len(),
                targets: targets.len(),
            });
        }
        if predictions.is_empty() {
            return Ok(0.0);
        }

        let sum: f64 = predictions
            .iter()
            .zip(targets.iter())
            .map(|(&p, &t)| {
                let d = p as f64 - t as f64;
                d * d
            })
            .sum();

        Ok(sum / predictions.len() as f64)
    }

    /// Metric name for logging.
    #[inline]
    pub fn name(&self) -> &'static str {
        "mse"
    }
}
