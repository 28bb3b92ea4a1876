//! Reusable gradient accumulator.

use ndarray::ArrayView1;

/// Fixed-size gradient buffer for one parameter vector.
///
/// Length is `n_features + 1` with the bias gradient at index 0, matching the
/// parameter layout of the model. Sums are kept in `f64` to limit drift over
/// large batches; the buffer is reset and refilled every epoch instead of
/// reallocated.
#[derive(Debug, Clone)]
pub struct GradientBuffer {
    values: Vec<f64>,
}

impl GradientBuffer {
    /// Create a zeroed buffer for a model with `n_features` inputs.
    pub fn new(n_features: usize) -> Self {
        assert!(n_features > 0, "n_features must be > 0");
        Self {
            values: vec![0.0; n_features + 1],
        }
    }

    /// Zero all accumulated values.
    pub fn reset(&mut self) {
        self.values.fill(0.0);
    }

    /// Add one sample's contribution.
    ///
    /// For residual `r = pred - target` and feature row `x`, adds `r` to the
    /// bias slot and `r * x[j]` to each weight slot.
    pub fn accumulate(&mut self, residual: f64, row: ArrayView1<f32>) {
        debug_assert_eq!(row.len() + 1, self.values.len());

        self.values[0] += residual;
        for (j, &x) in row.iter().enumerate() {
            self.values[j + 1] += residual * x as f64;
        }
    }

    /// Accumulated gradient, index-aligned with the parameter vector.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}
