//! Linear model: a bias plus one weight per feature.

use ndarray::{Array1, ArrayView1, ArrayView2};

use super::LinearConfig;

// =============================================================================
// LinearModel
// =============================================================================

/// Linear regression model trained by batch gradient descent.
///
/// Parameters are stored as a single vector of length `n_features + 1` with
/// the bias at index 0 and the weight for feature `j` at index `j + 1`. The
/// learning rate and epoch count travel with the model so a trainer needs no
/// extra hyperparameter plumbing.
///
/// # Example
///
/// ```
/// use lingrad::LinearModel;
/// use ndarray::array;
///
/// let model = LinearModel::new(3000, 0.01, 2);
/// assert_eq!(model.bias(), 0.0);
/// assert_eq!(model.predict_row(array![1.0, 2.0].view()), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct LinearModel {
    /// `[bias, w_0, w_1, ..., w_{n-1}]`
    theta: Array1<f32>,
    learning_rate: f32,
    n_epochs: u32,
}

impl LinearModel {
    /// Create a model with zero-initialized parameters.
    ///
    /// Allocates `n_features + 1` parameters. Like all heap allocation in
    /// this crate, failure aborts the process via the global allocator.
    pub fn new(n_epochs: u32, learning_rate: f32, n_features: usize) -> Self {
        Self {
            theta: Array1::zeros(n_features + 1),
            learning_rate,
            n_epochs,
        }
    }

    /// Create a model from a validated configuration.
    pub fn from_config(config: &LinearConfig, n_features: usize) -> Self {
        Self::new(config.n_epochs, config.learning_rate, n_features)
    }

    /// Predict a single row: `bias + Σ_j weight_j * row[j]`.
    pub fn predict_row(&self, row: ArrayView1<f32>) -> f32 {
        debug_assert_eq!(row.len(), self.n_features());

        let mut acc = self.theta[0];
        for (j, &x) in row.iter().enumerate() {
            acc += self.theta[j + 1] * x;
        }
        acc
    }

    /// Predict every row of a feature matrix, preserving row order.
    pub fn predict_batch(&self, features: ArrayView2<f32>) -> Array1<f32> {
        let mut out = Array1::zeros(features.nrows());
        for (i, row) in features.rows().into_iter().enumerate() {
            out[i] = self.predict_row(row);
        }
        out
    }

    /// Apply one gradient descent step: `theta[k] -= scale * gradient[k]`.
    ///
    /// `gradient` must have length `n_features + 1`, index-aligned with the
    /// parameter vector.
    pub fn apply_gradient(&mut self, gradient: &[f64], scale: f64) {
        debug_assert_eq!(gradient.len(), self.theta.len());

        for (param, &g) in self.theta.iter_mut().zip(gradient) {
            *param = (*param as f64 - scale * g) as f32;
        }
    }

    /// Bias term (parameter index 0).
    #[inline]
    pub fn bias(&self) -> f32 {
        self.theta[0]
    }

    /// Weight for feature `j`.
    #[inline]
    pub fn weight(&self, j: usize) -> f32 {
        self.theta[j + 1]
    }

    /// Full parameter vector: `[bias, w_0, ..., w_{n-1}]`.
    #[inline]
    pub fn parameters(&self) -> ArrayView1<'_, f32> {
        self.theta.view()
    }

    /// Number of input features this model accepts.
    #[inline]
    pub fn n_features(&self) -> usize {
        self.theta.len() - 1
    }

    /// Learning rate used by the trainer.
    #[inline]
    pub fn learning_rate(&self) -> f32 {
        self.learning_rate
    }

    /// Number of epochs the trainer will run.
    #[inline]
    pub fn n_epochs(&self) -> u32 {
        self.n_epochs
    }
}
