//! Feature preprocessing.
//!
//! [`Standardizer`] rescales each feature column to zero mean and unit
//! variance. Statistics are fitted once and applied in place, so the same
//! scaling can be reused on held-out rows.

use ndarray::{ArrayView2, ArrayViewMut2};

// =============================================================================
// Standardizer
// =============================================================================

/// Per-column standardization: `(value - mean) / std`.
///
/// Uses the population standard deviation (divide by m). Columns with zero
/// spread get a substitute std of 1.0, which maps every entry to zero rather
/// than dividing by zero.
///
/// # Example
///
/// ```
/// use lingrad::{Dataset, Standardizer};
///
/// let rows = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
/// let mut dataset = Dataset::from_rows(&rows, &[1.0, 2.0]).unwrap();
///
/// let scaler = Standardizer::fit_transform(dataset.features_mut());
/// assert_eq!(scaler.means(), &[2.0, 3.0]);
/// ```
#[derive(Debug, Clone)]
pub struct Standardizer {
    means: Vec<f32>,
    stds: Vec<f32>,
}

impl Standardizer {
    /// Compute column means and standard deviations.
    pub fn fit(features: ArrayView2<f32>) -> Self {
        let m = features.nrows();
        let n = features.ncols();
        let mut means = Vec::with_capacity(n);
        let mut stds = Vec::with_capacity(n);

        for column in features.columns() {
            // Accumulate in f64; the stored statistics stay f32 like the data.
            let mean = column.iter().map(|&v| v as f64).sum::<f64>() / m as f64;
            let var = column
                .iter()
                .map(|&v| {
                    let d = v as f64 - mean;
                    d * d
                })
                .sum::<f64>()
                / m as f64;
            let std = var.sqrt();

            means.push(mean as f32);
            stds.push(if std == 0.0 { 1.0 } else { std as f32 });
        }

        Self { means, stds }
    }

    /// Rewrite every entry as `(value - mean) / std` using the fitted stats.
    pub fn transform_inplace(&self, mut features: ArrayViewMut2<f32>) {
        for (j, mut column) in features.columns_mut().into_iter().enumerate() {
            let mean = self.means[j];
            let std = self.stds[j];
            column.mapv_inplace(|v| (v - mean) / std);
        }
    }

    /// Fit and transform in one call.
    pub fn fit_transform(mut features: ArrayViewMut2<f32>) -> Self {
        let scaler = Self::fit(features.view());
        scaler.transform_inplace(features.view_mut());
        scaler
    }

    /// Fitted column means.
    #[inline]
    pub fn means(&self) -> &[f32] {
        &self.means
    }

    /// Fitted column standard deviations (1.0 for constant columns).
    #[inline]
    pub fn stds(&self) -> &[f32] {
        &self.stds
    }
}
