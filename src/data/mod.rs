//! Training data containers.
//!
//! [`Dataset`] owns a sample-major feature matrix together with its target
//! vector and validates their shapes at construction, so downstream code can
//! rely on row/target alignment without re-checking.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2, ArrayViewMut2};

/// Dataset construction/validation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DatasetError {
    #[error("inconsistent row width: row {row_idx} expected {expected} features, got {got}")]
    InconsistentRows {
        row_idx: usize,
        expected: usize,
        got: usize,
    },

    #[error("number of targets ({targets}) does not match number of rows ({rows})")]
    TargetLenMismatch { rows: usize, targets: usize },

    #[error("dataset must contain at least one row and one feature")]
    Empty,
}

/// An owned training dataset.
///
/// Features are stored sample-major with shape `[n_samples, n_features]`;
/// targets are single-output (length = n_samples).
///
/// # Example
///
/// ```
/// use lingrad::data::Dataset;
///
/// let rows = vec![vec![1.0, 2.0], vec![2.0, 1.0]];
/// let dataset = Dataset::from_rows(&rows, &[13.0, 12.0]).unwrap();
///
/// assert_eq!(dataset.n_samples(), 2);
/// assert_eq!(dataset.n_features(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Dataset {
    features: Array2<f32>,
    targets: Array1<f32>,
}

impl Dataset {
    /// Create a dataset from a feature matrix and a target vector.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::Empty`] if the matrix has no rows or no
    /// columns, and [`DatasetError::TargetLenMismatch`] if the target length
    /// differs from the row count.
    pub fn new(features: Array2<f32>, targets: Array1<f32>) -> Result<Self, DatasetError> {
        let (n_samples, n_features) = features.dim();
        if n_samples == 0 || n_features == 0 {
            return Err(DatasetError::Empty);
        }
        if targets.len() != n_samples {
            return Err(DatasetError::TargetLenMismatch {
                rows: n_samples,
                targets: targets.len(),
            });
        }

        Ok(Self { features, targets })
    }

    /// Create a dataset from row slices (one `Vec` per sample).
    ///
    /// All rows must have the same width.
    pub fn from_rows(rows: &[Vec<f32>], targets: &[f32]) -> Result<Self, DatasetError> {
        let n_samples = rows.len();
        if n_samples == 0 {
            return Err(DatasetError::Empty);
        }

        let n_features = rows[0].len();
        for (row_idx, row) in rows.iter().enumerate() {
            if row.len() != n_features {
                return Err(DatasetError::InconsistentRows {
                    row_idx,
                    expected: n_features,
                    got: row.len(),
                });
            }
        }

        let flat: Vec<f32> = rows.iter().flatten().copied().collect();
        let features = Array2::from_shape_vec((n_samples, n_features), flat)
            .expect("row-major buffer matches checked dimensions");

        Self::new(features, Array1::from_vec(targets.to_vec()))
    }

    /// Number of samples (rows).
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.features.nrows()
    }

    /// Number of features (columns).
    #[inline]
    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }

    /// Feature matrix view, shape `[n_samples, n_features]`.
    #[inline]
    pub fn features(&self) -> ArrayView2<'_, f32> {
        self.features.view()
    }

    /// Mutable feature matrix view (used by preprocessing).
    #[inline]
    pub fn features_mut(&mut self) -> ArrayViewMut2<'_, f32> {
        self.features.view_mut()
    }

    /// Target vector view, length `n_samples`.
    #[inline]
    pub fn targets(&self) -> ArrayView1<'_, f32> {
        self.targets.view()
    }
}
