//! Shared fixtures for unit, integration, and benchmark code.

use crate::data::Dataset;

/// Absolute tolerance for float comparisons in tests.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Small two-feature regression dataset (5 samples).
///
/// The targets satisfy `y = 5 + 2*x0 + 3*x1` exactly, so a few thousand
/// epochs of gradient descent on the standardized features recovers them
/// closely.
pub fn two_feature_dataset() -> Dataset {
    let rows = vec![
        vec![1.0, 2.0],
        vec![2.0, 1.0],
        vec![3.0, 4.0],
        vec![4.0, 3.0],
        vec![5.0, 5.0],
    ];
    let targets = [13.0, 12.0, 23.0, 22.0, 30.0];
    Dataset::from_rows(&rows, &targets).expect("fixture dimensions are valid")
}
