//! End-to-end training tests.
//!
//! Covers the full pipeline on a small reference dataset:
//! - Convergence and prediction accuracy
//! - Loss trace shape and monotonicity
//! - Determinism
//! - Standardization invariants
//! - Edge cases (zero epochs, single row, dimension mismatches)

use approx::assert_relative_eq;
use lingrad::testing::two_feature_dataset;
use lingrad::{
    Dataset, LinearConfig, LinearModel, Standardizer, TrainError, Trainer, Verbosity,
};
use rstest::rstest;

fn standardized_reference() -> Dataset {
    let mut data = two_feature_dataset();
    Standardizer::fit_transform(data.features_mut());
    data
}

/// Reference run: 3000 epochs at lr 0.01 on the standardized dataset should
/// predict every target within 2.0 absolute.
#[test]
fn reference_run_converges() {
    let data = standardized_reference();
    let config = LinearConfig::builder()
        .n_epochs(3000)
        .learning_rate(0.01)
        .build()
        .unwrap();

    let mut model = LinearModel::from_config(&config, data.n_features());
    let trace = Trainer::from_config(&config).train(&mut model, &data).unwrap();

    assert_eq!(trace.len(), 3000);

    let predictions = model.predict_batch(data.features());
    for (&pred, &y) in predictions.iter().zip(data.targets().iter()) {
        let diff = (pred - y).abs();
        assert!(
            diff < 2.0,
            "prediction {} too far from target {} (diff {})",
            pred,
            y,
            diff
        );
    }

    println!("final mse: {:.6}", trace.final_loss().unwrap());
}

/// Loss never increases over the reference run, up to f32 rounding.
///
/// Near convergence the loss plateaus around 1e-8 and a single f32
/// parameter rounding step can tick it up by ~1e-10, so the check allows a
/// small absolute slack instead of demanding exact monotonicity.
#[test]
fn reference_run_loss_monotonic() {
    let data = standardized_reference();
    let mut model = LinearModel::new(3000, 0.01, data.n_features());
    let trace = Trainer::default().train(&mut model, &data).unwrap();

    for pair in trace.records().windows(2) {
        assert!(
            pair[1].loss <= pair[0].loss + 1e-9,
            "loss increased at epoch {}: {} -> {}",
            pair[1].epoch,
            pair[0].loss,
            pair[1].loss
        );
    }
}

/// Identical inputs produce identical traces and parameters.
#[test]
fn training_is_deterministic() {
    let data = standardized_reference();

    let mut model_a = LinearModel::new(500, 0.01, data.n_features());
    let mut model_b = LinearModel::new(500, 0.01, data.n_features());
    let trace_a = Trainer::default().train(&mut model_a, &data).unwrap();
    let trace_b = Trainer::default().train(&mut model_b, &data).unwrap();

    assert_eq!(model_a.parameters(), model_b.parameters());
    for (a, b) in trace_a.iter().zip(trace_b.iter()) {
        assert_eq!(a.loss, b.loss);
    }
}

/// Parameter vector keeps length n_features + 1 through a whole run, and
/// batch prediction output matches the row count.
#[rstest]
#[case(1)]
#[case(2)]
#[case(5)]
fn dimension_invariants(#[case] n_features: usize) {
    let rows: Vec<Vec<f32>> = (0..4)
        .map(|i| (0..n_features).map(|j| (i + j) as f32).collect())
        .collect();
    let targets: Vec<f32> = (0..4).map(|i| i as f32).collect();
    let data = Dataset::from_rows(&rows, &targets).unwrap();

    let mut model = LinearModel::new(20, 0.01, n_features);
    Trainer::default().train(&mut model, &data).unwrap();

    assert_eq!(model.parameters().len(), n_features + 1);
    assert_eq!(model.predict_batch(data.features()).len(), 4);
}

/// Zero configured epochs: empty trace, untouched parameters.
#[test]
fn zero_epochs_leaves_model_untouched() {
    let data = standardized_reference();
    let config = LinearConfig::builder().n_epochs(0).build().unwrap();

    let mut model = LinearModel::from_config(&config, data.n_features());
    let trace = Trainer::from_config(&config).train(&mut model, &data).unwrap();

    assert!(trace.is_empty());
    assert!(model.parameters().iter().all(|&p| p == 0.0));
}

/// A single-row dataset is valid; the first loss equals that row's squared
/// error exactly.
#[test]
fn single_row_dataset() {
    let data = Dataset::from_rows(&[vec![1.0, -1.0]], &[5.0]).unwrap();
    let mut model = LinearModel::new(3, 0.01, 2);
    let trace = Trainer::default().train(&mut model, &data).unwrap();

    assert_relative_eq!(trace.records()[0].loss, 25.0);
    assert_eq!(trace.len(), 3);
}

/// Feature count disagreement is rejected before any arithmetic.
#[test]
fn feature_mismatch_rejected() {
    let data = standardized_reference();
    let mut model = LinearModel::new(10, 0.01, 4);
    let err = Trainer::default().train(&mut model, &data).unwrap_err();

    assert_eq!(
        err,
        TrainError::FeatureCountMismatch {
            model: 4,
            dataset: 2,
        }
    );
}

/// Standardized columns have mean ~0 and std ~1.
#[test]
fn standardizer_invariants() {
    let data = standardized_reference();
    let m = data.n_samples() as f64;

    for column in data.features().columns() {
        let mean = column.iter().map(|&v| v as f64).sum::<f64>() / m;
        let var = column
            .iter()
            .map(|&v| (v as f64 - mean).powi(2))
            .sum::<f64>()
            / m;

        assert_relative_eq!(mean, 0.0, epsilon = 1e-6);
        assert_relative_eq!(var.sqrt(), 1.0, epsilon = 1e-5);
    }
}

/// A constant feature column standardizes to all zeros and training still
/// runs (the column simply contributes nothing).
#[test]
fn degenerate_column_trains() {
    let rows = vec![vec![1.0, 7.0], vec![2.0, 7.0], vec![3.0, 7.0]];
    let mut data = Dataset::from_rows(&rows, &[2.0, 4.0, 6.0]).unwrap();
    let scaler = Standardizer::fit_transform(data.features_mut());

    assert_eq!(scaler.stds()[1], 1.0);
    for &v in data.features().column(1).iter() {
        assert_eq!(v, 0.0);
    }

    let mut model = LinearModel::new(500, 0.1, 2);
    Trainer::default().train(&mut model, &data).unwrap();

    // The constant column's weight never leaves zero.
    assert_eq!(model.weight(1), 0.0);
    let preds = model.predict_batch(data.features());
    assert_relative_eq!(preds[0], 2.0, epsilon = 0.1);
}

/// Higher learning rates reach a lower loss in the same number of epochs on
/// this well-conditioned dataset.
#[rstest]
#[case(0.001, 0.01)]
#[case(0.01, 0.1)]
fn larger_step_converges_faster(#[case] slow: f32, #[case] fast: f32) {
    let data = standardized_reference();

    let mut slow_model = LinearModel::new(200, slow, data.n_features());
    let mut fast_model = LinearModel::new(200, fast, data.n_features());
    let slow_trace = Trainer::default().train(&mut slow_model, &data).unwrap();
    let fast_trace = Trainer::default().train(&mut fast_model, &data).unwrap();

    assert!(fast_trace.final_loss().unwrap() < slow_trace.final_loss().unwrap());
}

/// Verbose configurations train identically to silent ones.
#[test]
fn verbosity_does_not_affect_training() {
    let data = standardized_reference();

    let silent = LinearConfig::builder().n_epochs(300).build().unwrap();
    let loud = LinearConfig::builder()
        .n_epochs(300)
        .verbosity(Verbosity::Debug)
        .log_every(1)
        .build()
        .unwrap();

    let mut model_a = LinearModel::from_config(&silent, data.n_features());
    let mut model_b = LinearModel::from_config(&loud, data.n_features());
    Trainer::from_config(&silent).train(&mut model_a, &data).unwrap();
    Trainer::from_config(&loud).train(&mut model_b, &data).unwrap();

    assert_eq!(model_a.parameters(), model_b.parameters());
}
