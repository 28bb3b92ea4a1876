//! End-to-end linear regression training example.
//!
//! Builds a small two-feature dataset, standardizes it, trains by batch
//! gradient descent, prints the learned parameters and predictions, and
//! writes `loss.csv` and `predictions.csv` to the current directory.
//!
//! Run with:
//! ```bash
//! cargo run --example train_regression
//! ```

use lingrad::io::{write_loss_trace_file, write_predictions_file};
use lingrad::{Dataset, LinearConfig, LinearModel, Standardizer, Trainer, Verbosity};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // =========================================================================
    // 1. Prepare Data
    // =========================================================================
    let rows = vec![
        vec![1.0, 2.0],
        vec![2.0, 1.0],
        vec![3.0, 4.0],
        vec![4.0, 3.0],
        vec![5.0, 5.0],
    ];
    let targets = [13.0, 12.0, 23.0, 22.0, 30.0];

    let mut data = Dataset::from_rows(&rows, &targets)?;
    Standardizer::fit_transform(data.features_mut());

    // =========================================================================
    // 2. Configure and Train
    // =========================================================================
    let config = LinearConfig::builder()
        .n_epochs(3000)
        .learning_rate(0.01)
        .verbosity(Verbosity::Info)
        .log_every(100)
        .build()?;

    println!("Training linear model...");
    println!("  Epochs: {}", config.n_epochs);
    println!("  Learning rate: {}\n", config.learning_rate);

    let mut model = LinearModel::from_config(&config, data.n_features());
    let trace = Trainer::from_config(&config).train(&mut model, &data)?;

    // =========================================================================
    // 3. Inspect Model and Predictions
    // =========================================================================
    println!("\n=== Learned Parameters ===");
    println!("bias: {:.4}", model.bias());
    for j in 0..model.n_features() {
        println!("w[{}]: {:.4}", j, model.weight(j));
    }

    let predictions = model.predict_batch(data.features());
    println!("\n=== Predictions ===");
    for (&y, &pred) in targets.iter().zip(predictions.iter()) {
        println!("y_true: {:>6.2}  y_pred: {:>6.2}", y, pred);
    }

    // =========================================================================
    // 4. Write Results
    // =========================================================================
    write_loss_trace_file(&trace, "loss.csv")?;
    write_predictions_file(data.targets(), predictions.view(), "predictions.csv")?;
    println!("\nWrote loss.csv and predictions.csv");

    Ok(())
}
