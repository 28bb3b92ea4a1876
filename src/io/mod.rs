//! Result sinks: loss traces and predictions as CSV.
//!
//! Both sinks write through any [`std::io::Write`], with `_file` variants for
//! the common path-based case. Values are written with six decimal places.

use std::io::Write;
use std::path::Path;

use ndarray::ArrayView1;

use crate::training::LossTrace;

/// Errors from writing result files.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("target/prediction length mismatch: {targets} targets vs {predictions} predictions")]
    LengthMismatch { targets: usize, predictions: usize },
}

// =============================================================================
// Loss sink
// =============================================================================

/// Write a loss trace as CSV with header `epoch,loss`.
pub fn write_loss_trace<W: Write>(trace: &LossTrace, writer: W) -> Result<(), SinkError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["epoch", "loss"])?;

    for record in trace.iter() {
        csv_writer.write_record([record.epoch.to_string(), format!("{:.6}", record.loss)])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Write a loss trace to a file at `path`.
pub fn write_loss_trace_file<P: AsRef<Path>>(trace: &LossTrace, path: P) -> Result<(), SinkError> {
    let file = std::fs::File::create(path)?;
    write_loss_trace(trace, file)
}

// =============================================================================
// Prediction sink
// =============================================================================

/// Write aligned targets and predictions as CSV with header `y_true,y_pred`.
///
/// # Errors
///
/// Returns [`SinkError::LengthMismatch`] before writing anything if the two
/// vectors differ in length.
pub fn write_predictions<W: Write>(
    targets: ArrayView1<f32>,
    predictions: ArrayView1<f32>,
    writer: W,
) -> Result<(), SinkError> {
    if targets.len() != predictions.len() {
        return Err(SinkError::LengthMismatch {
            targets: targets.len(),
            predictions: predictions.len(),
        });
    }

    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["y_true", "y_pred"])?;

    for (&y, &pred) in targets.iter().zip(predictions.iter()) {
        csv_writer.write_record([format!("{:.6}", y), format!("{:.6}", pred)])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Write targets and predictions to a file at `path`.
pub fn write_predictions_file<P: AsRef<Path>>(
    targets: ArrayView1<f32>,
    predictions: ArrayView1<f32>,
    path: P,
) -> Result<(), SinkError> {
    let file = std::fs::File::create(path)?;
    write_predictions(targets, predictions, file)
}
