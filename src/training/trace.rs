//! Per-epoch loss history.

/// One `(epoch, loss)` observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LossRecord {
    pub epoch: u32,
    pub loss: f64,
}

/// Append-only, epoch-ordered loss history of one training run.
///
/// The trainer appends exactly one record per epoch, so after training the
/// trace length equals the configured epoch count (zero epochs leaves it
/// empty).
#[derive(Debug, Clone, Default)]
pub struct LossTrace {
    records: Vec<LossRecord>,
}

impl LossTrace {
    /// Empty trace with room for `n_epochs` records.
    pub fn with_capacity(n_epochs: usize) -> Self {
        Self {
            records: Vec::with_capacity(n_epochs),
        }
    }

    /// Append one epoch's loss.
    pub fn record(&mut self, epoch: u32, loss: f64) {
        self.records.push(LossRecord { epoch, loss });
    }

    /// Number of recorded epochs.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in epoch order.
    #[inline]
    pub fn records(&self) -> &[LossRecord] {
        &self.records
    }

    /// Iterate records in epoch order.
    pub fn iter(&self) -> impl Iterator<Item = &LossRecord> {
        self.records.iter()
    }

    /// Loss of the last recorded epoch, if any.
    pub fn final_loss(&self) -> Option<f64> {
        self.records.last().map(|r| r.loss)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order() {
        let mut trace = LossTrace::with_capacity(3);
        trace.record(0, 3.0);
        trace.record(1, 2.0);
        trace.record(2, 1.5);

        assert_eq!(trace.len(), 3);
        let epochs: Vec<u32> = trace.iter().map(|r| r.epoch).collect();
        assert_eq!(epochs, vec![0, 1, 2]);
        assert_eq!(trace.final_loss(), Some(1.5));
    }

    #[test]
    fn empty_trace() {
        let trace = LossTrace::default();
        assert!(trace.is_empty());
        assert_eq!(trace.final_loss(), None);
    }
}
