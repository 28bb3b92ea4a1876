//! Console progress reporting.
//!
//! Purely observational: the logger never influences the training loop.

use super::LossTrace;

/// How much training progress to print.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// No output.
    #[default]
    Silent,
    /// Run summary plus loss every `log_every` epochs.
    Info,
    /// Loss every epoch.
    Debug,
}

/// Prints training progress to stdout according to a [`Verbosity`] level.
#[derive(Debug, Clone, Copy)]
pub struct TrainingLogger {
    verbosity: Verbosity,
    log_every: u32,
}

impl TrainingLogger {
    /// `log_every` controls the epoch cadence at `Info`; `Debug` prints every
    /// epoch regardless.
    pub fn new(verbosity: Verbosity, log_every: u32) -> Self {
        debug_assert!(log_every >= 1);
        Self {
            verbosity,
            log_every,
        }
    }

    /// Announce the start of a run.
    pub fn start_training(&self, n_epochs: u32) {
        if self.verbosity >= Verbosity::Info {
            println!("training: {} epochs", n_epochs);
        }
    }

    /// Report one epoch's loss, respecting the cadence.
    pub fn log_epoch(&self, epoch: u32, loss: f64) {
        let print = match self.verbosity {
            Verbosity::Silent => false,
            Verbosity::Info => epoch % self.log_every == 0,
            Verbosity::Debug => true,
        };
        if print {
            println!("epoch {:>6}  mse {:.6}", epoch, loss);
        }
    }

    /// Summarize the finished run.
    pub fn finish_training(&self, trace: &LossTrace) {
        if self.verbosity >= Verbosity::Info {
            match trace.final_loss() {
                Some(loss) => println!("done: final mse {:.6}", loss),
                None => println!("done: no epochs run"),
            }
        }
    }
}
