//! Training configuration with builder pattern.
//!
//! [`LinearConfig`] collects the hyperparameters of a training run. It uses
//! the `bon` crate for builder pattern generation with validation.
//!
//! # Example
//!
//! ```
//! use lingrad::{LinearConfig, Verbosity};
//!
//! // All defaults
//! let config = LinearConfig::builder().build().unwrap();
//!
//! // Customize hyperparameters
//! let config = LinearConfig::builder()
//!     .n_epochs(500)
//!     .learning_rate(0.05)
//!     .verbosity(Verbosity::Info)
//!     .log_every(50)
//!     .build()
//!     .unwrap();
//! ```

use bon::Builder;

use crate::training::Verbosity;

// =============================================================================
// ConfigError
// =============================================================================

/// Errors that can occur during configuration validation.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Learning rate must be positive and finite.
    InvalidLearningRate(f32),
    /// Logging cadence must be at least 1.
    InvalidLogCadence,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLearningRate(v) => {
                write!(f, "learning_rate must be positive and finite, got {}", v)
            }
            Self::InvalidLogCadence => write!(f, "log_every must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// LinearConfig
// =============================================================================

/// Hyperparameters for a batch gradient descent run.
///
/// The builder pattern (via `bon`) provides a fluent API with validation at
/// build time.
///
/// # Example
///
/// ```
/// use lingrad::LinearConfig;
///
/// let config = LinearConfig::builder()
///     .n_epochs(3000)
///     .learning_rate(0.01)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(
    derive(Clone, Debug),
    finish_fn(vis = "", name = __build_internal)
)]
pub struct LinearConfig {
    /// Number of training epochs. Default: 3000.
    ///
    /// Zero is allowed: training produces an empty loss trace and leaves the
    /// zero-initialized parameters untouched.
    #[builder(default = 3000)]
    pub n_epochs: u32,

    /// Learning rate. Default: 0.01.
    ///
    /// Must be positive and finite.
    #[builder(default = 0.01)]
    pub learning_rate: f32,

    /// Verbosity level. Default: `Silent`.
    #[builder(default)]
    pub verbosity: Verbosity,

    /// Print progress every this many epochs at `Info` verbosity.
    /// Default: 100.
    #[builder(default = 100)]
    pub log_every: u32,
}

/// Custom finishing function that validates the config.
impl<S: linear_config_builder::IsComplete> LinearConfigBuilder<S> {
    /// Build and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any parameter is invalid:
    /// - `learning_rate` non-positive or non-finite
    /// - `log_every == 0`
    pub fn build(self) -> Result<LinearConfig, ConfigError> {
        let config = self.__build_internal();
        config.validate()?;
        Ok(config)
    }
}

impl LinearConfig {
    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.learning_rate <= 0.0 || !self.learning_rate.is_finite() {
            return Err(ConfigError::InvalidLearningRate(self.learning_rate));
        }

        if self.log_every == 0 {
            return Err(ConfigError::InvalidLogCadence);
        }

        Ok(())
    }
}

impl Default for LinearConfig {
    fn default() -> Self {
        Self::builder().build().expect("default config is valid")
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = LinearConfig::builder().build();
        assert!(config.is_ok());

        let config = config.unwrap();
        assert_eq!(config.n_epochs, 3000);
        assert!((config.learning_rate - 0.01).abs() < 1e-6);
        assert_eq!(config.log_every, 100);
        assert_eq!(config.verbosity, Verbosity::Silent);
    }

    #[test]
    fn test_invalid_learning_rate_zero() {
        let result = LinearConfig::builder().learning_rate(0.0).build();
        assert!(matches!(result, Err(ConfigError::InvalidLearningRate(_))));
    }

    #[test]
    fn test_invalid_learning_rate_negative() {
        let result = LinearConfig::builder().learning_rate(-0.1).build();
        assert!(matches!(result, Err(ConfigError::InvalidLearningRate(_))));
    }

    #[test]
    fn test_invalid_learning_rate_nan() {
        let result = LinearConfig::builder().learning_rate(f32::NAN).build();
        assert!(matches!(result, Err(ConfigError::InvalidLearningRate(_))));
    }

    #[test]
    fn test_invalid_learning_rate_infinite() {
        let result = LinearConfig::builder()
            .learning_rate(f32::INFINITY)
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidLearningRate(_))));
    }

    #[test]
    fn test_zero_epochs_is_valid() {
        let result = LinearConfig::builder().n_epochs(0).build();
        assert!(result.is_ok());
    }

    #[test]
    fn test_invalid_log_every_zero() {
        let result = LinearConfig::builder().log_every(0).build();
        assert!(matches!(result, Err(ConfigError::InvalidLogCadence)));
    }

    #[test]
    fn test_config_default_trait() {
        let config = LinearConfig::default();
        assert_eq!(config.n_epochs, 3000);
    }

    #[test]
    fn test_error_display() {
        let err = ConfigError::InvalidLearningRate(-0.5);
        assert_eq!(
            err.to_string(),
            "learning_rate must be positive and finite, got -0.5"
        );
    }
}
