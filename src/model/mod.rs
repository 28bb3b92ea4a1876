//! Linear model representation and configuration.

mod config;
mod linear;

pub use config::{ConfigError, LinearConfig};
pub use linear::LinearModel;
