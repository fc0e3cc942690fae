//! Configuration error types
//!
//! The core never fails at runtime; these errors only come from rejecting
//! user-supplied settings before a controller is built.

use std::fmt;

/// Errors raised while validating a [`Config`](super::Config)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Algorithm name not recognized
    UnknownAlgorithm { name: String },

    /// Element count outside `1..=max`
    InvalidElementCount { count: usize, max: usize },

    /// Speed level outside `min..=max`
    InvalidSpeed { speed: u8, min: u8, max: u8 },

    /// Frame rate of zero
    InvalidFrameRate { fps: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownAlgorithm { name } => {
                write!(
                    f,
                    "Unknown algorithm '{}' (expected bubble, selection, insertion, merge, quick or heap)",
                    name
                )
            }
            ConfigError::InvalidElementCount { count, max } => {
                write!(
                    f,
                    "Invalid element count {}: must be between 1 and {}",
                    count, max
                )
            }
            ConfigError::InvalidSpeed { speed, min, max } => {
                write!(
                    f,
                    "Invalid speed {}: must be between {} and {}",
                    speed, min, max
                )
            }
            ConfigError::InvalidFrameRate { fps } => {
                write!(f, "Invalid frame rate {}: must be positive", fps)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
