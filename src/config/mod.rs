//! Run configuration
//!
//! [`Config`] carries everything a [`PlaybackController`] needs at startup.
//! The binary builds one from command-line flags; tests usually start from
//! [`Config::default`] and pin a seed.
//!
//! [`PlaybackController`]: crate::playback::PlaybackController

pub mod errors;

use crate::algorithms::Algorithm;
use crate::playback::{MAX_SPEED, MIN_SPEED};
use errors::ConfigError;
use std::time::Duration;

/// Largest element count accepted from the command line
pub const MAX_ELEMENTS: usize = 1000;

/// Default playback cadence
pub const DEFAULT_FPS: u32 = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub algorithm: Algorithm,
    pub element_count: usize,
    pub speed: u8,
    /// Seed for the shuffle source; `None` draws one from the OS
    pub seed: Option<u64>,
    /// Wall time between playback pulses
    pub frame_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            algorithm: Algorithm::Bubble,
            element_count: 100,
            speed: 5,
            seed: None,
            frame_interval: frame_interval(DEFAULT_FPS),
        }
    }
}

impl Config {
    /// Reject settings the controller would otherwise have to clamp
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.element_count == 0 || self.element_count > MAX_ELEMENTS {
            return Err(ConfigError::InvalidElementCount {
                count: self.element_count,
                max: MAX_ELEMENTS,
            });
        }
        if !(MIN_SPEED..=MAX_SPEED).contains(&self.speed) {
            return Err(ConfigError::InvalidSpeed {
                speed: self.speed,
                min: MIN_SPEED,
                max: MAX_SPEED,
            });
        }
        Ok(())
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the pulse cadence from a frame rate
    pub fn with_fps(mut self, fps: u32) -> Result<Self, ConfigError> {
        if fps == 0 {
            return Err(ConfigError::InvalidFrameRate { fps });
        }
        self.frame_interval = frame_interval(fps);
        Ok(self)
    }
}

fn frame_interval(fps: u32) -> Duration {
    Duration::from_secs(1) / fps
}
