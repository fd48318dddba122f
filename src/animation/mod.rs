//! Frame-driven update loop.
//!
//! A shell reports widget changes and frame ticks. Changes are validated and
//! stored first; each tick (or, for the static families, each accepted
//! change) then recomputes and emits geometry from the stored parameters.

mod controller;
mod static_plot;

pub use controller::AnimationController;
pub use static_plot::{Plot, StaticPlot};

use std::time::Duration;

use crate::error::{ParameterError, Result};
use crate::math::Point2;
use crate::params::{require_positive, require_steps, Style};
use crate::sampling::{Polyline, DEFAULT_SAMPLES};

/// Timing and resolution of the cycloid animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationConfig {
    /// Frames per unit of drive time at speed 1.
    pub tick_rate: f64,
    /// Number of samples in the traced path, whatever its length.
    pub path_samples: usize,
    /// Number of frames in one run.
    pub frame_count: u32,
    /// Wall-clock delay the shell should leave between frames.
    pub frame_interval: Duration,
    /// Whether frame indices wrap around `frame_count`, restarting the run.
    /// Off by default; a shell that loops the animation wraps the index
    /// itself.
    pub repeat: bool,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            tick_rate: 20.0,
            path_samples: DEFAULT_SAMPLES,
            frame_count: 500,
            frame_interval: Duration::from_millis(20),
            repeat: false,
        }
    }
}

impl AnimationConfig {
    /// Checks that the configuration can drive an animation.
    ///
    /// # Errors
    ///
    /// Returns an error if `tick_rate` is not positive, `path_samples` is
    /// outside `2..=MAX_SAMPLES`, or `frame_count` is zero.
    pub fn validate(&self) -> Result<()> {
        require_positive("tick_rate", self.tick_rate)?;
        require_steps(
            "path_samples",
            i64::try_from(self.path_samples).unwrap_or(i64::MAX),
        )?;
        if self.frame_count == 0 {
            return Err(ParameterError::NonPositive {
                field: "frame_count",
                value: 0.0,
            }
            .into());
        }
        Ok(())
    }
}

/// Whether the rolling point is still moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationPhase {
    /// Drive time is below the stop time; the point follows the path head.
    Running,
    /// The stop time was reached; the point stays put while the path grows.
    Frozen,
}

/// The marker riding on the cycloid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RollingPoint {
    /// Position on the curve.
    pub position: Point2,
    /// Curve parameter the position was evaluated at.
    pub t: f64,
}

/// Horizontal range the shell should show.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x_min: f64,
    pub x_max: f64,
}

/// Everything a shell needs to draw one animation frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// The full path traced from drive time 0.
    pub path: Polyline,
    pub rolling_point: RollingPoint,
    pub phase: AnimationPhase,
    pub drive_time: f64,
    pub viewport: Viewport,
    pub style: Style,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = AnimationConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.repeat);
    }

    #[test]
    fn config_rejects_bad_values() {
        let bad_rate = AnimationConfig {
            tick_rate: 0.0,
            ..AnimationConfig::default()
        };
        assert!(bad_rate.validate().is_err());

        let bad_samples = AnimationConfig {
            path_samples: 1,
            ..AnimationConfig::default()
        };
        assert!(bad_samples.validate().is_err());

        let huge_samples = AnimationConfig {
            path_samples: usize::MAX,
            ..AnimationConfig::default()
        };
        assert!(huge_samples.validate().is_err());

        let no_frames = AnimationConfig {
            frame_count: 0,
            ..AnimationConfig::default()
        };
        assert!(no_frames.validate().is_err());
    }
}
