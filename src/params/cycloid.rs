use std::f64::consts::PI;

use crate::error::{ParameterError, Result};
use crate::geometry::Cycloid;

use super::{require_finite, require_non_negative, require_positive, ParamValue};

/// Parameters of the animated cycloid.
///
/// `start_pos` and `end_pos` bound the visible x range and are only carried
/// through to the shell; `stop_time` is the drive time at which the rolling
/// point freezes.
#[derive(Debug, Clone, PartialEq)]
pub struct CycloidParams {
    radius: f64,
    speed: f64,
    start_pos: f64,
    end_pos: f64,
    stop_time: f64,
    shift: f64,
}

impl Default for CycloidParams {
    fn default() -> Self {
        Self {
            radius: 2.0,
            speed: 1.0,
            start_pos: 0.0,
            end_pos: 8.0 * PI,
            stop_time: 4.0 * PI,
            shift: 0.0,
        }
    }
}

impl CycloidParams {
    /// Creates a validated parameter record.
    ///
    /// # Errors
    ///
    /// Returns an error if `radius` or `speed` is not positive, `stop_time` is
    /// negative, any value is not finite, or `end_pos <= start_pos`.
    pub fn new(
        radius: f64,
        speed: f64,
        start_pos: f64,
        end_pos: f64,
        stop_time: f64,
        shift: f64,
    ) -> std::result::Result<Self, ParameterError> {
        let start_pos = require_finite("start_pos", start_pos)?;
        let end_pos = require_finite("end_pos", end_pos)?;
        check_viewport(start_pos, end_pos)?;
        Ok(Self {
            radius: require_positive("radius", radius)?,
            speed: require_positive("speed", speed)?,
            start_pos,
            end_pos,
            stop_time: require_non_negative("stop_time", stop_time)?,
            shift: require_finite("shift", shift)?,
        })
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[must_use]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    #[must_use]
    pub fn start_pos(&self) -> f64 {
        self.start_pos
    }

    #[must_use]
    pub fn end_pos(&self) -> f64 {
        self.end_pos
    }

    #[must_use]
    pub fn stop_time(&self) -> f64 {
        self.stop_time
    }

    #[must_use]
    pub fn shift(&self) -> f64 {
        self.shift
    }

    /// Validates `value` for `field` and stores it.
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] describing the rejected value; the record
    /// is left unchanged.
    pub fn set(&mut self, field: &str, value: &ParamValue) -> std::result::Result<(), ParameterError> {
        match field {
            "radius" => self.radius = require_positive("radius", value.as_number("radius")?)?,
            "speed" => self.speed = require_positive("speed", value.as_number("speed")?)?,
            "start_pos" => {
                let start = value.as_number("start_pos")?;
                check_viewport(start, self.end_pos)?;
                self.start_pos = start;
            }
            "end_pos" => {
                let end = value.as_number("end_pos")?;
                check_viewport(self.start_pos, end)?;
                self.end_pos = end;
            }
            "stop_time" => {
                self.stop_time = require_non_negative("stop_time", value.as_number("stop_time")?)?;
            }
            "shift" => self.shift = value.as_number("shift")?,
            _ => {
                return Err(ParameterError::UnknownField {
                    family: "cycloid",
                    field: field.to_owned(),
                })
            }
        }
        Ok(())
    }

    /// Builds the cycloid curve for the current radius and shift.
    ///
    /// # Errors
    ///
    /// Does not fail for a validated record.
    pub fn curve(&self) -> Result<Cycloid> {
        Cycloid::new(self.radius, self.shift)
    }
}

fn check_viewport(start: f64, end: f64) -> std::result::Result<(), ParameterError> {
    if end > start {
        Ok(())
    } else {
        Err(ParameterError::InvertedViewport { start, end })
    }
}
