use crate::error::ParameterError;

use super::{require_positive, require_steps, ParamValue};

/// Parameters shared by the epicycloid and hypocycloid: the fixed circle
/// radius `R`, the rolling circle radius `r`, and the sample count.
#[derive(Debug, Clone, PartialEq)]
pub struct RollingCircleParams {
    fixed_radius: f64,
    rolling_radius: f64,
    steps: usize,
}

impl Default for RollingCircleParams {
    fn default() -> Self {
        Self {
            fixed_radius: 3.0,
            rolling_radius: 1.0,
            steps: 1000,
        }
    }
}

impl RollingCircleParams {
    /// Creates a validated parameter record.
    ///
    /// # Errors
    ///
    /// Returns an error if either radius is not positive or `steps` is outside
    /// `2..=MAX_SAMPLES`.
    pub fn new(
        fixed_radius: f64,
        rolling_radius: f64,
        steps: usize,
    ) -> Result<Self, ParameterError> {
        let steps = require_steps("steps", i64::try_from(steps).unwrap_or(i64::MAX))?;
        Ok(Self {
            fixed_radius: require_positive("R", fixed_radius)?,
            rolling_radius: require_positive("r", rolling_radius)?,
            steps,
        })
    }

    /// Returns the fixed circle radius `R`.
    #[must_use]
    pub fn fixed_radius(&self) -> f64 {
        self.fixed_radius
    }

    /// Returns the rolling circle radius `r`.
    #[must_use]
    pub fn rolling_radius(&self) -> f64 {
        self.rolling_radius
    }

    /// Returns the number of samples per full period.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Validates `value` for `field` and stores it.
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] describing the rejected value; the record
    /// is left unchanged.
    pub fn set(&mut self, field: &str, value: &ParamValue) -> Result<(), ParameterError> {
        match field {
            "R" => self.fixed_radius = require_positive("R", value.as_number("R")?)?,
            "r" => self.rolling_radius = require_positive("r", value.as_number("r")?)?,
            "steps" => self.steps = value.as_steps("steps")?,
            _ => {
                return Err(ParameterError::UnknownField {
                    family: "rolling circle",
                    field: field.to_owned(),
                })
            }
        }
        Ok(())
    }
}
