use crate::error::ParameterError;

use super::{require_positive, require_steps, ParamValue};

/// Parameters of the lemniscate of Bernoulli.
#[derive(Debug, Clone, PartialEq)]
pub struct LemniscateParams {
    a: f64,
    steps: usize,
}

impl Default for LemniscateParams {
    fn default() -> Self {
        Self { a: 1.0, steps: 1000 }
    }
}

impl LemniscateParams {
    /// Creates a validated parameter record.
    ///
    /// # Errors
    ///
    /// Returns an error if `a` is not positive or `steps` is outside
    /// `2..=MAX_SAMPLES`.
    pub fn new(a: f64, steps: usize) -> Result<Self, ParameterError> {
        let steps = require_steps("steps", i64::try_from(steps).unwrap_or(i64::MAX))?;
        Ok(Self {
            a: require_positive("a", a)?,
            steps,
        })
    }

    /// Returns the scale parameter.
    #[must_use]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Returns the number of samples over one full turn.
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
            "a" => self.a = require_positive("a", value.as_number("a")?)?,
            "steps" => self.steps = value.as_steps("steps")?,
            _ => {
                return Err(ParameterError::UnknownField {
                    family: "lemniscate",
                    field: field.to_owned(),
                })
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn scale_must_be_positive() {
        let mut p = LemniscateParams::default();
        assert!(p.set("a", &ParamValue::from(-0.5)).is_err());
        assert_abs_diff_eq!(p.a(), 1.0);
        p.set("a", &ParamValue::from(2.5)).unwrap();
        assert_abs_diff_eq!(p.a(), 2.5);
    }

    #[test]
    fn new_validates() {
        assert!(LemniscateParams::new(1.0, 0).is_err());
        assert!(LemniscateParams::new(1.0, 2).is_ok());
        assert!(LemniscateParams::new(1.0, 1_000_001).is_err());
    }
}
