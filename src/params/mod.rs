//! Live, validated parameter records for each curve family.
//!
//! A shell reports widget changes as `(field, value)` pairs. Each record
//! validates the new value against its field's domain before storing it,
//! so a rejected update leaves the last-known-good values in place.

mod cycloid;
mod lemniscate;
mod rolling_circle;
mod style;

pub use cycloid::CycloidParams;
pub use lemniscate::LemniscateParams;
pub use rolling_circle::RollingCircleParams;
pub use style::Style;

use std::fmt;

use crate::error::{ParameterError, Result};
use crate::geometry::{Cycloid, Epicycloid, Hypocycloid, Lemniscate};
use crate::sampling::MAX_SAMPLES;

/// A raw value reported by a widget.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// A slider or spin-box value.
    Float(f64),
    /// An integer widget value.
    Int(i64),
    /// Free text: a color name, or a number typed into a text field.
    Text(String),
}

impl ParamValue {
    /// Reads the value as a finite number. Text is parsed as a float.
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn as_number(&self, field: &'static str) -> std::result::Result<f64, ParameterError> {
        let value = match self {
            Self::Float(v) => *v,
            Self::Int(v) => *v as f64,
            Self::Text(s) => s.trim().parse::<f64>().map_err(|_| ParameterError::NotNumeric {
                field,
                input: s.clone(),
            })?,
        };
        require_finite(field, value)
    }

    /// Reads the value as a sample count in `2..=MAX_SAMPLES`.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn as_steps(&self, field: &'static str) -> std::result::Result<usize, ParameterError> {
        let steps = match self {
            Self::Int(n) => *n,
            Self::Float(v) if v.is_finite() && v.fract() == 0.0 => *v as i64,
            Self::Float(_) => return Err(ParameterError::NotAnInteger { field }),
            Self::Text(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| ParameterError::NotAnInteger { field })?,
        };
        require_steps(field, steps)
    }

    /// Reads the value as opaque text.
    pub(crate) fn as_text(&self, field: &'static str) -> std::result::Result<&str, ParameterError> {
        match self {
            Self::Text(s) if !s.trim().is_empty() => Ok(s.trim()),
            _ => Err(ParameterError::NotAColor { field }),
        }
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

pub(crate) fn require_finite(
    field: &'static str,
    value: f64,
) -> std::result::Result<f64, ParameterError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ParameterError::NotFinite { field, value })
    }
}

pub(crate) fn require_positive(
    field: &'static str,
    value: f64,
) -> std::result::Result<f64, ParameterError> {
    let value = require_finite(field, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(ParameterError::NonPositive { field, value })
    }
}

pub(crate) fn require_steps(
    field: &'static str,
    steps: i64,
) -> std::result::Result<usize, ParameterError> {
    if steps < 2 {
        return Err(ParameterError::TooFewSteps { field, steps });
    }
    match usize::try_from(steps) {
        Ok(count) if count <= MAX_SAMPLES => Ok(count),
        _ => Err(ParameterError::TooManySteps {
            field,
            steps,
            max: MAX_SAMPLES,
        }),
    }
}

pub(crate) fn require_non_negative(
    field: &'static str,
    value: f64,
) -> std::result::Result<f64, ParameterError> {
    let value = require_finite(field, value)?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(ParameterError::Negative { field, value })
    }
}

/// The four supported curve families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Cycloid,
    Epicycloid,
    Hypocycloid,
    Lemniscate,
}

impl Family {
    /// Returns the lowercase family name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Cycloid => "cycloid",
            Self::Epicycloid => "epicycloid",
            Self::Hypocycloid => "hypocycloid",
            Self::Lemniscate => "lemniscate",
        }
    }

    /// Returns whether this family is animated frame by frame.
    #[must_use]
    pub fn is_animated(self) -> bool {
        matches!(self, Self::Cycloid)
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The parameters of one curve family.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterSet {
    Cycloid(CycloidParams),
    Epicycloid(RollingCircleParams),
    Hypocycloid(RollingCircleParams),
    Lemniscate(LemniscateParams),
}

impl ParameterSet {
    /// Creates the default parameters for a family.
    #[must_use]
    pub fn defaults(family: Family) -> Self {
        match family {
            Family::Cycloid => Self::Cycloid(CycloidParams::default()),
            Family::Epicycloid => Self::Epicycloid(RollingCircleParams::default()),
            Family::Hypocycloid => Self::Hypocycloid(RollingCircleParams::default()),
            Family::Lemniscate => Self::Lemniscate(LemniscateParams::default()),
        }
    }

    /// Returns the family these parameters belong to.
    #[must_use]
    pub fn family(&self) -> Family {
        match self {
            Self::Cycloid(_) => Family::Cycloid,
            Self::Epicycloid(_) => Family::Epicycloid,
            Self::Hypocycloid(_) => Family::Hypocycloid,
            Self::Lemniscate(_) => Family::Lemniscate,
        }
    }

    /// Validates `value` for `field` and stores it.
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] if the field is unknown for this family or
    /// the value is outside its domain. The stored parameters are unchanged.
    pub fn set(&mut self, field: &str, value: &ParamValue) -> std::result::Result<(), ParameterError> {
        let family = self.family().name();
        match self {
            Self::Cycloid(p) => p.set(field, value),
            Self::Epicycloid(p) | Self::Hypocycloid(p) => p.set(field, value),
            Self::Lemniscate(p) => p.set(field, value),
        }
        .map_err(|err| match err {
            ParameterError::UnknownField { field, .. } => {
                ParameterError::UnknownField { family, field }
            }
            other => other,
        })
    }

    /// Returns a plot label such as `Epicycloid (R=3, r=1)`.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Cycloid(p) => format!("Cycloid (radius={})", p.radius()),
            Self::Epicycloid(p) => {
                format!("Epicycloid (R={}, r={})", p.fixed_radius(), p.rolling_radius())
            }
            Self::Hypocycloid(p) => {
                format!("Hypocycloid (R={}, r={})", p.fixed_radius(), p.rolling_radius())
            }
            Self::Lemniscate(p) => format!("Lemniscate (a={})", p.a()),
        }
    }

    /// Builds the cycloid described by these parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if this is not a cycloid parameter set.
    pub(crate) fn cycloid(&self) -> Result<Cycloid> {
        match self {
            Self::Cycloid(p) => p.curve(),
            _ => Err(self.unknown("radius").into()),
        }
    }

    /// Builds the epicycloid described by these parameters.
    pub(crate) fn epicycloid(&self) -> Result<Epicycloid> {
        match self {
            Self::Epicycloid(p) => Epicycloid::new(p.fixed_radius(), p.rolling_radius()),
            _ => Err(self.unknown("R").into()),
        }
    }

    /// Builds the hypocycloid described by these parameters.
    pub(crate) fn hypocycloid(&self) -> Result<Hypocycloid> {
        match self {
            Self::Hypocycloid(p) => Hypocycloid::new(p.fixed_radius(), p.rolling_radius()),
            _ => Err(self.unknown("R").into()),
        }
    }

    /// Builds the lemniscate described by these parameters.
    pub(crate) fn lemniscate(&self) -> Result<Lemniscate> {
        match self {
            Self::Lemniscate(p) => Lemniscate::new(p.a()),
            _ => Err(self.unknown("a").into()),
        }
    }

    fn unknown(&self, field: &str) -> ParameterError {
        ParameterError::UnknownField {
            family: self.family().name(),
            field: field.to_owned(),
        }
    }
}
