use std::f64::consts::TAU;

use crate::error::Result;
use crate::math::Point2;
use crate::params::require_positive;

use super::{closes_over_domain, Curve, CurveDomain};

/// The path of a point on a circle of radius `r` rolling around the outside
/// of a fixed circle of radius `R`.
///
/// `x(t) = (R + r) cos t - r cos((R + r) / r * t)`
/// `y(t) = (R + r) sin t - r sin((R + r) / r * t)`
///
/// The domain is `[0, 2*pi * R / r]`, which closes the curve whenever
/// `R / r` is an integer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Epicycloid {
    fixed_radius: f64,
    rolling_radius: f64,
}

impl Epicycloid {
    /// Creates a new epicycloid.
    ///
    /// # Errors
    ///
    /// Returns an error if either radius is not positive.
    pub fn new(fixed_radius: f64, rolling_radius: f64) -> Result<Self> {
        let fixed_radius = require_positive("R", fixed_radius)?;
        let rolling_radius = require_positive("r", rolling_radius)?;
        Ok(Self {
            fixed_radius,
            rolling_radius,
        })
    }

    /// Returns the radius of the fixed circle.
    #[must_use]
    pub fn fixed_radius(&self) -> f64 {
        self.fixed_radius
    }

    /// Returns the radius of the rolling circle.
    #[must_use]
    pub fn rolling_radius(&self) -> f64 {
        self.rolling_radius
    }
}

impl Curve for Epicycloid {
    fn evaluate(&self, t: f64) -> Point2 {
        let sum = self.fixed_radius + self.rolling_radius;
        let r = self.rolling_radius;
        let k = sum / r;
        Point2::new(
            sum * t.cos() - r * (k * t).cos(),
            sum * t.sin() - r * (k * t).sin(),
        )
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, TAU * self.fixed_radius / self.rolling_radius)
    }

    fn is_closed(&self) -> bool {
        closes_over_domain(self, self.fixed_radius + 2.0 * self.rolling_radius)
    }
}
