use std::f64::consts::TAU;

use crate::error::Result;
use crate::math::{from_polar, Point2};
use crate::params::require_positive;

use super::{Curve, CurveDomain};

/// The lemniscate of Bernoulli in polar form, `rho^2 = a^2 cos(2 theta)`.
///
/// Where `cos(2 theta) < 0` the curve has no real point; the radius is
/// clamped to zero there, so sampling over a full turn passes through the
/// origin instead of leaving a gap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lemniscate {
    a: f64,
}

impl Lemniscate {
    /// Creates a new lemniscate with scale `a`.
    ///
    /// # Errors
    ///
    /// Returns an error if `a` is not positive.
    pub fn new(a: f64) -> Result<Self> {
        let a = require_positive("a", a)?;
        Ok(Self { a })
    }

    /// Returns the scale parameter.
    #[must_use]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Returns the polar radius at angle `theta`, zero outside the lobes.
    #[must_use]
    pub fn rho(&self, theta: f64) -> f64 {
        let radicand = self.a * self.a * (2.0 * theta).cos();
        if radicand > 0.0 {
            radicand.sqrt()
        } else {
            0.0
        }
    }
}

impl Curve for Lemniscate {
    fn evaluate(&self, theta: f64) -> Point2 {
        from_polar(self.rho(theta), theta)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, TAU)
    }

    fn is_closed(&self) -> bool {
        true
    }
}
