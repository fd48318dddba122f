use std::f64::consts::TAU;

use crate::error::Result;
use crate::math::Point2;
use crate::params::{require_finite, require_positive};

use super::{Curve, CurveDomain};

/// The path traced by a point on the rim of a circle rolling along the x axis.
///
/// `P(t) = (radius * (t - sin t) + shift, radius * (1 - cos t))`
///
/// `shift` moves the origin of the rolling circle along x. The curve is
/// periodic in `t` with period `2*pi` and never dips below the x axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cycloid {
    radius: f64,
    shift: f64,
}

impl Cycloid {
    /// Creates a new cycloid.
    ///
    /// # Errors
    ///
    /// Returns an error if `radius` is not positive or `shift` is not finite.
    pub fn new(radius: f64, shift: f64) -> Result<Self> {
        let radius = require_positive("radius", radius)?;
        let shift = require_finite("shift", shift)?;
        Ok(Self { radius, shift })
    }

    /// Returns the radius of the rolling circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the horizontal offset of the rolling circle's origin.
    #[must_use]
    pub fn shift(&self) -> f64 {
        self.shift
    }
}

impl Curve for Cycloid {
    fn evaluate(&self, t: f64) -> Point2 {
        let (sin, cos) = t.sin_cos();
        Point2::new(
            self.radius * (t - sin) + self.shift,
            self.radius * (1.0 - cos),
        )
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, TAU)
    }

    fn is_closed(&self) -> bool {
        false
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn starts_at_shifted_origin() {
        let c = Cycloid::new(2.0, 0.0).unwrap();
        assert_abs_diff_eq!(c.evaluate(0.0), Point2::origin(), epsilon = 1e-12);

        let c = Cycloid::new(2.0, -3.5).unwrap();
        assert_abs_diff_eq!(c.evaluate(0.0), Point2::new(-3.5, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn apex_at_pi() {
        let c = Cycloid::new(2.0, 0.0).unwrap();
        let p = c.evaluate(PI);
        assert_abs_diff_eq!(p.x, 2.0 * PI, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn height_stays_within_diameter() {
        for radius in [0.1, 1.0, 2.0, 4.9] {
            let c = Cycloid::new(radius, 1.0).unwrap();
            for i in 0..=2000_i32 {
                let t = -20.0 + f64::from(i) * 0.037;
                let y = c.evaluate(t).y;
                assert!(y >= 0.0, "y = {y} below axis at t = {t}");
                assert!(y <= 2.0 * radius + 1e-12, "y = {y} above 2r at t = {t}");
            }
        }
    }

    #[test]
    fn one_arch_advances_by_circumference() {
        let c = Cycloid::new(1.5, 0.0).unwrap();
        let end = c.evaluate(TAU);
        assert_abs_diff_eq!(end, Point2::new(1.5 * TAU, 0.0), epsilon = 1e-12);
        assert!(!c.is_closed());
    }

    #[test]
    fn rejects_non_positive_radius() {
        assert!(Cycloid::new(0.0, 0.0).is_err());
        assert!(Cycloid::new(-1.0, 0.0).is_err());
    }

    #[test]
    fn rejects_non_finite_shift() {
        assert!(Cycloid::new(1.0, f64::NAN).is_err());
    }
}
