mod cycloid;
mod epicycloid;
mod hypocycloid;
mod lemniscate;

pub use cycloid::Cycloid;
pub use epicycloid::Epicycloid;
pub use hypocycloid::Hypocycloid;
pub use lemniscate::Lemniscate;

use crate::math::Point2;

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl CurveDomain {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }
}

/// Trait for planar parametric curves.
///
/// Evaluation is total: every finite `t` maps to a finite point. Validation
/// happens once, when the curve is constructed.
pub trait Curve {
    /// Evaluates the curve at parameter `t`.
    fn evaluate(&self, t: f64) -> Point2;

    /// Returns the parameter range covering exactly one period of the curve.
    fn domain(&self) -> CurveDomain;

    /// Returns whether one period of the curve ends where it started.
    fn is_closed(&self) -> bool;
}

/// Checks whether a curve returns to its start point over its domain,
/// with a tolerance scaled by `extent`.
fn closes_over_domain(curve: &impl Curve, extent: f64) -> bool {
    let domain = curve.domain();
    let start = curve.evaluate(domain.t_min);
    let end = curve.evaluate(domain.t_max);
    (end - start).norm() < 1e-9 * extent.max(1.0)
}
