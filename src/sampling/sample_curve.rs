use crate::geometry::Curve;

use super::{Polyline, SampleDomain};

/// Samples a curve at evenly spaced parameters over a domain.
pub struct SampleCurve {
    domain: SampleDomain,
}

impl SampleCurve {
    /// Creates a new `SampleCurve` operation.
    #[must_use]
    pub fn new(domain: SampleDomain) -> Self {
        Self { domain }
    }

    /// Executes the sampling, returning one vertex per sample parameter.
    #[must_use]
    pub fn execute(&self, curve: &impl Curve) -> Polyline {
        let mut points = Vec::with_capacity(self.domain.count());
        points.extend(self.domain.parameters().map(|t| curve.evaluate(t)));
        Polyline { points }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{Cycloid, Epicycloid, Hypocycloid};
    use crate::math::Point2;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{PI, TAU};

    #[test]
    fn cycloid_over_one_arch() {
        let c = Cycloid::new(2.0, 0.0).unwrap();
        let line = SampleCurve::new(SampleDomain::new(0.0, TAU, 3).unwrap()).execute(&c);
        assert_eq!(line.len(), 3);
        assert_abs_diff_eq!(line.points[0], Point2::origin(), epsilon = 1e-12);
        assert_abs_diff_eq!(line.points[1], Point2::new(2.0 * PI, 4.0), epsilon = 1e-12);
        assert_abs_diff_eq!(line.points[2], Point2::new(4.0 * PI, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn closed_families_return_to_start() {
        let e = Epicycloid::new(3.0, 1.0).unwrap();
        let line = SampleCurve::new(SampleDomain::over(e.domain(), 1000).unwrap()).execute(&e);
        assert_abs_diff_eq!(*line.first().unwrap(), *line.last().unwrap(), epsilon = 1e-9);

        let h = Hypocycloid::new(5.0, 1.0).unwrap();
        let line = SampleCurve::new(SampleDomain::over(h.domain(), 1000).unwrap()).execute(&h);
        assert_abs_diff_eq!(*line.first().unwrap(), *line.last().unwrap(), epsilon = 1e-9);
    }

    #[test]
    fn identical_inputs_give_identical_output() {
        let e = Epicycloid::new(2.5, 0.7).unwrap();
        let op = SampleCurve::new(SampleDomain::over(e.domain(), 257).unwrap());
        assert_eq!(op.execute(&e), op.execute(&e));
    }
}
