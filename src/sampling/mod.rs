mod generate_curve;
mod sample_curve;

pub use generate_curve::GenerateCurve;
pub use sample_curve::SampleCurve;

use crate::error::{DomainError, Result};
use crate::geometry::CurveDomain;
use crate::math::{Point2, TOLERANCE};

/// Number of samples used when a family has no sample count of its own.
pub const DEFAULT_SAMPLES: usize = 500;

/// Upper bound on the number of samples in one polyline.
pub const MAX_SAMPLES: usize = 1_000_000;

/// A closed parameter interval `[t_min, t_max]` and the number of evenly
/// spaced samples to take over it, endpoints included.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleDomain {
    t_min: f64,
    t_max: f64,
    count: usize,
}

impl SampleDomain {
    /// Creates a new sample domain.
    ///
    /// # Errors
    ///
    /// Returns an error if the bounds are not finite, the interval is shorter
    /// than [`TOLERANCE`] or reversed, or `count` is outside
    /// `2..=`[`MAX_SAMPLES`].
    pub fn new(t_min: f64, t_max: f64, count: usize) -> Result<Self> {
        if !t_min.is_finite() || !t_max.is_finite() {
            return Err(DomainError::NotFinite.into());
        }
        if count < 2 {
            return Err(DomainError::TooFewSamples(count).into());
        }
        if count > MAX_SAMPLES {
            return Err(DomainError::TooManySamples {
                count,
                max: MAX_SAMPLES,
            }
            .into());
        }
        if (t_max - t_min).abs() < TOLERANCE {
            return Err(DomainError::ZeroLength { t: t_min }.into());
        }
        if t_max < t_min {
            return Err(DomainError::Reversed { t_min, t_max }.into());
        }
        Ok(Self {
            t_min,
            t_max,
            count,
        })
    }

    /// Creates a sample domain spanning a curve's parameter range.
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`SampleDomain::new`].
    pub fn over(domain: CurveDomain, count: usize) -> Result<Self> {
        Self::new(domain.t_min, domain.t_max, count)
    }

    #[must_use]
    pub fn t_min(&self) -> f64 {
        self.t_min
    }

    #[must_use]
    pub fn t_max(&self) -> f64 {
        self.t_max
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the sample parameters in increasing order.
    ///
    /// The first value is exactly `t_min` and the last exactly `t_max`.
    #[allow(clippy::cast_precision_loss)]
    pub fn parameters(&self) -> impl Iterator<Item = f64> + '_ {
        let last = self.count - 1;
        let step = (self.t_max - self.t_min) / last as f64;
        (0..self.count).map(move |i| {
            if i == last {
                self.t_max
            } else {
                self.t_min + step * i as f64
            }
        })
    }
}

/// An ordered sequence of sampled points. Insertion order is
/// parametrization order, so the sequence also gives the path direction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    /// The ordered vertices of the polyline.
    pub points: Vec<Point2>,
}

impl Polyline {
    /// Returns the number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns whether the polyline has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the first vertex.
    #[must_use]
    pub fn first(&self) -> Option<&Point2> {
        self.points.first()
    }

    /// Returns the last vertex.
    #[must_use]
    pub fn last(&self) -> Option<&Point2> {
        self.points.last()
    }

    /// Splits the vertices into separate x and y arrays.
    #[must_use]
    pub fn to_xy(&self) -> (Vec<f64>, Vec<f64>) {
        self.points.iter().map(|p| (p.x, p.y)).unzip()
    }
}
