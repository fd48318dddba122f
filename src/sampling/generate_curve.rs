use crate::error::Result;
use crate::geometry::Curve;
use crate::params::{Family, ParameterSet};

use super::{Polyline, SampleCurve, SampleDomain, DEFAULT_SAMPLES};

/// Maps a parameter set and a sample domain to a sampled curve.
///
/// Pure: the same inputs always produce the same polyline, and nothing is
/// retained between calls.
pub struct GenerateCurve<'a> {
    params: &'a ParameterSet,
    domain: SampleDomain,
}

impl<'a> GenerateCurve<'a> {
    /// Creates a new `GenerateCurve` operation over an explicit domain.
    #[must_use]
    pub fn new(params: &'a ParameterSet, domain: SampleDomain) -> Self {
        Self { params, domain }
    }

    /// Creates a `GenerateCurve` operation over exactly one period of the
    /// family: `[0, 2*pi * R / r]` for the epi- and hypocycloid, `[0, 2*pi]`
    /// for the lemniscate and for one cycloid arch.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters do not describe a valid curve.
    pub fn full_period(params: &'a ParameterSet) -> Result<Self> {
        let (domain, count) = match params {
            ParameterSet::Cycloid(_) => (params.cycloid()?.domain(), DEFAULT_SAMPLES),
            ParameterSet::Epicycloid(p) => (params.epicycloid()?.domain(), p.steps()),
            ParameterSet::Hypocycloid(p) => (params.hypocycloid()?.domain(), p.steps()),
            ParameterSet::Lemniscate(p) => (params.lemniscate()?.domain(), p.steps()),
        };
        Ok(Self::new(params, SampleDomain::over(domain, count)?))
    }

    /// Returns the domain this operation samples.
    #[must_use]
    pub fn domain(&self) -> SampleDomain {
        self.domain
    }

    /// Executes the generation, returning the sampled curve.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters do not describe a valid curve.
    pub fn execute(&self) -> Result<Polyline> {
        let sample = SampleCurve::new(self.domain);
        let line = match self.params.family() {
            Family::Cycloid => sample.execute(&self.params.cycloid()?),
            Family::Epicycloid => sample.execute(&self.params.epicycloid()?),
            Family::Hypocycloid => sample.execute(&self.params.hypocycloid()?),
            Family::Lemniscate => sample.execute(&self.params.lemniscate()?),
        };
        Ok(line)
    }
}
