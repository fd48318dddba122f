use tracing::{debug, warn};

use crate::error::Result;
use crate::params::{ParamValue, ParameterSet, Style};
use crate::sampling::{GenerateCurve, Polyline};

/// One rendered curve with its display attributes.
///
/// Several plots can be overlaid by a shell for comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct Plot {
    pub polyline: Polyline,
    pub label: String,
    pub style: Style,
}

/// One-shot controller for the closed families.
///
/// There is no drive time: each accepted change re-samples one full period
/// and emits a new [`Plot`]. A rejected change emits nothing.
#[derive(Debug, Clone)]
pub struct StaticPlot {
    params: ParameterSet,
    style: Style,
}

impl StaticPlot {
    /// Creates a plot with the family's default style.
    #[must_use]
    pub fn new(params: ParameterSet) -> Self {
        let style = Style::for_family(params.family());
        Self { params, style }
    }

    #[must_use]
    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    #[must_use]
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Samples one full period of the current curve.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored parameters cannot form a curve.
    pub fn render(&self) -> Result<Plot> {
        let op = GenerateCurve::full_period(&self.params)?;
        debug!(
            family = %self.params.family(),
            t_max = op.domain().t_max(),
            count = op.domain().count(),
            "sampling full period"
        );
        Ok(Plot {
            polyline: op.execute()?,
            label: self.params.label(),
            style: self.style.clone(),
        })
    }

    /// Validates and stores a widget change, then re-renders.
    ///
    /// # Errors
    ///
    /// Returns [`crate::RouletteError::InvalidParameter`] if the value is
    /// rejected; the stored parameters are unchanged.
    pub fn on_parameter_changed(
        &mut self,
        field: &str,
        value: impl Into<ParamValue>,
    ) -> Result<Plot> {
        let value = value.into();
        let outcome = if Style::handles(field) {
            self.style.set(field, &value)
        } else {
            self.params.set(field, &value)
        };
        if let Err(err) = outcome {
            warn!(field, ?value, %err, "parameter rejected");
            return Err(err.into());
        }
        debug!(field, ?value, "parameter updated");
        self.render()
    }
}
