use thiserror::Error;

/// Top-level error type for the roulette curve engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouletteError {
    #[error(transparent)]
    InvalidParameter(#[from] ParameterError),

    #[error(transparent)]
    DegenerateDomain(#[from] DomainError),
}

/// A rejected parameter update.
///
/// Every variant names the field it was raised for, so a shell can attach
/// the message to the offending widget.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    #[error("{field} = {value} must be positive")]
    NonPositive { field: &'static str, value: f64 },

    #[error("{field} = {value} must not be negative")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} = {value} is not a finite number")]
    NotFinite { field: &'static str, value: f64 },

    #[error("{field}: {input:?} is not a number")]
    NotNumeric { field: &'static str, input: String },

    #[error("{field} = {steps} is below the minimum of 2 samples")]
    TooFewSteps { field: &'static str, steps: i64 },

    #[error("{field} = {steps} exceeds the maximum of {max} samples")]
    TooManySteps {
        field: &'static str,
        steps: i64,
        max: usize,
    },

    #[error("{field} must be an integer")]
    NotAnInteger { field: &'static str },

    #[error("{field} must be a color name")]
    NotAColor { field: &'static str },

    #[error("viewport end {end} must be greater than start {start}")]
    InvertedViewport { start: f64, end: f64 },

    #[error("{family} has no parameter named {field:?}")]
    UnknownField { family: &'static str, field: String },
}

impl ParameterError {
    /// Returns the name of the field this error was raised for.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::NonPositive { field, .. }
            | Self::Negative { field, .. }
            | Self::NotFinite { field, .. }
            | Self::NotNumeric { field, .. }
            | Self::TooFewSteps { field, .. }
            | Self::TooManySteps { field, .. }
            | Self::NotAnInteger { field }
            | Self::NotAColor { field } => *field,
            Self::InvertedViewport { .. } => "end_pos",
            Self::UnknownField { field, .. } => field.as_str(),
        }
    }
}

/// Errors related to sample domains.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("sample domain [{t}, {t}] has zero length")]
    ZeroLength { t: f64 },

    #[error("sample domain is reversed: t_min = {t_min} > t_max = {t_max}")]
    Reversed { t_min: f64, t_max: f64 },

    #[error("sample domain needs at least 2 points, got {0}")]
    TooFewSamples(usize),

    #[error("sample domain allows at most {max} points, got {count}")]
    TooManySamples { count: usize, max: usize },

    #[error("sample domain bounds must be finite")]
    NotFinite,
}

/// Convenience type alias for results using [`RouletteError`].
pub type Result<T> = std::result::Result<T, RouletteError>;
