pub mod animation;
pub mod error;
pub mod geometry;
pub mod math;
pub mod params;
pub mod sampling;

pub use animation::{AnimationController, Frame, StaticPlot};
pub use error::{Result, RouletteError};
pub use params::{Family, ParamValue, ParameterSet};
