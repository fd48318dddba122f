pub mod curve;

pub use curve::{Curve, CurveDomain, Cycloid, Epicycloid, Hypocycloid, Lemniscate};
