/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Converts polar coordinates to a cartesian point.
#[must_use]
pub fn from_polar(rho: f64, theta: f64) -> Point2 {
    let (sin, cos) = theta.sin_cos();
    Point2::new(rho * cos, rho * sin)
}
