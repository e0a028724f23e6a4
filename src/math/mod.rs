pub mod angle_2d;
pub mod distance_2d;
pub mod intersect_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Stable ordering proxy for points lying on a common wall.
///
/// Walls are rendered in screen coordinates where both axes grow together
/// along most wall directions, so `x + y` gives a cheap monotone key for
/// sorting endpoints from one end of a wall to the other.
#[must_use]
pub fn along_key(p: &Point2) -> f64 {
    p.x + p.y
}

/// Tolerance-based equality of two points.
#[must_use]
pub fn points_coincide(a: &Point2, b: &Point2) -> bool {
    (a.x - b.x).abs() < TOLERANCE && (a.y - b.y).abs() < TOLERANCE
}
