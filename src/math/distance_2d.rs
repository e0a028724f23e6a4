use super::Point2;

/// Returns the minimum distance from point `p` to the line segment `a`→`b`.
#[must_use]
pub fn point_to_segment_dist(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;

    if len_sq < 1e-20 {
        // Degenerate segment (zero length).
        return ((p.x - a.x).powi(2) + (p.y - a.y).powi(2)).sqrt();
    }

    // Project point onto the infinite line, clamp to [0, 1].
    let t = ((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq;
    let t = t.clamp(0.0, 1.0);

    let closest_x = a.x + t * dx;
    let closest_y = a.y + t * dy;

    ((p.x - closest_x).powi(2) + (p.y - closest_y).powi(2)).sqrt()
}

/// Projects `p` onto the segment `a`→`b`, clamped to the segment's extent.
///
/// A degenerate segment (zero length) projects everything onto `a`.
#[must_use]
pub fn project_clamped(p: &Point2, a: &Point2, b: &Point2) -> Point2 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;

    if len_sq < 1e-20 {
        return *a;
    }

    let t = ((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq;
    let t = t.clamp(0.0, 1.0);

    Point2::new(a.x + t * dx, a.y + t * dy)
}

/// Euclidean distance between two points.
#[must_use]
pub fn dist(a: &Point2, b: &Point2) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}
