use super::{points_coincide, Point2, TOLERANCE};

/// Standard-form coefficients `a·x + b·y = c` of the infinite line through
/// segment `start`→`end`, with `a = Δy` and `b = -Δx`.
fn standard_form(start: &Point2, end: &Point2) -> (f64, f64, f64) {
    let a = end.y - start.y;
    let b = start.x - end.x;
    let c = a * start.x + b * start.y;
    (a, b, c)
}

/// Checks that `p` lies within the axis-aligned bounding box of segment
/// `start`→`end`, with tolerance slack on each bound.
fn within_segment_bounds(p: &Point2, start: &Point2, end: &Point2) -> bool {
    let (min_x, max_x) = if start.x <= end.x {
        (start.x, end.x)
    } else {
        (end.x, start.x)
    };
    let (min_y, max_y) = if start.y <= end.y {
        (start.y, end.y)
    } else {
        (end.y, start.y)
    };
    p.x >= min_x - TOLERANCE
        && p.x <= max_x + TOLERANCE
        && p.y >= min_y - TOLERANCE
        && p.y <= max_y + TOLERANCE
}

/// Returns the endpoint shared by the two segments, if any.
///
/// This is the only way two parallel segments can meet.
fn shared_endpoint(
    a_start: &Point2,
    a_end: &Point2,
    b_start: &Point2,
    b_end: &Point2,
) -> Option<Point2> {
    for a in [a_start, a_end] {
        for b in [b_start, b_end] {
            if points_coincide(a, b) {
                return Some(*a);
            }
        }
    }
    None
}

/// Intersection of two wall centerlines, restricted to both finite segments.
///
/// Solves the standard-form 2×2 system by Cramer's rule. A determinant
/// within [`TOLERANCE`] of zero means the lines are parallel; parallel
/// segments intersect only at a shared endpoint. Otherwise the solved point
/// must fall inside both segments' bounding boxes to count — this confirms
/// containment in the finite segments, not just the infinite lines.
#[must_use]
pub fn segment_segment_intersect(
    a_start: &Point2,
    a_end: &Point2,
    b_start: &Point2,
    b_end: &Point2,
) -> Option<Point2> {
    let (a1, b1, c1) = standard_form(a_start, a_end);
    let (a2, b2, c2) = standard_form(b_start, b_end);

    let det = a1 * b2 - a2 * b1;
    if det.abs() < TOLERANCE {
        return shared_endpoint(a_start, a_end, b_start, b_end);
    }

    let p = Point2::new((b2 * c1 - b1 * c2) / det, (a1 * c2 - a2 * c1) / det);

    if within_segment_bounds(&p, a_start, a_end) && within_segment_bounds(&p, b_start, b_end) {
        Some(p)
    } else {
        None
    }
}
