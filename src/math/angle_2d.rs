use std::cmp::Ordering;

use super::{Point2, TOLERANCE};

/// Angle of the ray `center`→`p` in degrees, normalized to `[0, 360)`.
///
/// Angles follow the host canvas convention: the y axis grows downward, so
/// increasing angle is a clockwise turn on screen.
#[must_use]
pub fn ray_angle(center: &Point2, p: &Point2) -> f64 {
    (p.y - center.y)
        .atan2(p.x - center.x)
        .to_degrees()
        .rem_euclid(360.0)
}

/// Clockwise sweep in degrees from angle `from` to angle `to`.
#[must_use]
pub fn sweep_between(from: f64, to: f64) -> f64 {
    (to - from).rem_euclid(360.0)
}

/// Half-plane index used to split the circle before the cross-product test:
/// rays with angle in `[0, 180)` come before rays in `[180, 360)`.
fn half(x: f64, y: f64) -> u8 {
    u8::from(!(y > 0.0 || (y == 0.0 && x > 0.0)))
}

/// Clockwise ordering of two points around `center`.
///
/// Uses a cross-product comparator rather than computing angles; collinear
/// rays tie-break by distance to the center, nearer first.
#[must_use]
pub fn clockwise_cmp(center: &Point2, a: &Point2, b: &Point2) -> Ordering {
    let (ax, ay) = (a.x - center.x, a.y - center.y);
    let (bx, by) = (b.x - center.x, b.y - center.y);

    let (ha, hb) = (half(ax, ay), half(bx, by));
    if ha != hb {
        return ha.cmp(&hb);
    }

    let cross = ax * by - ay * bx;
    if cross.abs() > TOLERANCE {
        return if cross > 0.0 {
            Ordering::Less
        } else {
            Ordering::Greater
        };
    }

    let da = ax * ax + ay * ay;
    let db = bx * bx + by * by;
    da.partial_cmp(&db).unwrap_or(Ordering::Equal)
}

/// Sorts `points` clockwise around `center`.
pub fn sort_clockwise(center: &Point2, points: &mut [Point2]) {
    points.sort_by(|a, b| clockwise_cmp(center, a, b));
}
