use crate::error::{GeometryError, PlanError, Result};
use crate::math::distance_2d::dist;
use crate::math::{Point2, TOLERANCE};
use crate::plan::{PartId, PlanStore};

/// The free interval a wall part may slide or grow within.
///
/// `point1` bounds the part on the left-or-above side, `point2` on the
/// right-or-below side. Dragging projects the part onto the segment between
/// them; resizing is limited by the nearer of the two.
#[derive(Debug, Clone, Copy)]
pub struct Stretch {
    pub point1: Point2,
    pub point2: Point2,
}

impl Stretch {
    /// Span of the stretch segment.
    #[must_use]
    pub fn span(&self) -> f64 {
        dist(&self.point1, &self.point2)
    }

    /// Largest width a part centered at `position` may grow to before one
    /// of its footprint edges reaches a bounding point.
    #[must_use]
    pub fn max_width(&self, position: &Point2) -> f64 {
        2.0 * dist(position, &self.point1).min(dist(position, &self.point2))
    }
}

/// Computes the two bounding points limiting how far an attached part may
/// slide or resize along its wall.
pub struct StretchLimits {
    part: PartId,
}

impl StretchLimits {
    /// Creates a new `StretchLimits` query.
    #[must_use]
    pub fn new(part: PartId) -> Self {
        Self { part }
    }

    /// Executes the query.
    ///
    /// Every other attached part contributes its two footprint endpoints,
    /// and the wall contributes its own endpoints. Each point is classified
    /// as left-or-above (x less than the part's, or equal x and greater y)
    /// or right-or-below, and the closest point of each class bounds the
    /// part on that side.
    ///
    /// # Errors
    ///
    /// Returns an error if the part is unattached, an entity is missing, or
    /// the classification leaves one side empty (degenerate geometry).
    pub fn execute(&self, store: &PlanStore) -> Result<Stretch> {
        let part = store.part(self.part)?;
        let wall_id = part.wall.ok_or(PlanError::PartNotAttached)?;
        let wall = store.wall(wall_id)?;
        let pos = part.position;

        let mut candidates = vec![wall.start, wall.end];
        for (id, other) in store.parts_on(wall_id) {
            if id == self.part {
                continue;
            }
            let (a, b) = other.footprint(wall)?;
            candidates.push(a);
            candidates.push(b);
        }

        let mut left: Option<Point2> = None;
        let mut right: Option<Point2> = None;
        for p in candidates {
            let side = if p.x < pos.x - TOLERANCE {
                &mut left
            } else if (p.x - pos.x).abs() <= TOLERANCE && p.y > pos.y {
                &mut left
            } else {
                &mut right
            };
            if side.is_none_or(|s| dist(&p, &pos) < dist(&s, &pos)) {
                *side = Some(p);
            }
        }

        match (left, right) {
            (Some(point1), Some(point2)) => Ok(Stretch { point1, point2 }),
            _ => Err(GeometryError::Degenerate(
                "part has no bounding point on one side".to_owned(),
            )
            .into()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::plan::{PartData, PartKind, WallData, WallId};

    fn horizontal_setup() -> (PlanStore, WallId, PartId) {
        let mut store = PlanStore::new();
        let wall = store.add_wall(WallData::new(
            Point2::new(0.0, 0.0),
            Point2::new(100.0, 0.0),
            5.0,
        ));
        let part = store.add_part(PartData::new(PartKind::Door, 20.0));
        let data = store.part_mut(part).unwrap();
        data.wall = Some(wall);
        data.position = Point2::new(50.0, 0.0);
        (store, wall, part)
    }

    #[test]
    fn lone_part_is_bounded_by_wall_endpoints() {
        let (store, _, part) = horizontal_setup();
        let stretch = StretchLimits::new(part).execute(&store).unwrap();
        assert!(stretch.point1.x.abs() < TOLERANCE);
        assert!((stretch.point2.x - 100.0).abs() < TOLERANCE);
        assert!((stretch.span() - 100.0).abs() < TOLERANCE);
    }

    #[test]
    fn neighbor_footprints_tighten_the_bounds() {
        let (mut store, wall, part) = horizontal_setup();
        // Neighbor footprint [10, 30] on the left, [70, 90] on the right.
        for x in [20.0, 80.0] {
            let id = store.add_part(PartData::new(PartKind::Window, 20.0));
            let data = store.part_mut(id).unwrap();
            data.wall = Some(wall);
            data.position = Point2::new(x, 0.0);
        }

        let stretch = StretchLimits::new(part).execute(&store).unwrap();
        assert!((stretch.point1.x - 30.0).abs() < TOLERANCE, "{stretch:?}");
        assert!((stretch.point2.x - 70.0).abs() < TOLERANCE, "{stretch:?}");
    }

    #[test]
    fn vertical_wall_classifies_by_y_on_equal_x() {
        let mut store = PlanStore::new();
        let wall = store.add_wall(WallData::new(
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 100.0),
            5.0,
        ));
        let part = store.add_part(PartData::new(PartKind::Door, 20.0));
        let data = store.part_mut(part).unwrap();
        data.wall = Some(wall);
        data.position = Point2::new(0.0, 40.0);

        let stretch = StretchLimits::new(part).execute(&store).unwrap();
        // Greater y is the left-or-above side.
        assert!((stretch.point1.y - 100.0).abs() < TOLERANCE, "{stretch:?}");
        assert!(stretch.point2.y.abs() < TOLERANCE, "{stretch:?}");
    }

    #[test]
    fn max_width_doubles_the_nearer_gap() {
        let (store, _, part) = horizontal_setup();
        let stretch = StretchLimits::new(part).execute(&store).unwrap();
        let data = store.part(part).unwrap();
        // 50 to either endpoint; growing symmetrically allows 100.
        assert!((stretch.max_width(&data.position) - 100.0).abs() < TOLERANCE);
    }

    #[test]
    fn unattached_part_is_an_error() {
        let mut store = PlanStore::new();
        let part = store.add_part(PartData::new(PartKind::Door, 20.0));
        assert!(StretchLimits::new(part).execute(&store).is_err());
    }
}
