use std::cmp::Ordering;

use crate::error::{PlacementError, Result};
use crate::math::distance_2d::{dist, project_clamped};
use crate::math::{along_key, Point2, TOLERANCE};
use crate::plan::{PartId, PlanStore, WallId};

/// Finds the closest valid location on a wall where a part of a given width
/// fits without overlapping the parts already attached there.
pub struct PlacePart {
    wall: WallId,
    width: f64,
    desired: Point2,
    ignore: Option<PartId>,
}

impl PlacePart {
    /// Creates a new `PlacePart` query.
    ///
    /// `ignore` names a part whose footprint should not count as an
    /// obstacle — pass the part being re-placed when it is already attached
    /// to this wall.
    #[must_use]
    pub fn new(wall: WallId, width: f64, desired: Point2, ignore: Option<PartId>) -> Self {
        Self {
            wall,
            width,
            desired,
            ignore,
        }
    }

    /// Executes the query, returning the placement point.
    ///
    /// Once part footprint endpoints and wall endpoints are ordered along
    /// the wall, free stretches alternate with occupied footprints, so the
    /// candidate stretches are the consecutive even/odd pairs. Among the
    /// stretches wide enough for the part, the one whose nearer end is
    /// closest to the desired location wins; the desired location is then
    /// projected onto that stretch, inset by half the part width from each
    /// end so the whole footprint stays inside.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::NotEnoughRoom`] if no free stretch is wide
    /// enough, leaving the store untouched. The caller surfaces the message
    /// and must not attach the part.
    pub fn execute(&self, store: &PlanStore) -> Result<Point2> {
        if self.width <= 0.0 {
            return Err(PlacementError::NonPositiveWidth(self.width).into());
        }
        let wall = store.wall(self.wall)?;

        let mut points = vec![wall.start, wall.end];
        for (id, part) in store.parts_on(self.wall) {
            if Some(id) == self.ignore {
                continue;
            }
            let (a, b) = part.footprint(wall)?;
            points.push(a);
            points.push(b);
        }
        points.sort_by(|a, b| {
            along_key(a)
                .partial_cmp(&along_key(b))
                .unwrap_or(Ordering::Equal)
        });

        let mut best: Option<(Point2, Point2, f64)> = None;
        for pair in points.chunks_exact(2) {
            let (s0, s1) = (pair[0], pair[1]);
            if dist(&s0, &s1) + TOLERANCE < self.width {
                continue;
            }
            let near = dist(&self.desired, &s0).min(dist(&self.desired, &s1));
            if best.is_none_or(|(_, _, d)| near < d) {
                best = Some((s0, s1, near));
            }
        }

        let Some((s0, s1, _)) = best else {
            tracing::trace!(width = self.width, "no free stretch wide enough");
            return Err(PlacementError::NotEnoughRoom.into());
        };

        let span = dist(&s0, &s1);
        let dir = (s1 - s0) / span;
        let lo = s0 + dir * (self.width / 2.0);
        let hi = s1 - dir * (self.width / 2.0);
        Ok(project_clamped(&self.desired, &lo, &hi))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::plan::{PartData, PartKind, WallData};

    fn store_with_wall(len: f64) -> (PlanStore, WallId) {
        let mut store = PlanStore::new();
        let wall = store.add_wall(WallData::new(
            Point2::new(0.0, 0.0),
            Point2::new(len, 0.0),
            5.0,
        ));
        (store, wall)
    }

    fn attach(store: &mut PlanStore, wall: WallId, width: f64, x: f64) -> PartId {
        let id = store.add_part(PartData::new(PartKind::Door, width));
        let part = store.part_mut(id).unwrap();
        part.wall = Some(wall);
        part.position = Point2::new(x, 0.0);
        id
    }

    #[test]
    fn midpoint_on_empty_wall_stays_put() {
        let (store, wall) = store_with_wall(100.0);
        let p = PlacePart::new(wall, 30.0, Point2::new(50.0, 0.0), None)
            .execute(&store)
            .unwrap();
        assert!((p.x - 50.0).abs() < TOLERANCE && p.y.abs() < TOLERANCE);
        // Equidistant from both wall endpoints.
        assert!((dist(&p, &Point2::new(0.0, 0.0)) - dist(&p, &Point2::new(100.0, 0.0))).abs()
            < TOLERANCE);
    }

    #[test]
    fn desired_near_end_clamps_to_half_width_inset() {
        let (store, wall) = store_with_wall(100.0);
        let p = PlacePart::new(wall, 30.0, Point2::new(2.0, 0.0), None)
            .execute(&store)
            .unwrap();
        assert!((p.x - 15.0).abs() < TOLERANCE, "p={p:?}");
    }

    #[test]
    fn exact_fit_centers_in_stretch() {
        let (store, wall) = store_with_wall(30.0);
        let p = PlacePart::new(wall, 30.0, Point2::new(1.0, 0.0), None)
            .execute(&store)
            .unwrap();
        assert!((p.x - 15.0).abs() < TOLERANCE, "p={p:?}");
    }

    #[test]
    fn occupied_middle_diverts_to_free_stretch() {
        let (mut store, wall) = store_with_wall(100.0);
        // Footprint [30, 70] leaves free stretches [0, 30] and [70, 100].
        attach(&mut store, wall, 40.0, 50.0);

        let p = PlacePart::new(wall, 20.0, Point2::new(55.0, 0.0), None)
            .execute(&store)
            .unwrap();
        // Nearer free stretch is [70, 100]; placement is clamped to its
        // low inset at 80.
        assert!((p.x - 80.0).abs() < TOLERANCE, "p={p:?}");
    }

    #[test]
    fn rejection_leaves_existing_parts_unchanged() {
        let (mut store, wall) = store_with_wall(100.0);
        let existing = attach(&mut store, wall, 60.0, 50.0);

        // Free stretches are [0, 20] and [80, 100]: nothing fits 30.
        let err = PlacePart::new(wall, 30.0, Point2::new(50.0, 0.0), None).execute(&store);
        assert!(err.is_err());
        let part = store.part(existing).unwrap();
        assert!((part.position.x - 50.0).abs() < TOLERANCE);
        assert!((part.width - 60.0).abs() < TOLERANCE);
    }

    #[test]
    fn part_wider_than_wall_is_rejected() {
        let (store, wall) = store_with_wall(20.0);
        let err = PlacePart::new(wall, 30.0, Point2::new(10.0, 0.0), None).execute(&store);
        assert!(err.is_err());
    }

    #[test]
    fn ignored_part_does_not_block_itself() {
        let (mut store, wall) = store_with_wall(100.0);
        let me = attach(&mut store, wall, 40.0, 50.0);

        let p = PlacePart::new(wall, 40.0, Point2::new(50.0, 0.0), Some(me))
            .execute(&store)
            .unwrap();
        assert!((p.x - 50.0).abs() < TOLERANCE, "p={p:?}");
    }

    #[test]
    fn non_positive_width_is_rejected() {
        let (store, wall) = store_with_wall(100.0);
        let err = PlacePart::new(wall, 0.0, Point2::new(50.0, 0.0), None).execute(&store);
        assert!(err.is_err());
    }
}
