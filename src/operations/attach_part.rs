use crate::error::Result;
use crate::math::Point2;
use crate::plan::{PartId, PlanStore, WallId};

use super::PlacePart;

/// Attaches a part to a wall at the closest valid location to a desired
/// drop point.
pub struct AttachPart {
    part: PartId,
    wall: WallId,
    desired: Point2,
}

impl AttachPart {
    /// Creates a new `AttachPart` operation.
    #[must_use]
    pub fn new(part: PartId, wall: WallId, desired: Point2) -> Self {
        Self {
            part,
            wall,
            desired,
        }
    }

    /// Executes the attachment, returning the committed position.
    ///
    /// The part's angle snaps to the wall's direction angle. If the part is
    /// already attached to this wall its own footprint is not an obstacle.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::PlacementError::NotEnoughRoom`] if no free
    /// stretch fits the part; the part then stays unattached and the store
    /// is unchanged.
    pub fn execute(&self, store: &mut PlanStore) -> Result<Point2> {
        let width = store.part(self.part)?.width;
        let position =
            PlacePart::new(self.wall, width, self.desired, Some(self.part)).execute(store)?;
        let angle = store.wall(self.wall)?.angle();

        let part = store.part_mut(self.part)?;
        part.wall = Some(self.wall);
        part.position = position;
        part.angle = angle;

        tracing::debug!(?position, angle, "part attached to wall");
        Ok(position)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;
    use crate::plan::{PartData, PartKind, WallData};

    #[test]
    fn attach_sets_owner_position_and_angle() {
        let mut store = PlanStore::new();
        let wall = store.add_wall(WallData::new(
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 80.0),
            5.0,
        ));
        let part = store.add_part(PartData::new(PartKind::Door, 30.0));

        let pos = AttachPart::new(part, wall, Point2::new(3.0, 40.0))
            .execute(&mut store)
            .unwrap();
        assert!(pos.x.abs() < TOLERANCE && (pos.y - 40.0).abs() < TOLERANCE);

        let data = store.part(part).unwrap();
        assert_eq!(data.wall, Some(wall));
        assert!((data.angle - 90.0).abs() < TOLERANCE);
    }

    #[test]
    fn failed_attach_leaves_part_unattached() {
        let mut store = PlanStore::new();
        let wall = store.add_wall(WallData::new(
            Point2::new(0.0, 0.0),
            Point2::new(20.0, 0.0),
            5.0,
        ));
        let part = store.add_part(PartData::new(PartKind::Door, 30.0));

        assert!(AttachPart::new(part, wall, Point2::new(10.0, 0.0))
            .execute(&mut store)
            .is_err());
        assert!(store.part(part).unwrap().wall.is_none());
    }
}
