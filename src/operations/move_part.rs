use crate::error::{PlanError, Result};
use crate::math::distance_2d::{dist, project_clamped};
use crate::math::Point2;
use crate::plan::{PartId, PlanStore};

use super::StretchLimits;

/// Slides an attached part toward a desired location, constrained to its
/// free stretch.
pub struct MovePart {
    part: PartId,
    desired: Point2,
}

impl MovePart {
    /// Creates a new `MovePart` operation.
    #[must_use]
    pub fn new(part: PartId, desired: Point2) -> Self {
        Self { part, desired }
    }

    /// Executes the move, returning the committed position.
    ///
    /// The desired location is projected onto the stretch segment, inset by
    /// half the part width from each bounding point so the footprint never
    /// crosses a bound.
    ///
    /// # Errors
    ///
    /// Returns an error if the part is missing or unattached.
    pub fn execute(&self, store: &mut PlanStore) -> Result<Point2> {
        let part = store.part(self.part)?;
        if part.wall.is_none() {
            return Err(PlanError::PartNotAttached.into());
        }
        let width = part.width;

        let stretch = StretchLimits::new(self.part).execute(store)?;
        let span = stretch.span();

        // The footprint invariant keeps span >= width for an attached part.
        let position = if span <= width {
            nalgebra::center(&stretch.point1, &stretch.point2)
        } else {
            let dir = (stretch.point2 - stretch.point1) / span;
            let lo = stretch.point1 + dir * (width / 2.0);
            let hi = stretch.point2 - dir * (width / 2.0);
            project_clamped(&self.desired, &lo, &hi)
        };

        store.part_mut(self.part)?.position = position;
        tracing::trace!(?position, moved = dist(&position, &self.desired), "part moved");
        Ok(position)
    }
}
