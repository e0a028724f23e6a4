use crate::error::{PlacementError, Result};
use crate::math::TOLERANCE;
use crate::plan::{PartId, PlanStore};

use super::StretchLimits;

/// Changes a part's width, bounded by its stretch when attached.
pub struct ResizePart {
    part: PartId,
    width: f64,
}

impl ResizePart {
    /// Creates a new `ResizePart` operation.
    #[must_use]
    pub fn new(part: PartId, width: f64) -> Self {
        Self { part, width }
    }

    /// Executes the resize.
    ///
    /// An attached part grows symmetrically about its position, so the new
    /// width may not exceed twice the distance to the nearer bounding
    /// point.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::NotEnoughRoom`] when the requested width
    /// does not fit, or [`PlacementError::NonPositiveWidth`] for a
    /// non-positive width; the part keeps its current width in both cases.
    pub fn execute(&self, store: &mut PlanStore) -> Result<()> {
        if self.width <= 0.0 {
            return Err(PlacementError::NonPositiveWidth(self.width).into());
        }

        if store.part(self.part)?.wall.is_some() {
            let stretch = StretchLimits::new(self.part).execute(store)?;
            let position = store.part(self.part)?.position;
            if self.width > stretch.max_width(&position) + TOLERANCE {
                return Err(PlacementError::NotEnoughRoom.into());
            }
        }

        store.part_mut(self.part)?.width = self.width;
        Ok(())
    }
}
