use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::math::Point2;

use super::wall::{WallData, WallId};

slotmap::new_key_type! {
    /// Unique identifier for a wall part in the plan store.
    pub struct PartId;
}

/// What kind of opening a wall part represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartKind {
    Door,
    Window,
}

/// A door or window hosted by a wall.
///
/// An unattached part (`wall == None`) floats freely; once attached, its
/// `position` lies on the owner wall's centerline and its footprint never
/// overlaps another attached part's footprint on the same wall.
#[derive(Debug, Clone)]
pub struct PartData {
    pub kind: PartKind,
    pub width: f64,
    pub position: Point2,
    pub angle: f64,
    pub wall: Option<WallId>,
}

impl PartData {
    /// Creates a new unattached part at the origin.
    #[must_use]
    pub fn new(kind: PartKind, width: f64) -> Self {
        Self {
            kind,
            width,
            position: Point2::origin(),
            angle: 0.0,
            wall: None,
        }
    }

    /// Linear extent `[position - width/2, position + width/2]` the part
    /// occupies along the owner wall, as two endpoint coordinates.
    ///
    /// # Errors
    ///
    /// Returns an error if the wall has zero length.
    pub fn footprint(&self, wall: &WallData) -> Result<(Point2, Point2), GeometryError> {
        let dir = wall.direction()?;
        let half = dir * (self.width / 2.0);
        Ok((self.position - half, self.position + half))
    }
}
