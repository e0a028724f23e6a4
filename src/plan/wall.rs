use crate::error::GeometryError;
use crate::math::{along_key, Point2, Vector2, TOLERANCE};

slotmap::new_key_type! {
    /// Unique identifier for a wall in the plan store.
    pub struct WallId;
}

/// A straight wall between two endpoints, with a stroke thickness.
///
/// The wall's centerline is the segment `start`→`end`; attached parts are
/// positioned on that centerline.
#[derive(Debug, Clone)]
pub struct WallData {
    pub start: Point2,
    pub end: Point2,
    pub thickness: f64,
}

impl WallData {
    /// Creates a new wall between two endpoints.
    #[must_use]
    pub fn new(start: Point2, end: Point2, thickness: f64) -> Self {
        Self {
            start,
            end,
            thickness,
        }
    }

    /// Centerline length.
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    /// Centerline midpoint.
    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        nalgebra::center(&self.start, &self.end)
    }

    /// Wall direction angle in degrees, normalized to `[0, 360)`.
    #[must_use]
    pub fn angle(&self) -> f64 {
        crate::math::angle_2d::ray_angle(&self.start, &self.end)
    }

    /// Unit direction vector from `start` to `end`.
    ///
    /// # Errors
    ///
    /// Returns an error if the wall has zero length.
    pub fn direction(&self) -> Result<Vector2, GeometryError> {
        let d = self.end - self.start;
        let len = d.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroLengthWall);
        }
        Ok(d / len)
    }

    /// The two endpoints ordered by the along-wall key, low end first.
    #[must_use]
    pub fn ordered_endpoints(&self) -> (Point2, Point2) {
        if along_key(&self.start) <= along_key(&self.end) {
            (self.start, self.end)
        } else {
            (self.end, self.start)
        }
    }
}
