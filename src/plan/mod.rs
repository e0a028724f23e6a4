pub mod part;
pub mod preferences;
pub mod selection;
pub mod wall;

pub use part::{PartData, PartId, PartKind};
pub use preferences::Preferences;
pub use selection::Selection;
pub use wall::{WallData, WallId};

use crate::error::PlanError;
use slotmap::SlotMap;

/// Central arena that owns all plan entities.
///
/// Entities reference each other via typed IDs (generational indices),
/// avoiding self-referential structures and enabling safe mutation. Every
/// solver takes the store explicitly; there is no ambient scene.
#[derive(Debug, Default)]
pub struct PlanStore {
    walls: SlotMap<WallId, WallData>,
    parts: SlotMap<PartId, PartData>,
}

impl PlanStore {
    /// Creates a new, empty plan store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Wall operations ---

    /// Inserts a wall and returns its ID.
    pub fn add_wall(&mut self, data: WallData) -> WallId {
        self.walls.insert(data)
    }

    /// Returns a reference to the wall data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn wall(&self, id: WallId) -> Result<&WallData, PlanError> {
        self.walls
            .get(id)
            .ok_or_else(|| PlanError::EntityNotFound("wall".into()))
    }

    /// Returns a mutable reference to the wall data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn wall_mut(&mut self, id: WallId) -> Result<&mut WallData, PlanError> {
        self.walls
            .get_mut(id)
            .ok_or_else(|| PlanError::EntityNotFound("wall".into()))
    }

    /// Removes a wall, detaching any parts it hosted.
    pub fn remove_wall(&mut self, id: WallId) {
        if self.walls.remove(id).is_some() {
            for part in self.parts.values_mut() {
                if part.wall == Some(id) {
                    part.wall = None;
                }
            }
        }
    }

    /// Returns true if the wall still exists.
    #[must_use]
    pub fn contains_wall(&self, id: WallId) -> bool {
        self.walls.contains_key(id)
    }

    /// Iterates over all walls.
    pub fn walls(&self) -> impl Iterator<Item = (WallId, &WallData)> {
        self.walls.iter()
    }

    // --- Part operations ---

    /// Inserts a part and returns its ID.
    pub fn add_part(&mut self, data: PartData) -> PartId {
        self.parts.insert(data)
    }

    /// Returns a reference to the part data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn part(&self, id: PartId) -> Result<&PartData, PlanError> {
        self.parts
            .get(id)
            .ok_or_else(|| PlanError::EntityNotFound("part".into()))
    }

    /// Returns a mutable reference to the part data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn part_mut(&mut self, id: PartId) -> Result<&mut PartData, PlanError> {
        self.parts
            .get_mut(id)
            .ok_or_else(|| PlanError::EntityNotFound("part".into()))
    }

    /// Removes a part from the store.
    pub fn remove_part(&mut self, id: PartId) {
        self.parts.remove(id);
    }

    /// Iterates over all parts.
    pub fn parts(&self) -> impl Iterator<Item = (PartId, &PartData)> {
        self.parts.iter()
    }

    /// Iterates over the parts attached to the given wall.
    pub fn parts_on(&self, wall: WallId) -> impl Iterator<Item = (PartId, &PartData)> {
        self.parts
            .iter()
            .filter(move |(_, part)| part.wall == Some(wall))
    }

    /// Detaches a part from its wall, leaving it floating at its position.
    ///
    /// # Errors
    ///
    /// Returns an error if the part is not found.
    pub fn detach_part(&mut self, id: PartId) -> Result<(), PlanError> {
        self.part_mut(id)?.wall = None;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;

    fn wall(x0: f64, y0: f64, x1: f64, y1: f64) -> WallData {
        WallData::new(Point2::new(x0, y0), Point2::new(x1, y1), 5.0)
    }

    #[test]
    fn add_and_lookup_wall() {
        let mut store = PlanStore::new();
        let id = store.add_wall(wall(0.0, 0.0, 10.0, 0.0));
        assert!((store.wall(id).unwrap().length() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn missing_wall_is_an_error() {
        let mut store = PlanStore::new();
        let id = store.add_wall(wall(0.0, 0.0, 10.0, 0.0));
        store.remove_wall(id);
        assert!(store.wall(id).is_err());
    }

    #[test]
    fn removing_a_wall_detaches_its_parts() {
        let mut store = PlanStore::new();
        let w = store.add_wall(wall(0.0, 0.0, 100.0, 0.0));
        let p = store.add_part(PartData::new(PartKind::Door, 30.0));
        store.part_mut(p).unwrap().wall = Some(w);

        store.remove_wall(w);
        assert!(store.part(p).unwrap().wall.is_none());
    }

    #[test]
    fn parts_on_filters_by_owner() {
        let mut store = PlanStore::new();
        let w1 = store.add_wall(wall(0.0, 0.0, 100.0, 0.0));
        let w2 = store.add_wall(wall(0.0, 0.0, 0.0, 100.0));

        let p1 = store.add_part(PartData::new(PartKind::Door, 30.0));
        let p2 = store.add_part(PartData::new(PartKind::Window, 20.0));
        store.part_mut(p1).unwrap().wall = Some(w1);
        store.part_mut(p2).unwrap().wall = Some(w2);

        let on_w1: Vec<PartId> = store.parts_on(w1).map(|(id, _)| id).collect();
        assert_eq!(on_w1, vec![p1]);
    }
}
