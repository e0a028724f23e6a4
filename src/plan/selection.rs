use std::collections::HashSet;

use super::part::PartId;
use super::wall::WallId;

/// Snapshot of the host's current selection, consumed by an update pass.
#[derive(Debug, Default, Clone)]
pub struct Selection {
    pub walls: HashSet<WallId>,
    pub parts: HashSet<PartId>,
}

impl Selection {
    /// Creates an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a wall to the selection.
    pub fn select_wall(&mut self, id: WallId) {
        self.walls.insert(id);
    }

    /// Adds a part to the selection.
    pub fn select_part(&mut self, id: PartId) {
        self.parts.insert(id);
    }

    /// Clears the whole selection.
    pub fn clear(&mut self) {
        self.walls.clear();
        self.parts.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.walls.is_empty() && self.parts.is_empty()
    }
}
