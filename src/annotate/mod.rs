mod angle;
mod dimension;

pub use angle::{AngleData, AngleKey};
pub use dimension::{DimensionData, DimensionId, MarkerId};

use std::collections::HashMap;

use slotmap::SlotMap;

use crate::math::Point2;
use crate::plan::{PlanStore, Preferences, Selection};

/// Working set of derived annotation visuals.
///
/// Owned entirely by the current update pass: [`AnnotationView::refresh`]
/// runs once per external event (selection change, drag, wall edit,
/// preference toggle) and completes before the host reads the view again,
/// so a renderer never observes a partially rebuilt set.
#[derive(Debug, Default)]
pub struct AnnotationView {
    angles: HashMap<AngleKey, AngleData>,
    dimensions: SlotMap<DimensionId, DimensionData>,
    markers: SlotMap<MarkerId, Point2>,
}

impl AnnotationView {
    /// Creates an empty view.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recomputes the working set for the current geometry, selection, and
    /// preferences.
    ///
    /// Dimension links are rebuilt from scratch (their lifecycle follows
    /// the selection), while angle annotations are patched in place by key
    /// and then garbage-collected.
    pub fn refresh(&mut self, store: &PlanStore, selection: &Selection, prefs: &Preferences) {
        dimension::rebuild(
            &mut self.dimensions,
            &mut self.markers,
            store,
            selection,
            prefs,
        );

        if prefs.show_wall_angles {
            let rebuilt = angle::rebuild(&mut self.angles, store, selection, prefs);
            angle::collect_stale(&mut self.angles, store, &rebuilt);
            angle::apply_visibility(&mut self.angles, prefs);
        } else {
            self.angles.clear();
        }

        tracing::debug!(
            angles = self.angles.len(),
            dimensions = self.dimensions.len(),
            "annotation view refreshed"
        );
    }

    /// Iterates over the angle annotations.
    pub fn angles(&self) -> impl Iterator<Item = (&AngleKey, &AngleData)> {
        self.angles.iter()
    }

    /// Iterates over the dimension links.
    pub fn dimensions(&self) -> impl Iterator<Item = (DimensionId, &DimensionData)> {
        self.dimensions.iter()
    }

    /// Resolves a dimension endpoint marker.
    #[must_use]
    pub fn marker(&self, id: MarkerId) -> Option<&Point2> {
        self.markers.get(id)
    }

    /// Moves a dimension endpoint without rebuilding its link. Returns
    /// false if the marker no longer exists.
    pub fn move_marker(&mut self, id: MarkerId, to: Point2) -> bool {
        if let Some(p) = self.markers.get_mut(id) {
            *p = to;
            true
        } else {
            false
        }
    }
}
