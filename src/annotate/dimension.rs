use std::cmp::Ordering;

use slotmap::SlotMap;

use crate::math::distance_2d::dist;
use crate::math::{along_key, Point2, Vector2};
use crate::plan::{PlanStore, Preferences, Selection, WallId};

slotmap::new_key_type! {
    /// Unique identifier for a dimension-link endpoint marker.
    pub struct MarkerId;
}

slotmap::new_key_type! {
    /// Unique identifier for a dimension link.
    pub struct DimensionId;
}

/// A measured-length callout alongside a wall or a wall sub-stretch.
///
/// Endpoints are independent marker records so the host can nudge either
/// end without rebuilding the link.
#[derive(Debug, Clone)]
pub struct DimensionData {
    pub from: MarkerId,
    pub to: MarkerId,
    pub wall: WallId,
    pub solo: bool,
    pub visible: bool,
    pub label: String,
}

/// Perpendicular offsets keeping the three link tiers visually apart.
const SOLO_OFFSET: f64 = 10.0;
const CHAIN_OFFSET: f64 = 5.0;
const SPAN_OFFSET: f64 = 25.0;

/// Links shorter than this are hidden unless they are solo links.
const MIN_VISIBLE_LENGTH: f64 = 1.0;

/// Rebuilds the dimension links for the current selection.
///
/// A selected wall with no individually selected parts gets one solo link
/// spanning the whole wall. When parts are selected, their footprint
/// endpoints chain into per-stretch links, topped by a full-span link on a
/// wider offset so the tiers do not overlap.
pub(super) fn rebuild(
    dimensions: &mut SlotMap<DimensionId, DimensionData>,
    markers: &mut SlotMap<MarkerId, Point2>,
    store: &PlanStore,
    selection: &Selection,
    prefs: &Preferences,
) {
    dimensions.clear();
    markers.clear();
    if !prefs.show_wall_lengths {
        return;
    }

    for &wall_id in &selection.walls {
        let Ok(wall) = store.wall(wall_id) else {
            continue;
        };
        let Ok(dir) = wall.direction() else {
            continue;
        };
        let normal = Vector2::new(dir.y, -dir.x);
        let (lo, hi) = wall.ordered_endpoints();

        let mut selected_ends: Vec<Point2> = Vec::new();
        for (part_id, part) in store.parts_on(wall_id) {
            if !selection.parts.contains(&part_id) {
                continue;
            }
            if let Ok((a, b)) = part.footprint(wall) {
                selected_ends.push(a);
                selected_ends.push(b);
            }
        }
        selected_ends.sort_by(|a, b| {
            along_key(a)
                .partial_cmp(&along_key(b))
                .unwrap_or(Ordering::Equal)
        });

        if selected_ends.is_empty() {
            push_link(
                dimensions,
                markers,
                prefs,
                wall_id,
                &lo,
                &hi,
                normal * SOLO_OFFSET,
                true,
            );
            continue;
        }

        let mut chain = Vec::with_capacity(selected_ends.len() + 2);
        chain.push(lo);
        chain.extend(selected_ends);
        chain.push(hi);
        for pair in chain.windows(2) {
            push_link(
                dimensions,
                markers,
                prefs,
                wall_id,
                &pair[0],
                &pair[1],
                normal * CHAIN_OFFSET,
                false,
            );
        }
        push_link(
            dimensions,
            markers,
            prefs,
            wall_id,
            &lo,
            &hi,
            normal * SPAN_OFFSET,
            false,
        );
    }
}

#[allow(clippy::too_many_arguments)]
fn push_link(
    dimensions: &mut SlotMap<DimensionId, DimensionData>,
    markers: &mut SlotMap<MarkerId, Point2>,
    prefs: &Preferences,
    wall: WallId,
    from: &Point2,
    to: &Point2,
    offset: Vector2,
    solo: bool,
) {
    let length = dist(from, to);
    let from_id = markers.insert(from + offset);
    let to_id = markers.insert(to + offset);
    dimensions.insert(DimensionData {
        from: from_id,
        to: to_id,
        wall,
        solo,
        visible: solo || length >= MIN_VISIBLE_LENGTH,
        label: prefs.format_length(length),
    });
}
