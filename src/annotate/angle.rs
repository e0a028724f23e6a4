use std::collections::{HashMap, HashSet};

use crate::math::angle_2d::{ray_angle, sort_clockwise, sweep_between};
use crate::math::distance_2d::{dist, point_to_segment_dist};
use crate::math::intersect_2d::segment_segment_intersect;
use crate::math::{Point2, TOLERANCE};
use crate::plan::{PlanStore, Preferences, Selection, WallId};

/// Identity of an angle annotation: the sorted set of walls meeting at the
/// vertex plus the index of the ray pair going clockwise.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AngleKey {
    pub walls: Vec<WallId>,
    pub pair: usize,
}

/// A visual arc annotating the angle between adjacent wall rays at an
/// intersection point.
#[derive(Debug, Clone, PartialEq)]
pub struct AngleData {
    pub vertex: Point2,
    pub start_angle: f64,
    pub sweep: f64,
    pub max_radius: f64,
    pub visible: bool,
}

/// Cap on the arc radius so short walls are not overdrawn.
const MAX_ARC_RADIUS: f64 = 30.0;

/// Rebuilds the annotations around every intersection touching a selected
/// wall, updating entries in place. Returns the keys touched this pass.
pub(super) fn rebuild(
    angles: &mut HashMap<AngleKey, AngleData>,
    store: &PlanStore,
    selection: &Selection,
    prefs: &Preferences,
) -> HashSet<AngleKey> {
    let tolerance = prefs.intersection_tolerance();
    let mut processed: HashSet<(WallId, WallId)> = HashSet::new();
    let mut rebuilt: HashSet<AngleKey> = HashSet::new();

    for &selected in &selection.walls {
        let Ok(wall) = store.wall(selected) else {
            continue;
        };
        for (other_id, other) in store.walls() {
            if other_id == selected || processed.contains(&pair_key(selected, other_id)) {
                continue;
            }
            let Some(vertex) =
                segment_segment_intersect(&wall.start, &wall.end, &other.start, &other.end)
            else {
                continue;
            };

            // Every wall passing near the vertex participates, which folds
            // 3-way and larger crossings into one annotation group.
            let involved: Vec<WallId> = store
                .walls()
                .filter(|(_, w)| point_to_segment_dist(&vertex, &w.start, &w.end) <= tolerance)
                .map(|(id, _)| id)
                .collect();
            for (i, &a) in involved.iter().enumerate() {
                for &b in &involved[i + 1..] {
                    processed.insert(pair_key(a, b));
                }
            }

            rebuilt.extend(build_group(angles, store, &involved, &vertex, tolerance));
        }
    }
    rebuilt
}

fn pair_key(a: WallId, b: WallId) -> (WallId, WallId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Builds or updates the annotations for one intersection group.
fn build_group(
    angles: &mut HashMap<AngleKey, AngleData>,
    store: &PlanStore,
    involved: &[WallId],
    vertex: &Point2,
    tolerance: f64,
) -> Vec<AngleKey> {
    // Each involved wall endpoint defines a ray, except endpoints sitting
    // at the vertex itself.
    let mut endpoints: Vec<Point2> = Vec::new();
    for &id in involved {
        let Ok(w) = store.wall(id) else {
            continue;
        };
        for p in [w.start, w.end] {
            if dist(&p, vertex) > tolerance {
                endpoints.push(p);
            }
        }
    }
    if endpoints.len() < 2 {
        return Vec::new();
    }

    let max_radius = endpoints
        .iter()
        .map(|p| dist(p, vertex))
        .fold(MAX_ARC_RADIUS, f64::min);

    sort_clockwise(vertex, &mut endpoints);

    let mut walls: Vec<WallId> = involved.to_vec();
    walls.sort_unstable();
    walls.dedup();

    let mut keys = Vec::with_capacity(endpoints.len());
    for (i, p1) in endpoints.iter().enumerate() {
        let p2 = &endpoints[(i + 1) % endpoints.len()];
        let start_angle = ray_angle(vertex, p1);
        let sweep = sweep_between(start_angle, ray_angle(vertex, p2));
        let key = AngleKey {
            walls: walls.clone(),
            pair: i,
        };
        angles.insert(
            key.clone(),
            AngleData {
                vertex: *vertex,
                start_angle,
                sweep,
                max_radius,
                visible: true,
            },
        );
        keys.push(key);
    }
    keys
}

/// Garbage-collects annotations invalidated by geometry or selection
/// changes: wall pairs that no longer intersect, entries superseded by this
/// pass's recomputation of the same wall set, and zero sweeps.
pub(super) fn collect_stale(
    angles: &mut HashMap<AngleKey, AngleData>,
    store: &PlanStore,
    rebuilt: &HashSet<AngleKey>,
) {
    let recomputed: HashSet<&Vec<WallId>> = rebuilt.iter().map(|k| &k.walls).collect();

    let stale: Vec<AngleKey> = angles
        .iter()
        .filter(|(key, data)| {
            !walls_still_meet(store, &key.walls)
                || (recomputed.contains(&key.walls) && !rebuilt.contains(*key))
                || data.sweep.abs() < TOLERANCE
        })
        .map(|(key, _)| key.clone())
        .collect();

    for key in stale {
        angles.remove(&key);
    }
}

fn walls_still_meet(store: &PlanStore, walls: &[WallId]) -> bool {
    for (i, &a) in walls.iter().enumerate() {
        let Ok(wa) = store.wall(a) else {
            return false;
        };
        for &b in &walls[i + 1..] {
            let Ok(wb) = store.wall(b) else {
                return false;
            };
            if segment_segment_intersect(&wa.start, &wa.end, &wb.start, &wb.end).is_none() {
                return false;
            }
        }
    }
    true
}

/// Applies the small-angle display preference: reflex and straight sweeps
/// are hidden, never destroyed.
pub(super) fn apply_visibility(angles: &mut HashMap<AngleKey, AngleData>, prefs: &Preferences) {
    for data in angles.values_mut() {
        data.visible = !(prefs.show_only_small_wall_angles && data.sweep >= 180.0);
    }
}
