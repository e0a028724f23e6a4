use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{FileError, Result};
use crate::math::Point2;
use crate::plan::{PartData, PartKind, PlanStore, Preferences, WallData, WallId};

/// Serialized plan document: the geometry arrays plus the model-data bag.
///
/// Annotations are never persisted; the engine is stateless across saves
/// and re-derives them from the loaded geometry on the next update pass.
#[derive(Debug, Serialize, Deserialize)]
pub struct Document {
    pub model: Preferences,
    pub walls: Vec<WallRecord>,
    pub parts: Vec<PartRecord>,
}

/// Wall entry keyed by a document-local string id.
#[derive(Debug, Serialize, Deserialize)]
pub struct WallRecord {
    pub id: String,
    pub start: [f64; 2],
    pub end: [f64; 2],
    pub thickness: f64,
}

/// Part entry referencing its owner wall by document id.
#[derive(Debug, Serialize, Deserialize)]
pub struct PartRecord {
    pub kind: PartKind,
    pub width: f64,
    pub position: [f64; 2],
    pub angle: f64,
    pub wall: Option<String>,
}

/// Captures the store and preferences into a document.
#[must_use]
pub fn to_document(store: &PlanStore, prefs: &Preferences) -> Document {
    let mut ids: HashMap<WallId, String> = HashMap::new();
    let mut walls = Vec::new();
    for (n, (id, wall)) in store.walls().enumerate() {
        let key = format!("wall{n}");
        ids.insert(id, key.clone());
        walls.push(WallRecord {
            id: key,
            start: [wall.start.x, wall.start.y],
            end: [wall.end.x, wall.end.y],
            thickness: wall.thickness,
        });
    }

    let parts = store
        .parts()
        .map(|(_, part)| PartRecord {
            kind: part.kind,
            width: part.width,
            position: [part.position.x, part.position.y],
            angle: part.angle,
            wall: part.wall.and_then(|w| ids.get(&w).cloned()),
        })
        .collect();

    Document {
        model: prefs.clone(),
        walls,
        parts,
    }
}

/// Rebuilds a store from a document, re-keying string ids to arena handles.
///
/// # Errors
///
/// Returns an error on a duplicate wall id or when a part references a
/// wall id the document does not define.
pub fn from_document(doc: &Document) -> Result<(PlanStore, Preferences)> {
    let mut store = PlanStore::new();
    let mut ids: HashMap<&str, WallId> = HashMap::new();
    for rec in &doc.walls {
        let id = store.add_wall(WallData::new(
            Point2::new(rec.start[0], rec.start[1]),
            Point2::new(rec.end[0], rec.end[1]),
            rec.thickness,
        ));
        if ids.insert(rec.id.as_str(), id).is_some() {
            return Err(FileError::Malformed(format!("duplicate wall id {}", rec.id)).into());
        }
    }

    for rec in &doc.parts {
        let wall = match &rec.wall {
            Some(key) => Some(
                *ids.get(key.as_str())
                    .ok_or_else(|| FileError::UnknownWall(key.clone()))?,
            ),
            None => None,
        };
        let mut part = PartData::new(rec.kind, rec.width);
        part.position = Point2::new(rec.position[0], rec.position[1]);
        part.angle = rec.angle;
        part.wall = wall;
        store.add_part(part);
    }

    Ok((store, doc.model.clone()))
}

/// Serializes the plan to a JSON string.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn save_json(store: &PlanStore, prefs: &Preferences) -> Result<String> {
    Ok(serde_json::to_string_pretty(&to_document(store, prefs)).map_err(FileError::from)?)
}

/// Restores a plan from a JSON string produced by [`save_json`].
///
/// # Errors
///
/// Returns an error if the JSON is malformed or internally inconsistent.
pub fn load_json(json: &str) -> Result<(PlanStore, Preferences)> {
    let doc: Document = serde_json::from_str(json).map_err(FileError::from)?;
    from_document(&doc)
}
