//! In-memory map collection
//!
//! The quiz core does not own persistence; this store is the in-process
//! collection the storage collaborator fills and drains. Every ingest path
//! normalizes the same way: coordinates made finite, clamped to the
//! percent range and rounded to one decimal, missing ids and names filled
//! in. Degenerate areas (fewer than 3 vertices) are kept — the session
//! skips them as unanswerable, and dropping data is the collaborator's
//! call.

use thiserror::Error;
use uuid::Uuid;

use crate::clamp_percent;
use crate::map::{Map, Target};

/// Errors surfaced by store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("map not found: {0}")]
    MapNotFound(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// An in-memory collection of quiz maps.
#[derive(Debug, Clone, Default)]
pub struct MapStore {
    maps: Vec<Map>,
}

impl MapStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All maps, in insertion order.
    pub fn list(&self) -> &[Map] {
        &self.maps
    }

    pub fn get(&self, id: &str) -> Option<&Map> {
        self.maps.iter().find(|m| m.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }

    /// Add a map, normalizing it and assigning a fresh id if it has none.
    pub fn create(&mut self, mut map: Map) -> &Map {
        normalize_map(&mut map);
        self.maps.push(map);
        let index = self.maps.len() - 1;
        &self.maps[index]
    }

    /// Replace the map with the given id. The stored id wins over whatever
    /// the replacement carries.
    pub fn update(&mut self, id: &str, mut map: Map) -> Result<&Map, StoreError> {
        let index = self
            .maps
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| StoreError::MapNotFound(id.to_string()))?;
        map.id = id.to_string();
        normalize_map(&mut map);
        self.maps[index] = map;
        Ok(&self.maps[index])
    }

    pub fn delete(&mut self, id: &str) -> Result<(), StoreError> {
        let before = self.maps.len();
        self.maps.retain(|m| m.id != id);
        if self.maps.len() == before {
            return Err(StoreError::MapNotFound(id.to_string()));
        }
        Ok(())
    }

    /// Load a collection from collaborator JSON, normalizing every map.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let mut maps: Vec<Map> = serde_json::from_str(json)?;
        for map in &mut maps {
            normalize_map(map);
        }
        log::info!("loaded {} maps", maps.len());
        Ok(Self { maps })
    }

    /// Serialize the whole collection for the collaborator to persist.
    pub fn to_json(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string(&self.maps)?)
    }
}

fn normalize_map(map: &mut Map) {
    if map.id.is_empty() {
        map.id = Uuid::new_v4().to_string();
    }
    if map.name.trim().is_empty() {
        map.name = "Untitled map".to_string();
    }
    for target in &mut map.targets {
        normalize_target(target);
    }
}

fn normalize_target(target: &mut Target) {
    match target {
        Target::Point { id, name, x, y } => {
            if id.is_empty() {
                *id = Uuid::new_v4().to_string();
            }
            if name.trim().is_empty() {
                *name = "Unnamed point".to_string();
            }
            *x = clamp_round(*x);
            *y = clamp_round(*y);
        }
        Target::Area { id, name, vertices } => {
            if id.is_empty() {
                *id = Uuid::new_v4().to_string();
            }
            if name.trim().is_empty() {
                *name = "Unnamed area".to_string();
            }
            for v in vertices {
                v.x = clamp_round(v.x);
                v.y = clamp_round(v.y);
            }
        }
    }
}

/// Clamp to [0, 100] and round to one decimal; non-finite input becomes 0.
fn clamp_round(v: f32) -> f32 {
    let v = if v.is_finite() { v } else { 0.0 };
    (clamp_percent(v) * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::Vertex;

    fn raw_map() -> Map {
        Map {
            id: String::new(),
            name: "  ".into(),
            image_ref: "img".into(),
            targets: vec![
                Target::Point {
                    id: String::new(),
                    name: String::new(),
                    x: 103.77,
                    y: -4.2,
                },
                Target::Area {
                    id: "a1".into(),
                    name: "Region".into(),
                    vertices: vec![
                        Vertex::new(f32::NAN, 12.34),
                        Vertex::new(55.46, 200.0),
                        Vertex::new(1.0, 2.0),
                    ],
                },
            ],
        }
    }

    #[test]
    fn test_create_normalizes_and_assigns_ids() {
        let mut store = MapStore::new();
        let map = store.create(raw_map());
        assert!(!map.id.is_empty());
        assert_eq!(map.name, "Untitled map");
        match &map.targets[0] {
            Target::Point { id, name, x, y } => {
                assert!(!id.is_empty());
                assert_eq!(name, "Unnamed point");
                assert_eq!(*x, 100.0);
                assert_eq!(*y, 0.0);
            }
            _ => panic!("expected point"),
        }
        match &map.targets[1] {
            Target::Area { vertices, .. } => {
                assert_eq!(vertices[0].x, 0.0);
                assert_eq!(vertices[0].y, 12.3);
                assert_eq!(vertices[1].x, 55.5);
                assert_eq!(vertices[1].y, 100.0);
            }
            _ => panic!("expected area"),
        }
    }

    #[test]
    fn test_create_keeps_provided_id() {
        let mut store = MapStore::new();
        let mut map = raw_map();
        map.id = "keep-me".into();
        assert_eq!(store.create(map).id, "keep-me");
        assert!(store.get("keep-me").is_some());
    }

    #[test]
    fn test_update_preserves_stored_id() {
        let mut store = MapStore::new();
        let id = store.create(raw_map()).id.clone();

        let mut replacement = raw_map();
        replacement.id = "other-id".into();
        replacement.name = "Renamed".into();
        let updated = store.update(&id, replacement).unwrap();
        assert_eq!(updated.id, id);
        assert_eq!(updated.name, "Renamed");
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn test_update_unknown_id_errors() {
        let mut store = MapStore::new();
        assert!(matches!(
            store.update("missing", raw_map()),
            Err(StoreError::MapNotFound(_))
        ));
    }

    #[test]
    fn test_delete() {
        let mut store = MapStore::new();
        let id = store.create(raw_map()).id.clone();
        store.delete(&id).unwrap();
        assert!(store.is_empty());
        assert!(matches!(
            store.delete(&id),
            Err(StoreError::MapNotFound(_))
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let mut store = MapStore::new();
        store.create(raw_map());
        let json = store.to_json().unwrap();
        let loaded = MapStore::from_json(&json).unwrap();
        assert_eq!(loaded.list(), store.list());
    }

    #[test]
    fn test_from_json_accepts_legacy_field_names() {
        let json = r#"[{
            "id": "demo",
            "name": "Sample map",
            "imageBase64": "",
            "pins": [{ "type": "point", "id": "pin-1", "name": "Sample place", "x": 50, "y": 50 }]
        }]"#;
        let store = MapStore::from_json(json).unwrap();
        assert_eq!(store.list().len(), 1);
        assert_eq!(store.get("demo").unwrap().targets.len(), 1);
    }

    #[test]
    fn test_degenerate_area_is_kept_but_unanswerable() {
        let mut store = MapStore::new();
        let map = store.create(Map {
            id: String::new(),
            name: "Thin".into(),
            image_ref: String::new(),
            targets: vec![Target::Area {
                id: String::new(),
                name: "Line".into(),
                vertices: vec![Vertex::new(0.0, 0.0), Vertex::new(10.0, 10.0)],
            }],
        });
        assert_eq!(map.targets.len(), 1);
        assert!(!map.targets[0].is_answerable());
    }
}
