//! Quiz map data model
//!
//! A map pairs an image reference with an ordered list of targets. Maps are
//! produced by the storage collaborator (see [`crate::store`]) and read-only
//! to the session engine. Field names serialize in the collaborator's
//! camelCase wire shape, with aliases for the legacy `pins`/`imageBase64`
//! keys.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::MIN_AREA_VERTICES;
use crate::geom;

/// A polygon vertex in percent coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vertex {
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
}

impl Vertex {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl From<Vec2> for Vertex {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

/// A quiz target: a single point or a polygonal area, in percent
/// coordinates of the rendered image.
///
/// Missing coordinate fields deserialize to 0 so malformed collaborator
/// data degrades instead of failing the whole map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Target {
    Point {
        #[serde(default)]
        id: String,
        #[serde(default)]
        name: String,
        #[serde(default)]
        x: f32,
        #[serde(default)]
        y: f32,
    },
    Area {
        #[serde(default)]
        id: String,
        #[serde(default)]
        name: String,
        #[serde(default)]
        vertices: Vec<Vertex>,
    },
}

impl Target {
    pub fn id(&self) -> &str {
        match self {
            Target::Point { id, .. } | Target::Area { id, .. } => id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Target::Point { name, .. } | Target::Area { name, .. } => name,
        }
    }

    /// Whether this target can be presented and answered. Points need
    /// finite coordinates; areas need at least 3 vertices.
    pub fn is_answerable(&self) -> bool {
        match self {
            Target::Point { x, y, .. } => x.is_finite() && y.is_finite(),
            Target::Area { vertices, .. } => vertices.len() >= MIN_AREA_VERTICES,
        }
    }

    /// Position used to reveal the correct answer: the point itself, or the
    /// vertex mean for areas (label placement; the full polygon stays
    /// available to the renderer). `None` for a degenerate area.
    pub fn reveal_position(&self) -> Option<Vec2> {
        match self {
            Target::Point { x, y, .. } => Some(Vec2::new(*x, *y)),
            Target::Area { vertices, .. } => {
                let verts: Vec<Vec2> = vertices.iter().map(|v| v.to_vec2()).collect();
                geom::polygon_centroid(&verts)
            }
        }
    }
}

/// A quiz map: an image plus its ordered targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Map {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Opaque reference to the map image (URL, data URI, or asset key);
    /// interpreted by the rendering collaborator.
    #[serde(default, alias = "imageBase64")]
    pub image_ref: String,
    #[serde(default, alias = "pins")]
    pub targets: Vec<Target>,
}

impl Map {
    /// Indices of the targets a session may present.
    pub fn answerable_indices(&self) -> Vec<usize> {
        self.targets
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_answerable())
            .map(|(i, _)| i)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area(vertex_count: usize) -> Target {
        Target::Area {
            id: "a".into(),
            name: "Area".into(),
            vertices: (0..vertex_count)
                .map(|i| Vertex::new(i as f32, i as f32))
                .collect(),
        }
    }

    #[test]
    fn test_point_is_answerable() {
        let t = Target::Point {
            id: "p".into(),
            name: "Berlin".into(),
            x: 30.0,
            y: 40.0,
        };
        assert!(t.is_answerable());
        assert_eq!(t.reveal_position(), Some(Vec2::new(30.0, 40.0)));
    }

    #[test]
    fn test_thin_area_is_not_answerable() {
        assert!(!area(0).is_answerable());
        assert!(!area(2).is_answerable());
        assert!(area(3).is_answerable());
    }

    #[test]
    fn test_area_reveal_is_vertex_mean() {
        let t = Target::Area {
            id: "a".into(),
            name: "Area".into(),
            vertices: vec![
                Vertex::new(0.0, 0.0),
                Vertex::new(60.0, 0.0),
                Vertex::new(30.0, 30.0),
            ],
        };
        assert_eq!(t.reveal_position(), Some(Vec2::new(30.0, 10.0)));
    }

    #[test]
    fn test_answerable_indices_skip_malformed() {
        let map = Map {
            id: "m".into(),
            name: "Test".into(),
            image_ref: String::new(),
            targets: vec![
                Target::Point {
                    id: "p".into(),
                    name: "P".into(),
                    x: 1.0,
                    y: 1.0,
                },
                area(2),
                area(4),
            ],
        };
        assert_eq!(map.answerable_indices(), vec![0, 2]);
    }

    #[test]
    fn test_deserialize_tagged_targets() {
        let json = r#"{
            "id": "demo",
            "name": "Sample map",
            "imageBase64": "data:image/png;base64,",
            "pins": [
                { "type": "point", "id": "pin-1", "name": "Sample place", "x": 50, "y": 50 },
                { "type": "area", "id": "pin-2", "name": "Region", "vertices": [
                    { "x": 0, "y": 0 }, { "x": 10, "y": 0 }, { "x": 5, "y": 10 }
                ] }
            ]
        }"#;
        let map: Map = serde_json::from_str(json).unwrap();
        assert_eq!(map.targets.len(), 2);
        assert!(matches!(map.targets[0], Target::Point { .. }));
        assert!(matches!(map.targets[1], Target::Area { .. }));
        assert_eq!(map.image_ref, "data:image/png;base64,");
    }

    #[test]
    fn test_missing_coordinates_default_to_zero() {
        let json = r#"{ "type": "point", "id": "p", "name": "No coords" }"#;
        let t: Target = serde_json::from_str(json).unwrap();
        match t {
            Target::Point { x, y, .. } => {
                assert_eq!(x, 0.0);
                assert_eq!(y, 0.0);
            }
            _ => panic!("expected point"),
        }
    }
}
