//! Percent-space geometry
//!
//! Pure functions over percent coordinates. No side effects; degenerate
//! input (fewer than 3 vertices, empty vertex lists) degrades to
//! `false`/`None` rather than failing.

use glam::Vec2;

/// Stands in for a zero denominator on horizontal polygon edges.
const EDGE_EPSILON: f32 = f32::EPSILON;

/// Ray-casting point-in-polygon test (odd-even rule).
///
/// Edges run between consecutive vertices, wrapping last back to first.
/// Points exactly on an edge or vertex are not guaranteed to test inside.
/// Fewer than 3 vertices is degenerate and always outside.
pub fn point_in_polygon(point: Vec2, vertices: &[Vec2]) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        let vi = vertices[i];
        let vj = vertices[j];

        if (vi.y > point.y) != (vj.y > point.y) {
            let mut dy = vj.y - vi.y;
            if dy == 0.0 {
                dy = EDGE_EPSILON;
            }
            let x_at_ray = (vj.x - vi.x) * (point.y - vi.y) / dy + vi.x;
            if point.x < x_at_ray {
                inside = !inside;
            }
        }
        j = i;
    }

    inside
}

/// Arithmetic mean of the vertices.
///
/// This is the vertex mean, not the area-weighted polygon centroid; it can
/// land outside a concave polygon. Used for label and reveal placement
/// only, never for correctness. Returns `None` for an empty slice.
pub fn polygon_centroid(vertices: &[Vec2]) -> Option<Vec2> {
    if vertices.is_empty() {
        return None;
    }
    let sum = vertices.iter().fold(Vec2::ZERO, |acc, v| acc + *v);
    Some(sum / vertices.len() as f32)
}

/// Euclidean distance in percent space.
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}
