//! Answer evaluation
//!
//! Decides whether a submitted answer matches a target. Pointer answers use
//! percent-space distance for point targets and the odd-even polygon test
//! for areas; typed answers use normalized string matching with a
//! permissive substring rule.

use glam::Vec2;

use crate::consts::{MIN_TEXT_MATCH_LEN, POINT_TOLERANCE};
use crate::geom;
use crate::map::Target;

/// A submitted answer.
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    /// Click position in image percentages.
    Pointer(Vec2),
    /// Typed place name.
    Text(String),
}

/// Evaluate an answer against a target.
///
/// An area with fewer than 3 vertices is unanswerable and never matches a
/// pointer; typed answers match on the target's name regardless of its
/// geometry.
pub fn evaluate(target: &Target, answer: &Answer) -> bool {
    match answer {
        Answer::Pointer(pos) => evaluate_pointer(target, *pos),
        Answer::Text(text) => text_matches(target.name(), text),
    }
}

fn evaluate_pointer(target: &Target, pos: Vec2) -> bool {
    match target {
        Target::Point { x, y, .. } => geom::distance(pos, Vec2::new(*x, *y)) <= POINT_TOLERANCE,
        Target::Area { vertices, .. } => {
            let verts: Vec<Vec2> = vertices.iter().map(|v| v.to_vec2()).collect();
            geom::point_in_polygon(pos, &verts)
        }
    }
}

/// Typed-name matching: both sides trimmed and lowercased, then an exact
/// match, or the target name contains the input when the input has at least
/// [`MIN_TEXT_MATCH_LEN`] characters.
///
/// The substring rule accepts partial names ("berl" matches "Berlin"). That
/// leniency is part of the observable scoring behavior; tightening it
/// changes scores.
pub fn text_matches(name: &str, input: &str) -> bool {
    let input = normalize(input);
    let name = normalize(name);
    input == name || (name.contains(&input) && input.chars().count() >= MIN_TEXT_MATCH_LEN)
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}
