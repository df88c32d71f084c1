//! Map quiz core - turn-based geography quiz over an image map
//!
//! Core modules:
//! - `map`: Quiz map data model (point and area targets)
//! - `geom`: Percent-space geometry (polygon test, centroid, distance)
//! - `layout`: Letterbox-aware pointer/overlay coordinate mapping
//! - `answer`: Answer evaluation (clicks and typed names)
//! - `session`: Turn-based session state machine
//! - `store`: In-memory map collection with normalization
//! - `results`: End-of-quiz summary and grading
//!
//! The crate is a library core: a presentation layer supplies pointer
//! positions, typed input, a 1 Hz clock, and the one-shot feedback timer;
//! this crate owns every state transition.

pub mod answer;
pub mod geom;
pub mod layout;
pub mod map;
pub mod results;
pub mod session;
pub mod store;

pub use map::{Map, Target, Vertex};
pub use session::{FeedbackTimer, Phase, QuizEngine, QuizMode, Snapshot, StartError};
pub use store::MapStore;

/// Quiz tuning constants
pub mod consts {
    /// Maximum percent-space distance between a click and a point target
    /// still counted correct (boundary equality counts).
    pub const POINT_TOLERANCE: f32 = 5.0;
    /// How long the correct position stays revealed after an answer.
    pub const FEEDBACK_DELAY_MS: u64 = 750;
    /// Minimum typed-answer length for the substring match rule.
    pub const MIN_TEXT_MATCH_LEN: usize = 3;
    /// An area target needs at least this many vertices to be answerable.
    pub const MIN_AREA_VERTICES: usize = 3;
    /// Target coordinates are percentages of the rendered image area.
    pub const PERCENT_MAX: f32 = 100.0;
}

/// Clamp a coordinate to the percent range [0, 100].
#[inline]
pub fn clamp_percent(v: f32) -> f32 {
    v.clamp(0.0, consts::PERCENT_MAX)
}
