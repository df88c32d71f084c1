//! Session state and snapshot types
//!
//! All state for one quiz run lives here. A session is created by the
//! engine's `start_session`, mutated only through engine events, and
//! replaced wholesale on reset or map change.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Current phase of the quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Phase {
    /// No session running.
    #[default]
    Idle,
    /// Waiting for an answer to the current target.
    Running,
    /// Correct position revealed after an answer.
    Feedback,
    /// All targets answered.
    Ended,
}

/// How answers are submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QuizMode {
    /// Click the named location on the map.
    #[default]
    Click,
    /// Type the name of the highlighted location.
    Type,
}

/// Cancellable handle for the one-shot feedback reveal timer.
///
/// The engine hands out one handle per answer; the caller schedules it for
/// [`delay_ms`](Self::delay_ms) and passes it back via `feedback_expired`.
/// A handle from an earlier answer or from a replaced session compares
/// unequal to the pending one and is ignored, so a late-firing callback can
/// never advance a session it no longer belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackTimer {
    pub(crate) session: u64,
    pub(crate) seq: u64,
}

impl FeedbackTimer {
    /// Delay after which the caller should fire `feedback_expired`.
    pub fn delay_ms(&self) -> u64 {
        crate::consts::FEEDBACK_DELAY_MS
    }
}

/// One live quiz run over a map's answerable targets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizSession {
    /// Id of the map being played.
    pub map_id: String,
    /// Shuffled indices into the map's target list (answerable ones only).
    pub(crate) order: Vec<usize>,
    /// Position within `order` of the target being asked.
    pub(crate) current: usize,
    pub(crate) score: u32,
    pub(crate) elapsed_seconds: u32,
    pub(crate) phase: Phase,
    /// The clock only counts once the first answer has been submitted.
    pub(crate) timer_running: bool,
    pub(crate) last_correct: Option<bool>,
    /// Where the player clicked (pointer answers only).
    pub(crate) click_position: Option<Vec2>,
    /// True position of the current target while feedback is shown.
    pub(crate) reveal_position: Option<Vec2>,
    /// Outstanding feedback timer, if any.
    pub(crate) pending_feedback: Option<FeedbackTimer>,
}

/// Read-only projection of session state for the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub phase: Phase,
    /// Zero-based index of the current question.
    pub current_index: usize,
    /// Number of questions in this session.
    pub total: usize,
    pub score: u32,
    pub elapsed_seconds: u32,
    pub feedback_visible: bool,
    pub last_correct: Option<bool>,
    pub click_position: Option<Vec2>,
    pub reveal_position: Option<Vec2>,
}

impl Snapshot {
    pub(crate) fn idle() -> Self {
        Self {
            phase: Phase::Idle,
            current_index: 0,
            total: 0,
            score: 0,
            elapsed_seconds: 0,
            feedback_visible: false,
            last_correct: None,
            click_position: None,
            reveal_position: None,
        }
    }
}
