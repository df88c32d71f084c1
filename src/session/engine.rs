//! Quiz event handling
//!
//! The engine owns the single live session and serializes every state
//! transition. The two asynchronous sources (the caller's 1 Hz clock and
//! the one-shot feedback timeout) are driven from outside; the engine only
//! validates and applies them, so a late or duplicate event degrades to a
//! no-op instead of corrupting state.

use glam::Vec2;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use thiserror::Error;

use crate::answer::{self, Answer};
use crate::clamp_percent;
use crate::map::{Map, Target};
use crate::results::ResultsSummary;
use crate::session::state::{FeedbackTimer, Phase, QuizMode, QuizSession, Snapshot};

/// Errors reported when a session cannot start.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StartError {
    /// The map has no answerable targets; the engine stays out of `Running`.
    #[error("map has no playable targets")]
    NoPlayableTargets,
    /// `reset_session` before any map was ever supplied.
    #[error("no map loaded")]
    NoMap,
}

/// Turn-based quiz engine: one live session, driven by caller events.
///
/// The shuffle RNG is seeded at construction; [`with_seed`](Self::with_seed)
/// makes whole sessions reproducible.
#[derive(Debug)]
pub struct QuizEngine {
    mode: QuizMode,
    map: Option<Map>,
    session: Option<QuizSession>,
    rng: Pcg32,
    /// Bumped on every start/reset; embedded in feedback handles so a
    /// handle from a replaced session can be told apart from the live one.
    session_counter: u64,
    feedback_seq: u64,
}

impl QuizEngine {
    pub fn new(mode: QuizMode) -> Self {
        Self::with_seed(mode, rand::rng().random())
    }

    /// Deterministic constructor; the same seed yields the same shuffles.
    pub fn with_seed(mode: QuizMode, seed: u64) -> Self {
        Self {
            mode,
            map: None,
            session: None,
            rng: Pcg32::seed_from_u64(seed),
            session_counter: 0,
            feedback_seq: 0,
        }
    }

    pub fn mode(&self) -> QuizMode {
        self.mode
    }

    /// The map the engine currently plays over, if any.
    pub fn map(&self) -> Option<&Map> {
        self.map.as_ref()
    }

    /// Start a fresh session over `map`, replacing any live one.
    ///
    /// The replaced session's pending feedback timer dies with it. A map
    /// with no answerable targets reports [`StartError::NoPlayableTargets`]
    /// and leaves the engine idle rather than entering an empty session.
    pub fn start_session(&mut self, map: Map) -> Result<(), StartError> {
        self.session = None;
        self.session_counter += 1;

        let mut order = map.answerable_indices();
        if order.is_empty() {
            log::warn!("map '{}' has no playable targets", map.name);
            self.map = Some(map);
            return Err(StartError::NoPlayableTargets);
        }
        order.shuffle(&mut self.rng);

        log::info!(
            "quiz session started: map '{}', {} targets",
            map.name,
            order.len()
        );
        self.session = Some(QuizSession {
            map_id: map.id.clone(),
            order,
            current: 0,
            score: 0,
            elapsed_seconds: 0,
            phase: Phase::Running,
            timer_running: false,
            last_correct: None,
            click_position: None,
            reveal_position: None,
            pending_feedback: None,
        });
        self.map = Some(map);
        Ok(())
    }

    /// Restart over the current map, reshuffled.
    pub fn reset_session(&mut self) -> Result<(), StartError> {
        let map = self.map.clone().ok_or(StartError::NoMap)?;
        self.start_session(map)
    }

    /// Submit a click at image percentages (Click mode only).
    ///
    /// Out-of-range coordinates are clamped into [0, 100]. Returns the
    /// armed feedback timer the caller must schedule, or `None` when the
    /// event does not apply (wrong mode, no session, not in `Running`).
    pub fn submit_pointer_answer(&mut self, percent: Vec2) -> Option<FeedbackTimer> {
        if self.mode != QuizMode::Click {
            return None;
        }
        let clamped = Vec2::new(clamp_percent(percent.x), clamp_percent(percent.y));
        self.apply_answer(Answer::Pointer(clamped))
    }

    /// Submit a typed place name (Type mode only).
    pub fn submit_text_answer(&mut self, text: &str) -> Option<FeedbackTimer> {
        if self.mode != QuizMode::Type {
            return None;
        }
        self.apply_answer(Answer::Text(text.to_string()))
    }

    fn apply_answer(&mut self, ans: Answer) -> Option<FeedbackTimer> {
        let map = self.map.as_ref()?;
        let session = self.session.as_mut()?;
        if session.phase != Phase::Running {
            return None;
        }
        let target = map.targets.get(*session.order.get(session.current)?)?;

        // Only active play is timed: the clock starts with the first answer.
        session.timer_running = true;

        let correct = answer::evaluate(target, &ans);
        if correct {
            session.score += 1;
        }
        session.last_correct = Some(correct);
        session.click_position = match ans {
            Answer::Pointer(pos) => Some(pos),
            Answer::Text(_) => None,
        };
        // The true position is revealed whether or not the answer was right.
        session.reveal_position = target.reveal_position();
        session.phase = Phase::Feedback;
        debug_assert!(session.score as usize <= session.current + 1);

        self.feedback_seq += 1;
        let timer = FeedbackTimer {
            session: self.session_counter,
            seq: self.feedback_seq,
        };
        session.pending_feedback = Some(timer);
        Some(timer)
    }

    /// The one-shot feedback timer fired.
    ///
    /// Only the handle armed by the most recent answer of the live session
    /// has any effect; stale handles are ignored.
    pub fn feedback_expired(&mut self, timer: FeedbackTimer) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.pending_feedback != Some(timer) {
            return;
        }
        session.pending_feedback = None;
        session.last_correct = None;
        session.click_position = None;
        session.reveal_position = None;

        if session.current + 1 >= session.order.len() {
            session.timer_running = false;
            session.phase = Phase::Ended;
            log::info!(
                "quiz ended: {}/{} correct in {}s",
                session.score,
                session.order.len(),
                session.elapsed_seconds
            );
        } else {
            session.current += 1;
            session.phase = Phase::Running;
        }
    }

    /// Advance the 1 Hz clock. Counts only while the timer is running and
    /// the session is in `Running` or `Feedback`.
    pub fn tick(&mut self) {
        if let Some(session) = self.session.as_mut() {
            if session.timer_running && matches!(session.phase, Phase::Running | Phase::Feedback) {
                session.elapsed_seconds += 1;
            }
        }
    }

    /// The target being asked, while a question is on screen.
    pub fn current_target(&self) -> Option<&Target> {
        let map = self.map.as_ref()?;
        let session = self.session.as_ref()?;
        match session.phase {
            Phase::Running | Phase::Feedback => {
                map.targets.get(*session.order.get(session.current)?)
            }
            Phase::Idle | Phase::Ended => None,
        }
    }

    /// Read-only state for rendering.
    pub fn snapshot(&self) -> Snapshot {
        match &self.session {
            None => Snapshot::idle(),
            Some(s) => Snapshot {
                phase: s.phase,
                current_index: s.current,
                total: s.order.len(),
                score: s.score,
                elapsed_seconds: s.elapsed_seconds,
                feedback_visible: s.phase == Phase::Feedback,
                last_correct: s.last_correct,
                click_position: s.click_position,
                reveal_position: s.reveal_position,
            },
        }
    }

    /// Final numbers, once the session has ended.
    pub fn results(&self) -> Option<ResultsSummary> {
        let session = self.session.as_ref()?;
        (session.phase == Phase::Ended).then(|| ResultsSummary {
            elapsed_seconds: session.elapsed_seconds,
            correct: session.score,
            total: session.order.len() as u32,
        })
    }
}
