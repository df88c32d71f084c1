//! End-of-quiz summary and grading

use serde::Serialize;

/// Final numbers for a finished quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResultsSummary {
    pub elapsed_seconds: u32,
    pub correct: u32,
    pub total: u32,
}

impl ResultsSummary {
    /// Share of correct answers, rounded to whole percent. An empty quiz
    /// scores 0.
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.correct as f32 / self.total as f32) * 100.0).round() as u32
    }

    pub fn grade(&self) -> Grade {
        Grade::from_percentage(self.percentage())
    }
}

/// Performance tier shown on the results screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Grade {
    Excellent,
    Great,
    Good,
    KeepPracticing,
}

impl Grade {
    pub fn from_percentage(percentage: u32) -> Self {
        if percentage >= 90 {
            Grade::Excellent
        } else if percentage >= 70 {
            Grade::Great
        } else if percentage >= 50 {
            Grade::Good
        } else {
            Grade::KeepPracticing
        }
    }

    /// Stars awarded with this grade (0-3).
    pub fn stars(&self) -> u8 {
        match self {
            Grade::Excellent => 3,
            Grade::Great => 2,
            Grade::Good => 1,
            Grade::KeepPracticing => 0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::Excellent => "Excellent!",
            Grade::Great => "Very good!",
            Grade::Good => "Well done!",
            Grade::KeepPracticing => "Keep practicing!",
        }
    }
}

/// Format elapsed seconds as zero-padded mm:ss.
pub fn format_time(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
