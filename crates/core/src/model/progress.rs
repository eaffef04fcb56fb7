use chrono::{DateTime, Utc, Weekday};
use thiserror::Error;

use crate::model::Difficulty;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProgressError {
    #[error("subject name cannot be empty")]
    EmptySubject,

    #[error("completed topics ({completed}) exceed total ({total}) for {subject}")]
    CompletedExceedsTotal {
        subject: String,
        completed: u32,
        total: u32,
    },
}

/// Curriculum coverage for one subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectProgress {
    subject: String,
    completed: u32,
    total: u32,
    hours: u32,
    last_studied: DateTime<Utc>,
    next_milestone: String,
    difficulty: Difficulty,
}

impl SubjectProgress {
    /// # Errors
    ///
    /// Returns `ProgressError` for a blank subject or `completed > total`.
    pub fn new(
        subject: impl Into<String>,
        completed: u32,
        total: u32,
        hours: u32,
        last_studied: DateTime<Utc>,
        next_milestone: impl Into<String>,
        difficulty: Difficulty,
    ) -> Result<Self, ProgressError> {
        let subject = subject.into().trim().to_owned();
        if subject.is_empty() {
            return Err(ProgressError::EmptySubject);
        }
        if completed > total {
            return Err(ProgressError::CompletedExceedsTotal {
                subject,
                completed,
                total,
            });
        }
        Ok(Self {
            subject,
            completed,
            total,
            hours,
            last_studied,
            next_milestone: next_milestone.into(),
            difficulty,
        })
    }

    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    #[must_use]
    pub fn completed(&self) -> u32 {
        self.completed
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.total - self.completed
    }

    #[must_use]
    pub fn hours(&self) -> u32 {
        self.hours
    }

    #[must_use]
    pub fn last_studied(&self) -> DateTime<Utc> {
        self.last_studied
    }

    #[must_use]
    pub fn next_milestone(&self) -> &str {
        &self.next_milestone
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn percent(&self) -> u8 {
        crate::model::percent_of(u64::from(self.completed), u64::from(self.total))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyActivity {
    pub day: Weekday,
    pub hours: f32,
    pub cards: u32,
    pub exams: u32,
}

/// Headline numbers for the current day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DailyStats {
    pub streak_days: u32,
    pub cards_reviewed: u32,
    pub practice_questions: u32,
    pub study_minutes: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Achievement {
    pub name: String,
    pub description: String,
    pub earned: bool,
}
