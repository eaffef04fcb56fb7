use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScheduleError {
    #[error("study block must end after it starts ({start} - {end})")]
    InvalidTimeRange { start: NaiveTime, end: NaiveTime },

    #[error("completed sessions ({completed}) exceed planned sessions ({sessions})")]
    CompletedExceedsPlanned { completed: u32, sessions: u32 },

    #[error("{field} cannot be empty")]
    EmptyField { field: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockStatus {
    Completed,
    InProgress,
    Upcoming,
}

impl fmt::Display for BlockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BlockStatus::Completed => "completed",
            BlockStatus::InProgress => "in progress",
            BlockStatus::Upcoming => "upcoming",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        };
        f.write_str(label)
    }
}

/// A planned study slot within a day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudyBlock {
    start: NaiveTime,
    end: NaiveTime,
    subject: String,
    topic: String,
    activity: String,
    status: BlockStatus,
    priority: Priority,
}

impl StudyBlock {
    /// # Errors
    ///
    /// Returns `ScheduleError::InvalidTimeRange` unless `start < end`, and
    /// `ScheduleError::EmptyField` for a blank subject.
    pub fn new(
        start: NaiveTime,
        end: NaiveTime,
        subject: impl Into<String>,
        topic: impl Into<String>,
        activity: impl Into<String>,
        status: BlockStatus,
        priority: Priority,
    ) -> Result<Self, ScheduleError> {
        if start >= end {
            return Err(ScheduleError::InvalidTimeRange { start, end });
        }
        let subject = subject.into().trim().to_owned();
        if subject.is_empty() {
            return Err(ScheduleError::EmptyField {
                field: "block subject",
            });
        }
        Ok(Self {
            start,
            end,
            subject,
            topic: topic.into(),
            activity: activity.into(),
            status,
            priority,
        })
    }

    #[must_use]
    pub fn start(&self) -> NaiveTime {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> NaiveTime {
        self.end
    }

    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    #[must_use]
    pub fn activity(&self) -> &str {
        &self.activity
    }

    #[must_use]
    pub fn status(&self) -> BlockStatus {
        self.status
    }

    #[must_use]
    pub fn priority(&self) -> Priority {
        self.priority
    }

    #[must_use]
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// Planned versus completed sessions for one day of the week view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayPlan {
    date: NaiveDate,
    sessions: u32,
    hours: f32,
    completed: u32,
}

impl DayPlan {
    /// # Errors
    ///
    /// Returns `ScheduleError::CompletedExceedsPlanned` if `completed > sessions`.
    pub fn new(
        date: NaiveDate,
        sessions: u32,
        hours: f32,
        completed: u32,
    ) -> Result<Self, ScheduleError> {
        if completed > sessions {
            return Err(ScheduleError::CompletedExceedsPlanned {
                completed,
                sessions,
            });
        }
        Ok(Self {
            date,
            sessions,
            hours,
            completed,
        })
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub fn sessions(&self) -> u32 {
        self.sessions
    }

    #[must_use]
    pub fn hours(&self) -> f32 {
        self.hours
    }

    #[must_use]
    pub fn completed(&self) -> u32 {
        self.completed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeadlineKind {
    Exam,
    Practice,
    Assignment,
    Quiz,
}

impl DeadlineKind {
    /// Kinds that count as an upcoming assessment on the dashboard.
    #[must_use]
    pub fn is_assessment(self) -> bool {
        !matches!(self, DeadlineKind::Assignment)
    }
}

impl fmt::Display for DeadlineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DeadlineKind::Exam => "Exam",
            DeadlineKind::Practice => "Practice",
            DeadlineKind::Assignment => "Assignment",
            DeadlineKind::Quiz => "Quiz",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deadline {
    pub title: String,
    pub date: NaiveDate,
    pub priority: Priority,
    pub kind: DeadlineKind,
}

impl Deadline {
    /// Whole days from `today` until the deadline; negative once it has passed.
    #[must_use]
    pub fn days_left(&self, today: NaiveDate) -> i64 {
        (self.date - today).num_days()
    }

    #[must_use]
    pub fn urgency(&self, today: NaiveDate) -> DeadlineUrgency {
        DeadlineUrgency::from_days_left(self.days_left(today))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DeadlineUrgency {
    Urgent,
    Soon,
    Later,
}

impl DeadlineUrgency {
    #[must_use]
    pub fn from_days_left(days_left: i64) -> Self {
        match days_left {
            ..=3 => DeadlineUrgency::Urgent,
            4..=7 => DeadlineUrgency::Soon,
            _ => DeadlineUrgency::Later,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, d).unwrap()
    }

    #[test]
    fn block_duration() {
        let block = StudyBlock::new(
            time(9, 0),
            time(10, 30),
            "Cardiology",
            "Arrhythmias",
            "Flashcards",
            BlockStatus::Completed,
            Priority::High,
        )
        .unwrap();
        assert_eq!(block.duration_minutes(), 90);
    }

    #[test]
    fn block_rejects_inverted_times() {
        let err = StudyBlock::new(
            time(11, 0),
            time(10, 0),
            "Anatomy",
            "",
            "",
            BlockStatus::Upcoming,
            Priority::Low,
        )
        .unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidTimeRange { .. }));
    }

    #[test]
    fn day_plan_rejects_overcompletion() {
        assert!(DayPlan::new(day(15), 2, 1.5, 3).is_err());
    }

    #[test]
    fn deadline_urgency_thresholds() {
        let deadline = Deadline {
            title: "Cardiology Final Exam".into(),
            date: day(25),
            priority: Priority::High,
            kind: DeadlineKind::Exam,
        };
        assert_eq!(deadline.days_left(day(18)), 7);
        assert_eq!(deadline.urgency(day(18)), DeadlineUrgency::Soon);
        assert_eq!(deadline.urgency(day(22)), DeadlineUrgency::Urgent);
        assert_eq!(deadline.urgency(day(17)), DeadlineUrgency::Later);
        assert_eq!(deadline.days_left(day(26)), -1);
    }
}
