use chrono::NaiveDate;
use std::fmt;
use thiserror::Error;

use crate::model::{Difficulty, ExamId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExamError {
    #[error("exam name cannot be empty")]
    EmptyName,

    #[error("exam duration must be > 0 minutes")]
    InvalidDuration,

    #[error("exam length must be > 0 questions")]
    InvalidLength,

    #[error("score {score} exceeds total {total}")]
    ScoreExceedsTotal { score: u32, total: u32 },

    #[error("score total must be > 0")]
    EmptyTotal,
}

/// A practice exam offered in the catalogue.
///
/// `question_count` is the length of the full exam; the bundled content only
/// carries a sample of its questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamCategory {
    id: ExamId,
    name: String,
    question_count: u32,
    duration_minutes: u32,
    difficulty: Difficulty,
}

impl ExamCategory {
    /// # Errors
    ///
    /// Returns `ExamError::EmptyName` for a blank name,
    /// `ExamError::InvalidLength` for zero questions and
    /// `ExamError::InvalidDuration` for a zero duration.
    pub fn new(
        id: ExamId,
        name: impl Into<String>,
        question_count: u32,
        duration_minutes: u32,
        difficulty: Difficulty,
    ) -> Result<Self, ExamError> {
        let name = name.into().trim().to_owned();
        if name.is_empty() {
            return Err(ExamError::EmptyName);
        }
        if question_count == 0 {
            return Err(ExamError::InvalidLength);
        }
        if duration_minutes == 0 {
            return Err(ExamError::InvalidDuration);
        }
        Ok(Self {
            id,
            name,
            question_count,
            duration_minutes,
            difficulty,
        })
    }

    #[must_use]
    pub fn id(&self) -> &ExamId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn question_count(&self) -> u32 {
        self.question_count
    }

    #[must_use]
    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

/// Performance band used to colour a past result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ScoreBand {
    Failing,
    Passing,
    Strong,
}

impl ScoreBand {
    #[must_use]
    pub fn from_percentage(percentage: u8) -> Self {
        match percentage {
            80.. => ScoreBand::Strong,
            70..=79 => ScoreBand::Passing,
            _ => ScoreBand::Failing,
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ScoreBand::Failing => "Needs work",
            ScoreBand::Passing => "Pass",
            ScoreBand::Strong => "Strong",
        };
        f.write_str(label)
    }
}

/// A past exam result, keyed to its exam by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreRecord {
    exam_id: ExamId,
    score: u32,
    total: u32,
    taken_on: NaiveDate,
}

impl ScoreRecord {
    /// # Errors
    ///
    /// Returns `ExamError::EmptyTotal` when `total` is zero and
    /// `ExamError::ScoreExceedsTotal` when `score > total`.
    pub fn new(
        exam_id: ExamId,
        score: u32,
        total: u32,
        taken_on: NaiveDate,
    ) -> Result<Self, ExamError> {
        if total == 0 {
            return Err(ExamError::EmptyTotal);
        }
        if score > total {
            return Err(ExamError::ScoreExceedsTotal { score, total });
        }
        Ok(Self {
            exam_id,
            score,
            total,
            taken_on,
        })
    }

    #[must_use]
    pub fn exam_id(&self) -> &ExamId {
        &self.exam_id
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn taken_on(&self) -> NaiveDate {
        self.taken_on
    }

    #[must_use]
    pub fn percentage(&self) -> u8 {
        let score = u64::from(self.score);
        let total = u64::from(self.total);
        u8::try_from((200 * score + total) / (2 * total)).unwrap_or(100)
    }

    #[must_use]
    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_percentage(self.percentage())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exam_id() -> ExamId {
        ExamId::new("cardiology-mcq").unwrap()
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 17).unwrap()
    }

    #[test]
    fn category_requires_name_length_and_duration() {
        assert_eq!(
            ExamCategory::new(exam_id(), " ", 25, 45, Difficulty::Medium).unwrap_err(),
            ExamError::EmptyName
        );
        assert_eq!(
            ExamCategory::new(exam_id(), "Cardiology MCQ", 0, 45, Difficulty::Medium).unwrap_err(),
            ExamError::InvalidLength
        );
        assert_eq!(
            ExamCategory::new(exam_id(), "Cardiology MCQ", 25, 0, Difficulty::Medium).unwrap_err(),
            ExamError::InvalidDuration
        );
        let exam = ExamCategory::new(exam_id(), "Cardiology MCQ", 25, 45, Difficulty::Medium)
            .unwrap();
        assert_eq!((exam.question_count(), exam.duration_minutes()), (25, 45));
    }

    #[test]
    fn score_record_bands() {
        let strong = ScoreRecord::new(exam_id(), 85, 100, day()).unwrap();
        let passing = ScoreRecord::new(exam_id(), 78, 100, day()).unwrap();
        let failing = ScoreRecord::new(exam_id(), 2, 5, day()).unwrap();
        assert_eq!(strong.band(), ScoreBand::Strong);
        assert_eq!(passing.band(), ScoreBand::Passing);
        assert_eq!(failing.percentage(), 40);
        assert_eq!(failing.band(), ScoreBand::Failing);
    }

    #[test]
    fn score_record_rejects_impossible_scores() {
        assert_eq!(
            ScoreRecord::new(exam_id(), 101, 100, day()).unwrap_err(),
            ExamError::ScoreExceedsTotal {
                score: 101,
                total: 100
            }
        );
        assert_eq!(
            ScoreRecord::new(exam_id(), 0, 0, day()).unwrap_err(),
            ExamError::EmptyTotal
        );
    }
}
