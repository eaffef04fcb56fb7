use std::sync::Arc;

use tracing::debug;

use content::ExamRepository;
use study_core::model::{ExamCategory, ExamId, ScoreRecord};

use super::run::ExamRun;
use crate::Clock;
use crate::error::ExamServiceError;

/// Catalogue entry for an exam category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamListItem {
    pub exam: ExamCategory,
    /// Questions bundled for practice; the full length is on `exam`.
    pub sample_questions: usize,
    /// Best recorded attempt for this exam, if any.
    pub best_score: Option<ScoreRecord>,
}

/// Lists exam categories and starts practice runs.
#[derive(Clone)]
pub struct ExamService {
    clock: Clock,
    exams: Arc<dyn ExamRepository>,
}

impl ExamService {
    #[must_use]
    pub fn new(clock: Clock, exams: Arc<dyn ExamRepository>) -> Self {
        Self { clock, exams }
    }

    /// Every exam with its bundled question count and best score.
    ///
    /// # Errors
    ///
    /// Returns `ExamServiceError::Content` if an exam's questions cannot be read.
    pub fn list_exams(&self) -> Result<Vec<ExamListItem>, ExamServiceError> {
        let history = self.exams.score_history();
        self.exams
            .list_exams()
            .into_iter()
            .map(|exam| {
                let sample_questions = self.exams.questions(exam.id())?.len();
                let best_score = best_for(&history, exam.id()).cloned();
                Ok(ExamListItem {
                    exam,
                    sample_questions,
                    best_score,
                })
            })
            .collect()
    }

    /// Begin a run over the exam's questions in authored order.
    ///
    /// # Errors
    ///
    /// Returns `ExamServiceError::Content` for an unknown exam.
    pub fn start_exam(&self, id: &ExamId) -> Result<ExamRun, ExamServiceError> {
        let exam = self.exams.get_exam(id)?;
        let questions = self.exams.questions(id)?;
        debug!(exam = %id, "starting exam run");
        ExamRun::start(exam, questions, self.clock)
    }

    /// Recorded scores, newest first.
    #[must_use]
    pub fn recent_scores(&self) -> Vec<ScoreRecord> {
        let mut scores = self.exams.score_history();
        scores.sort_by(|a, b| b.taken_on().cmp(&a.taken_on()));
        scores
    }
}

fn best_for<'a>(history: &'a [ScoreRecord], id: &ExamId) -> Option<&'a ScoreRecord> {
    history
        .iter()
        .filter(|s| s.exam_id() == id)
        .max_by_key(|s| (s.percentage(), s.taken_on()))
}
