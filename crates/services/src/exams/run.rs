use chrono::{DateTime, Utc};
use tracing::{debug, info};

use study_core::model::{
    Advance, ExamCategory, ExamScore, ExamSession, ExamState, Question, ScoreBand, option_label,
};

use crate::Clock;
use crate::error::ExamServiceError;

//
// ─── RESULT ────────────────────────────────────────────────────────────────────
//

/// One row of the post-exam review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionReview {
    pub number: usize,
    pub prompt: String,
    pub selected: Option<String>,
    pub correct: String,
    pub is_correct: bool,
    pub explanation: String,
}

/// Final tally for a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamResult {
    pub score: ExamScore,
    pub percentage: u8,
    pub band: ScoreBand,
    pub reviews: Vec<QuestionReview>,
}

//
// ─── RUN ───────────────────────────────────────────────────────────────────────
//

/// A practice exam attempt bound to its category and the clock.
///
/// Wraps [`ExamSession`] and adds the rule that submitting requires an answer to
/// the current question.
#[derive(Debug, Clone)]
pub struct ExamRun {
    exam: ExamCategory,
    session: ExamSession,
    clock: Clock,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl ExamRun {
    /// # Errors
    ///
    /// Returns `ExamServiceError::Session` if `questions` is empty.
    pub fn start(
        exam: ExamCategory,
        questions: Vec<Question>,
        clock: Clock,
    ) -> Result<Self, ExamServiceError> {
        let session = ExamSession::start(questions)?;
        info!(
            exam = %exam.id(),
            questions = session.total_questions(),
            "exam started"
        );
        Ok(Self {
            exam,
            session,
            started_at: clock.now(),
            clock,
            completed_at: None,
        })
    }

    #[must_use]
    pub fn exam(&self) -> &ExamCategory {
        &self.exam
    }

    #[must_use]
    pub fn session(&self) -> &ExamSession {
        &self.session
    }

    #[must_use]
    pub fn state(&self) -> ExamState {
        self.session.state()
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn current_question(&self) -> &Question {
        self.session.current_question()
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.session.current_answer()
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.session.is_complete() && self.session.current_answer().is_some()
    }

    /// Select an option for the current question.
    ///
    /// # Errors
    ///
    /// Returns `ExamServiceError::Session` for an out-of-range option or a
    /// completed run.
    pub fn select(&mut self, option: usize) -> Result<(), ExamServiceError> {
        self.session.record_answer(option)?;
        debug!(
            question = self.session.current_index(),
            option, "answer selected"
        );
        Ok(())
    }

    /// Submit the current answer and move on.
    ///
    /// # Errors
    ///
    /// Returns `ExamServiceError::Completed` on a finished run and
    /// `ExamServiceError::NoAnswer` if nothing is selected.
    pub fn submit(&mut self) -> Result<Advance, ExamServiceError> {
        if self.session.is_complete() {
            return Err(ExamServiceError::Completed);
        }
        if self.session.current_answer().is_none() {
            return Err(ExamServiceError::NoAnswer);
        }
        let step = self.session.advance();
        if step == Advance::Complete {
            self.completed_at = Some(self.clock.now());
            let score = self.session.score();
            info!(
                exam = %self.exam.id(),
                correct = score.correct(),
                total = score.total(),
                "exam completed"
            );
        }
        Ok(step)
    }

    /// Score breakdown for a completed run.
    ///
    /// # Errors
    ///
    /// Returns `ExamServiceError::NotComplete` while questions remain.
    pub fn result(&self) -> Result<ExamResult, ExamServiceError> {
        if !self.session.is_complete() {
            return Err(ExamServiceError::NotComplete);
        }
        let score = self.session.score();
        let percentage = score.percentage();
        let questions = self.session.questions();
        let reviews = self
            .session
            .outcomes()
            .map(|outcome| {
                let question = &questions[outcome.index];
                QuestionReview {
                    number: outcome.index + 1,
                    prompt: question.prompt().to_owned(),
                    selected: outcome.selected.map(|i| labelled(question, i)),
                    correct: labelled(question, outcome.correct_option),
                    is_correct: outcome.is_correct(),
                    explanation: question.explanation().to_owned(),
                }
            })
            .collect();
        Ok(ExamResult {
            score,
            percentage,
            band: ScoreBand::from_percentage(percentage),
            reviews,
        })
    }

    /// Fresh attempt on the same questions, timed from now.
    #[must_use]
    pub fn restart(self) -> Self {
        debug!(exam = %self.exam.id(), "exam restarted");
        Self {
            started_at: self.clock.now(),
            completed_at: None,
            session: self.session.restart(),
            exam: self.exam,
            clock: self.clock,
        }
    }
}

fn labelled(question: &Question, index: usize) -> String {
    let text = question.option(index).unwrap_or_default();
    match option_label(index) {
        Some(label) => format!("{label}. {text}"),
        None => text.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use study_core::model::{Difficulty, ExamId};
    use study_core::time::{fixed_clock, fixed_now};

    fn exam() -> ExamCategory {
        ExamCategory::new(
            ExamId::new("cardiology-mcq").unwrap(),
            "Cardiology MCQ",
            25,
            45,
            Difficulty::Medium,
        )
        .unwrap()
    }

    fn question(correct: usize) -> Question {
        Question::new(
            "Pick the right one",
            vec!["First".into(), "Second".into(), "Third".into()],
            correct,
            "Because.",
        )
        .unwrap()
    }

    fn run() -> ExamRun {
        ExamRun::start(exam(), vec![question(0), question(1)], fixed_clock()).unwrap()
    }

    #[test]
    fn submit_requires_selection() {
        let mut run = run();
        assert!(!run.can_submit());
        assert!(matches!(run.submit(), Err(ExamServiceError::NoAnswer)));
        assert_eq!(run.session().current_index(), 0);
    }

    #[test]
    fn completes_and_stamps_time() {
        let mut run = run();
        run.select(0).unwrap();
        assert_eq!(run.submit().unwrap(), Advance::InProgress);
        run.select(2).unwrap();
        assert_eq!(run.submit().unwrap(), Advance::Complete);
        assert_eq!(run.completed_at(), Some(fixed_now()));
        assert!(matches!(run.submit(), Err(ExamServiceError::Completed)));
    }

    #[test]
    fn result_lists_labelled_reviews() {
        let mut run = run();
        assert!(matches!(run.result(), Err(ExamServiceError::NotComplete)));
        run.select(0).unwrap();
        run.submit().unwrap();
        run.select(2).unwrap();
        run.submit().unwrap();

        let result = run.result().unwrap();
        assert_eq!(result.percentage, 50);
        assert_eq!(result.band, ScoreBand::Failing);
        assert_eq!(result.reviews[1].selected.as_deref(), Some("C. Third"));
        assert_eq!(result.reviews[1].correct, "B. Second");
        assert!(!result.reviews[1].is_correct);
        assert!(result.reviews[0].is_correct);
    }

    #[test]
    fn restart_clears_answers() {
        let mut run = run();
        run.select(1).unwrap();
        let run = run.restart();
        assert_eq!(run.selected(), None);
        assert_eq!(run.state(), ExamState::InProgress);
        assert_eq!(run.completed_at(), None);
    }
}
