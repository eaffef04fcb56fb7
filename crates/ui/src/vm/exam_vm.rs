use tracing::debug;

use services::{ExamResult, ExamRun, ExamService};
use study_core::model::{Advance, ExamId, ExamState, Question, option_index};

use crate::views::ViewError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExamOutcome {
    Continue,
    Completed,
}

/// Exam screen state: the catalogue until a run starts, then the run itself.
///
/// Reports [`ExamState::NotStarted`] while no run is held.
#[derive(Debug, Default)]
pub struct ExamVm {
    run: Option<ExamRun>,
}

impl ExamVm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> ExamState {
        self.run.as_ref().map_or(ExamState::NotStarted, ExamRun::state)
    }

    #[must_use]
    pub fn run(&self) -> Option<&ExamRun> {
        self.run.as_ref()
    }

    /// # Errors
    ///
    /// Returns `ViewError::Exam` if the exam cannot be started.
    pub fn start(&mut self, exams: &ExamService, id: &ExamId) -> Result<(), ViewError> {
        self.run = Some(exams.start_exam(id)?);
        Ok(())
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.run
            .as_ref()
            .filter(|run| run.state() == ExamState::InProgress)
            .map(ExamRun::current_question)
    }

    /// "Question 2 of 3".
    #[must_use]
    pub fn position_label(&self) -> Option<String> {
        let run = self.run.as_ref()?;
        let session = run.session();
        Some(format!(
            "Question {} of {}",
            session.current_index() + 1,
            session.total_questions()
        ))
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.run.as_ref().and_then(ExamRun::selected)
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.run.as_ref().is_some_and(ExamRun::can_submit)
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        match &self.run {
            Some(run) if run.session().is_last_question() => "Finish Exam",
            _ => "Next Question",
        }
    }

    /// # Errors
    ///
    /// Returns `ViewError::NoExam` without a run, or the run's own error.
    pub fn select(&mut self, option: usize) -> Result<(), ViewError> {
        let run = self.run.as_mut().ok_or(ViewError::NoExam)?;
        run.select(option)?;
        Ok(())
    }

    /// Select by option letter (`A`, `b`, ...).
    ///
    /// # Errors
    ///
    /// Returns `ViewError::UnknownOption` for a letter outside the current
    /// question's options.
    pub fn select_label(&mut self, label: char) -> Result<(), ViewError> {
        let count = self
            .current_question()
            .map_or(0, Question::option_count);
        let index = option_index(label)
            .filter(|i| *i < count)
            .ok_or(ViewError::UnknownOption(label))?;
        self.select(index)
    }

    /// # Errors
    ///
    /// Returns `ViewError::Exam` with `NoAnswer` while nothing is selected.
    pub fn submit(&mut self) -> Result<ExamOutcome, ViewError> {
        let run = self.run.as_mut().ok_or(ViewError::NoExam)?;
        Ok(match run.submit()? {
            Advance::InProgress => ExamOutcome::Continue,
            Advance::Complete => ExamOutcome::Completed,
        })
    }

    /// # Errors
    ///
    /// Returns `ViewError::NoExam` without a run, or `NotComplete` mid-exam.
    pub fn result(&self) -> Result<ExamResult, ViewError> {
        let run = self.run.as_ref().ok_or(ViewError::NoExam)?;
        Ok(run.result()?)
    }

    /// Start over on the same questions.
    pub fn retake(&mut self) {
        if let Some(run) = self.run.take() {
            self.run = Some(run.restart());
        }
    }

    /// Leave the exam and return to the catalogue.
    pub fn back(&mut self) {
        if let Some(run) = self.run.take() {
            debug!(exam = %run.exam().id(), "exam abandoned");
        }
    }
}
