use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

use crate::model::{Question, percent_of};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExamSessionError {
    #[error("an exam needs at least one question")]
    InvalidInput,

    #[error("option {index} is out of range for a question with {len} options")]
    OutOfRange { index: usize, len: usize },

    #[error("cannot record an answer while the exam is {state}")]
    InvalidState { state: ExamState },
}

/// Lifecycle of a practice exam attempt.
///
/// A live [`ExamSession`] is always `InProgress` or `Complete`; `NotStarted` is
/// what a host reports while it holds no session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExamState {
    NotStarted,
    InProgress,
    Complete,
}

impl fmt::Display for ExamState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ExamState::NotStarted => "not started",
            ExamState::InProgress => "in progress",
            ExamState::Complete => "complete",
        };
        f.write_str(label)
    }
}

/// Outcome of [`ExamSession::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    InProgress,
    Complete,
}

/// Correct answers out of the questions in a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExamScore {
    correct: usize,
    total: usize,
}

impl ExamScore {
    #[must_use]
    pub fn correct(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn incorrect(&self) -> usize {
        self.total - self.correct
    }

    /// `round(100 * correct / total)`, halves rounded up.
    #[must_use]
    pub fn percentage(&self) -> u8 {
        rounded_percent(self.correct, self.total)
    }
}

/// Per-question outcome used by results views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionOutcome {
    pub index: usize,
    pub selected: Option<usize>,
    pub correct_option: usize,
}

impl QuestionOutcome {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.selected == Some(self.correct_option)
    }
}

/// One attempt at a fixed, ordered set of questions.
///
/// The session steps through questions in order. Answers are recorded for the
/// current question only and may be overwritten until the session advances past
/// it; advancing is explicit and never happens as a side effect of answering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamSession {
    questions: Vec<Question>,
    current: usize,
    answers: BTreeMap<usize, usize>,
    complete: bool,
}

impl ExamSession {
    /// Start a session at the first question with no answers.
    ///
    /// # Errors
    ///
    /// Returns `ExamSessionError::InvalidInput` if `questions` is empty.
    pub fn start(questions: Vec<Question>) -> Result<Self, ExamSessionError> {
        if questions.is_empty() {
            return Err(ExamSessionError::InvalidInput);
        }
        Ok(Self {
            questions,
            current: 0,
            answers: BTreeMap::new(),
            complete: false,
        })
    }

    #[must_use]
    pub fn state(&self) -> ExamState {
        if self.complete {
            ExamState::Complete
        } else {
            ExamState::InProgress
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> &Question {
        &self.questions[self.current]
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.current + 1 == self.questions.len()
    }

    /// Recorded option for the question at `index`, if any.
    #[must_use]
    pub fn answer(&self, index: usize) -> Option<usize> {
        self.answers.get(&index).copied()
    }

    /// Recorded option for the current question, if any.
    #[must_use]
    pub fn current_answer(&self) -> Option<usize> {
        self.answer(self.current)
    }

    /// Recorded answers as `(question index, option index)`, ordered by question.
    pub fn answers(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.answers.iter().map(|(q, o)| (*q, *o))
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// Record `option` as the answer to the current question, replacing any
    /// earlier answer to it.
    ///
    /// # Errors
    ///
    /// Returns `ExamSessionError::InvalidState` once the session is complete and
    /// `ExamSessionError::OutOfRange` if `option` does not index the current
    /// question's options. Recorded answers are left untouched on error.
    pub fn record_answer(&mut self, option: usize) -> Result<(), ExamSessionError> {
        if self.complete {
            return Err(ExamSessionError::InvalidState {
                state: ExamState::Complete,
            });
        }
        let len = self.current_question().option_count();
        if option >= len {
            return Err(ExamSessionError::OutOfRange { index: option, len });
        }
        self.answers.insert(self.current, option);
        Ok(())
    }

    /// Move to the next question, or complete the session on the last one.
    ///
    /// Advancing a complete session returns `Advance::Complete` and changes nothing.
    pub fn advance(&mut self) -> Advance {
        if self.complete {
            return Advance::Complete;
        }
        if self.is_last_question() {
            self.complete = true;
            Advance::Complete
        } else {
            self.current += 1;
            Advance::InProgress
        }
    }

    /// Score the session. Unanswered questions count as incorrect.
    #[must_use]
    pub fn score(&self) -> ExamScore {
        let correct = self
            .answers
            .iter()
            .filter(|(q, o)| self.questions[**q].is_correct(**o))
            .count();
        ExamScore {
            correct,
            total: self.questions.len(),
        }
    }

    /// Outcome for every question in order, answered or not.
    pub fn outcomes(&self) -> impl Iterator<Item = QuestionOutcome> + '_ {
        self.questions
            .iter()
            .enumerate()
            .map(|(index, question)| QuestionOutcome {
                index,
                selected: self.answer(index),
                correct_option: question.correct_option(),
            })
    }

    /// Position through the exam as a percentage, counting the current question
    /// as reached.
    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        rounded_percent(self.current + 1, self.questions.len())
    }

    /// Discard this attempt and start a fresh one on the same questions.
    #[must_use]
    pub fn restart(self) -> Self {
        Self {
            questions: self.questions,
            current: 0,
            answers: BTreeMap::new(),
            complete: false,
        }
    }
}

fn rounded_percent(part: usize, whole: usize) -> u8 {
    percent_of(part as u64, whole as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(correct: usize, options: usize) -> Question {
        let options = (0..options).map(|i| format!("option {i}")).collect();
        Question::new("Q", options, correct, "because").unwrap()
    }

    fn session(correct: &[usize]) -> ExamSession {
        ExamSession::start(correct.iter().map(|c| question(*c, 4)).collect()).unwrap()
    }

    #[test]
    fn start_rejects_empty_question_set() {
        assert_eq!(
            ExamSession::start(Vec::new()).unwrap_err(),
            ExamSessionError::InvalidInput
        );
    }

    #[test]
    fn start_begins_at_first_question() {
        let session = session(&[0, 1]);
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.answered_count(), 0);
        assert_eq!(session.state(), ExamState::InProgress);
    }

    #[test]
    fn record_answer_overwrites_current() {
        let mut session = session(&[0, 1]);
        session.record_answer(2).unwrap();
        session.record_answer(3).unwrap();
        assert_eq!(session.current_answer(), Some(3));
        assert_eq!(session.answered_count(), 1);
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn out_of_range_answer_leaves_answers_unchanged() {
        let mut session = session(&[0]);
        session.record_answer(1).unwrap();
        let err = session.record_answer(5).unwrap_err();
        assert_eq!(err, ExamSessionError::OutOfRange { index: 5, len: 4 });
        assert_eq!(session.current_answer(), Some(1));
    }

    #[test]
    fn advance_completes_on_last_question_and_stays_complete() {
        let mut session = session(&[0, 1, 1]);
        assert_eq!(session.advance(), Advance::InProgress);
        assert_eq!(session.advance(), Advance::InProgress);
        assert_eq!(session.current_index(), 2);
        assert!(session.is_last_question());
        assert_eq!(session.advance(), Advance::Complete);
        assert_eq!(session.advance(), Advance::Complete);
        assert_eq!(session.current_index(), 2);
        assert_eq!(session.state(), ExamState::Complete);
    }

    #[test]
    fn record_answer_after_completion_is_invalid_state() {
        let mut session = session(&[0]);
        session.advance();
        assert_eq!(
            session.record_answer(0).unwrap_err(),
            ExamSessionError::InvalidState {
                state: ExamState::Complete
            }
        );
    }

    #[test]
    fn scores_mixed_answers() {
        let mut session = session(&[0, 1, 1]);
        for answer in [0, 1, 0] {
            session.record_answer(answer).unwrap();
            session.advance();
        }
        let score = session.score();
        assert_eq!(score.correct(), 2);
        assert_eq!(score.total(), 3);
        assert_eq!(score.incorrect(), 1);
        assert_eq!(score.percentage(), 67);
    }

    #[test]
    fn unanswered_questions_score_zero() {
        let session = session(&[0, 1]);
        let score = session.score();
        assert_eq!(score.correct(), 0);
        assert_eq!(score.percentage(), 0);
    }

    #[test]
    fn outcomes_cover_unanswered_questions() {
        let mut session = session(&[2, 0]);
        session.record_answer(2).unwrap();
        let outcomes: Vec<_> = session.outcomes().collect();
        assert_eq!(outcomes.len(), 2);
        assert!(outcomes[0].is_correct());
        assert_eq!(outcomes[1].selected, None);
        assert!(!outcomes[1].is_correct());
    }

    #[test]
    fn progress_counts_current_question() {
        let mut session = session(&[0, 0, 0]);
        assert_eq!(session.progress_percent(), 33);
        session.advance();
        assert_eq!(session.progress_percent(), 67);
        session.advance();
        assert_eq!(session.progress_percent(), 100);
    }

    #[test]
    fn percentage_rounds_half_up() {
        let score = ExamScore {
            correct: 1,
            total: 8,
        };
        assert_eq!(score.percentage(), 13);
    }

    #[test]
    fn restart_clears_progress() {
        let mut session = session(&[0, 1]);
        session.record_answer(0).unwrap();
        session.advance();
        session.advance();
        let fresh = session.restart();
        assert_eq!(fresh.current_index(), 0);
        assert_eq!(fresh.answered_count(), 0);
        assert!(!fresh.is_complete());
        assert_eq!(fresh.total_questions(), 2);
    }
}
