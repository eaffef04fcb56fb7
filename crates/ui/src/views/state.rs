use thiserror::Error;

use services::{
    AnatomyServiceError, ExamServiceError, FlashcardServiceError, HospitalServiceError,
};

/// Failures surfaced to the user by view-models.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ViewError {
    #[error("no exam in progress")]
    NoExam,
    #[error("no option labelled {0:?}")]
    UnknownOption(char),
    #[error(transparent)]
    Exam(#[from] ExamServiceError),
    #[error(transparent)]
    Flashcard(#[from] FlashcardServiceError),
    #[error(transparent)]
    Anatomy(#[from] AnatomyServiceError),
    #[error(transparent)]
    Hospital(#[from] HospitalServiceError),
}

impl ViewError {
    /// Short text suitable for a status line.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            ViewError::Exam(ExamServiceError::NoAnswer) => {
                "Select an answer to continue.".to_owned()
            }
            other => format!("{other}"),
        }
    }
}
