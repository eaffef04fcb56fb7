use thiserror::Error;

use crate::model::{
    AnatomyError, ExamError, ExamSessionError, FlashcardError, HospitalError, ParseIdError,
    ProgressError, QuestionError, ScheduleError,
};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Id(#[from] ParseIdError),
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Exam(#[from] ExamError),
    #[error(transparent)]
    Session(#[from] ExamSessionError),
    #[error(transparent)]
    Flashcard(#[from] FlashcardError),
    #[error(transparent)]
    Anatomy(#[from] AnatomyError),
    #[error(transparent)]
    Hospital(#[from] HospitalError),
    #[error(transparent)]
    Schedule(#[from] ScheduleError),
    #[error(transparent)]
    Progress(#[from] ProgressError),
}
