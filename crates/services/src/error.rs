//! Shared error types for the services crate.

use thiserror::Error;

use content::ContentError;
use study_core::model::{ExamSessionError, SystemId};

/// Errors emitted by `ExamService` and `ExamRun`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExamServiceError {
    #[error("select an answer before submitting")]
    NoAnswer,
    #[error("exam already completed")]
    Completed,
    #[error("exam is still in progress")]
    NotComplete,
    #[error(transparent)]
    Session(#[from] ExamSessionError),
    #[error(transparent)]
    Content(#[from] ContentError),
}

/// Errors emitted by `FlashcardService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FlashcardServiceError {
    #[error("deck {0} has no sample cards")]
    EmptyDeck(String),
    #[error(transparent)]
    Content(#[from] ContentError),
}

/// Errors emitted by `AnatomyService` and `AnatomyViewer`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AnatomyServiceError {
    #[error("no anatomy systems available")]
    NoSystems,
    #[error("{system} has no structure named {name:?}")]
    UnknownStructure { system: SystemId, name: String },
    #[error(transparent)]
    Content(#[from] ContentError),
}

/// Errors emitted by `HospitalService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HospitalServiceError {
    #[error("no medication named {0:?}")]
    UnknownMedication(String),
}

/// Errors emitted while assembling app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Content(#[from] ContentError),
}
