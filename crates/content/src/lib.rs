#![forbid(unsafe_code)]

pub mod fixtures;
pub mod records;
pub mod repository;

pub use records::RecordError;
pub use repository::{
    AnatomyRepository, Catalog, Content, ContentError, DeckEntry, ExamEntry, ExamRepository,
    FlashcardRepository, HospitalRepository, InMemoryRepository, ProgressRepository,
    ScheduleRepository,
};
