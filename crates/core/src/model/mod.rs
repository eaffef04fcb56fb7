mod anatomy;
mod exam;
mod flashcard;
mod hospital;
mod ids;
mod progress;
mod question;
mod schedule;
mod session;

pub use ids::{DeckId, ExamId, ParseIdError, SystemId};

pub use anatomy::{AnatomyError, AnatomySelection, AnatomySystem, Structure};
pub use exam::{ExamCategory, ExamError, ScoreBand, ScoreRecord};
pub use flashcard::{Flashcard, FlashcardCursor, FlashcardDeck, FlashcardError};
pub use hospital::{
    ClinicalReferences, HospitalError, LabPanel, LabStatus, LabValue, Medication, ProcedureLog,
    ProcedureRole, ReferenceEntry, ReferenceRange,
};
pub use progress::{Achievement, DailyActivity, DailyStats, ProgressError, SubjectProgress};
pub use question::{Difficulty, Question, QuestionError, option_index, option_label};
pub use schedule::{
    BlockStatus, DayPlan, Deadline, DeadlineKind, DeadlineUrgency, Priority, ScheduleError,
    StudyBlock,
};
pub use session::{
    Advance, ExamScore, ExamSession, ExamSessionError, ExamState, QuestionOutcome,
};

/// `round(100 * part / whole)` with halves rounded up, clamped to 100.
///
/// An empty whole yields 0.
#[must_use]
pub fn percent_of(part: u64, whole: u64) -> u8 {
    if whole == 0 {
        return 0;
    }
    let scaled = (200 * part + whole) / (2 * whole);
    u8::try_from(scaled.min(100)).unwrap_or(100)
}
