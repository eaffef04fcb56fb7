use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use study_core::model::{
    Achievement, AnatomySystem, ClinicalReferences, DailyActivity, DailyStats, DayPlan, Deadline,
    DeckId, ExamCategory, ExamId, Flashcard, FlashcardDeck, LabPanel, Medication, ProcedureLog,
    Question, ScoreRecord, StudyBlock, SubjectProgress, SystemId,
};

use crate::records::RecordError;

/// Errors surfaced while loading or querying study content.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ContentError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed {file}: {source}")]
    Parse {
        file: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid record in {file}: {source}")]
    Invalid {
        file: &'static str,
        #[source]
        source: RecordError,
    },

    #[error("duplicate {kind} id {id:?} in {file}")]
    DuplicateId {
        kind: &'static str,
        id: String,
        file: &'static str,
    },

    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("score history references unknown exam {0}")]
    DanglingExam(ExamId),

    #[error("exam {0} has no questions")]
    NoQuestions(ExamId),
}

impl ContentError {
    fn not_found(kind: &'static str, id: impl std::fmt::Display) -> Self {
        ContentError::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}

//
// ─── CONTRACTS ─────────────────────────────────────────────────────────────────
//

/// Read access to exam categories, their question banks, and past scores.
pub trait ExamRepository: Send + Sync {
    fn list_exams(&self) -> Vec<ExamCategory>;

    /// # Errors
    ///
    /// Returns `ContentError::NotFound` for an unknown exam.
    fn get_exam(&self, id: &ExamId) -> Result<ExamCategory, ContentError>;

    /// Sample questions for an exam, in authored order.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::NotFound` for an unknown exam.
    fn questions(&self, id: &ExamId) -> Result<Vec<Question>, ContentError>;

    fn score_history(&self) -> Vec<ScoreRecord>;
}

pub trait FlashcardRepository: Send + Sync {
    fn list_decks(&self) -> Vec<FlashcardDeck>;

    /// # Errors
    ///
    /// Returns `ContentError::NotFound` for an unknown deck.
    fn get_deck(&self, id: &DeckId) -> Result<FlashcardDeck, ContentError>;

    /// # Errors
    ///
    /// Returns `ContentError::NotFound` for an unknown deck.
    fn cards(&self, id: &DeckId) -> Result<Vec<Flashcard>, ContentError>;
}

pub trait AnatomyRepository: Send + Sync {
    fn systems(&self) -> Vec<AnatomySystem>;

    /// # Errors
    ///
    /// Returns `ContentError::NotFound` for an unknown system.
    fn get_system(&self, id: &SystemId) -> Result<AnatomySystem, ContentError>;
}

pub trait HospitalRepository: Send + Sync {
    fn lab_panels(&self) -> Vec<LabPanel>;
    fn medications(&self) -> Vec<Medication>;
    fn procedures(&self) -> Vec<ProcedureLog>;
    fn references(&self) -> ClinicalReferences;
}

pub trait ScheduleRepository: Send + Sync {
    fn daily_plan(&self) -> Vec<StudyBlock>;
    fn week(&self) -> Vec<DayPlan>;
    fn deadlines(&self) -> Vec<Deadline>;
}

pub trait ProgressRepository: Send + Sync {
    fn subjects(&self) -> Vec<SubjectProgress>;
    fn weekly_activity(&self) -> Vec<DailyActivity>;
    fn achievements(&self) -> Vec<Achievement>;
    fn daily_stats(&self) -> DailyStats;
}

//
// ─── IN-MEMORY ─────────────────────────────────────────────────────────────────
//

/// An exam together with its question bank.
#[derive(Debug, Clone)]
pub struct ExamEntry {
    pub exam: ExamCategory,
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone)]
pub struct DeckEntry {
    pub deck: FlashcardDeck,
    pub cards: Vec<Flashcard>,
}

/// Every piece of validated content, in authored order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub exams: Vec<ExamEntry>,
    pub scores: Vec<ScoreRecord>,
    pub decks: Vec<DeckEntry>,
    pub systems: Vec<AnatomySystem>,
    pub lab_panels: Vec<LabPanel>,
    pub medications: Vec<Medication>,
    pub procedures: Vec<ProcedureLog>,
    pub references: ClinicalReferences,
    pub daily_plan: Vec<StudyBlock>,
    pub week: Vec<DayPlan>,
    pub deadlines: Vec<Deadline>,
    pub subjects: Vec<SubjectProgress>,
    pub weekly_activity: Vec<DailyActivity>,
    pub achievements: Vec<Achievement>,
    pub daily_stats: DailyStats,
}

/// Read-only repository backed by a shared [`Catalog`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    inner: Arc<Catalog>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(catalog),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner
    }

    fn exam_entry(&self, id: &ExamId) -> Result<&ExamEntry, ContentError> {
        self.inner
            .exams
            .iter()
            .find(|entry| entry.exam.id() == id)
            .ok_or_else(|| ContentError::not_found("exam", id))
    }

    fn deck_entry(&self, id: &DeckId) -> Result<&DeckEntry, ContentError> {
        self.inner
            .decks
            .iter()
            .find(|entry| entry.deck.id() == id)
            .ok_or_else(|| ContentError::not_found("deck", id))
    }
}

impl ExamRepository for InMemoryRepository {
    fn list_exams(&self) -> Vec<ExamCategory> {
        self.inner.exams.iter().map(|e| e.exam.clone()).collect()
    }

    fn get_exam(&self, id: &ExamId) -> Result<ExamCategory, ContentError> {
        self.exam_entry(id).map(|e| e.exam.clone())
    }

    fn questions(&self, id: &ExamId) -> Result<Vec<Question>, ContentError> {
        self.exam_entry(id).map(|e| e.questions.clone())
    }

    fn score_history(&self) -> Vec<ScoreRecord> {
        self.inner.scores.clone()
    }
}

impl FlashcardRepository for InMemoryRepository {
    fn list_decks(&self) -> Vec<FlashcardDeck> {
        self.inner.decks.iter().map(|d| d.deck.clone()).collect()
    }

    fn get_deck(&self, id: &DeckId) -> Result<FlashcardDeck, ContentError> {
        self.deck_entry(id).map(|d| d.deck.clone())
    }

    fn cards(&self, id: &DeckId) -> Result<Vec<Flashcard>, ContentError> {
        self.deck_entry(id).map(|d| d.cards.clone())
    }
}

impl AnatomyRepository for InMemoryRepository {
    fn systems(&self) -> Vec<AnatomySystem> {
        self.inner.systems.clone()
    }

    fn get_system(&self, id: &SystemId) -> Result<AnatomySystem, ContentError> {
        self.inner
            .systems
            .iter()
            .find(|s| s.id() == id)
            .cloned()
            .ok_or_else(|| ContentError::not_found("anatomy system", id))
    }
}

impl HospitalRepository for InMemoryRepository {
    fn lab_panels(&self) -> Vec<LabPanel> {
        self.inner.lab_panels.clone()
    }

    fn medications(&self) -> Vec<Medication> {
        self.inner.medications.clone()
    }

    fn procedures(&self) -> Vec<ProcedureLog> {
        self.inner.procedures.clone()
    }

    fn references(&self) -> ClinicalReferences {
        self.inner.references.clone()
    }
}

impl ScheduleRepository for InMemoryRepository {
    fn daily_plan(&self) -> Vec<StudyBlock> {
        self.inner.daily_plan.clone()
    }

    fn week(&self) -> Vec<DayPlan> {
        self.inner.week.clone()
    }

    fn deadlines(&self) -> Vec<Deadline> {
        self.inner.deadlines.clone()
    }
}

impl ProgressRepository for InMemoryRepository {
    fn subjects(&self) -> Vec<SubjectProgress> {
        self.inner.subjects.clone()
    }

    fn weekly_activity(&self) -> Vec<DailyActivity> {
        self.inner.weekly_activity.clone()
    }

    fn achievements(&self) -> Vec<Achievement> {
        self.inner.achievements.clone()
    }

    fn daily_stats(&self) -> DailyStats {
        self.inner.daily_stats
    }
}

/// Aggregates the content repositories behind trait objects so callers never
/// depend on where the content came from.
#[derive(Clone)]
pub struct Content {
    pub exams: Arc<dyn ExamRepository>,
    pub flashcards: Arc<dyn FlashcardRepository>,
    pub anatomy: Arc<dyn AnatomyRepository>,
    pub hospital: Arc<dyn HospitalRepository>,
    pub schedule: Arc<dyn ScheduleRepository>,
    pub progress: Arc<dyn ProgressRepository>,
}

impl Content {
    #[must_use]
    pub fn from_repository(repo: InMemoryRepository) -> Self {
        Self {
            exams: Arc::new(repo.clone()),
            flashcards: Arc::new(repo.clone()),
            anatomy: Arc::new(repo.clone()),
            hospital: Arc::new(repo.clone()),
            schedule: Arc::new(repo.clone()),
            progress: Arc::new(repo),
        }
    }

    /// Content compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns `ContentError` if the bundled fixtures fail validation.
    pub fn embedded() -> Result<Self, ContentError> {
        crate::fixtures::load_embedded()
            .map(|catalog| Self::from_repository(InMemoryRepository::new(catalog)))
    }

    /// Content read from a directory holding the six fixture documents.
    ///
    /// # Errors
    ///
    /// Returns `ContentError` if a file is missing, malformed, or invalid.
    pub fn from_dir(dir: impl AsRef<std::path::Path>) -> Result<Self, ContentError> {
        crate::fixtures::load_dir(dir.as_ref())
            .map(|catalog| Self::from_repository(InMemoryRepository::new(catalog)))
    }
}

impl std::fmt::Debug for Content {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Content").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use study_core::model::Difficulty;

    fn exam(id: &str) -> ExamEntry {
        let exam = ExamCategory::new(
            ExamId::new(id).unwrap(),
            "Cardiology MCQ",
            25,
            45,
            Difficulty::Medium,
        )
        .unwrap();
        let question = Question::new(
            "Which valve sits between the left atrium and left ventricle?",
            vec!["Mitral".into(), "Aortic".into()],
            0,
            "",
        )
        .unwrap();
        ExamEntry {
            exam,
            questions: vec![question],
        }
    }

    #[test]
    fn looks_up_exams_by_id() {
        let repo = InMemoryRepository::new(Catalog {
            exams: vec![exam("cardiology-mcq")],
            ..Catalog::default()
        });
        let id = ExamId::new("cardiology-mcq").unwrap();
        assert_eq!(repo.get_exam(&id).unwrap().name(), "Cardiology MCQ");
        assert_eq!(repo.questions(&id).unwrap().len(), 1);
    }

    #[test]
    fn unknown_ids_are_not_found() {
        let repo = InMemoryRepository::default();
        let err = repo.get_exam(&ExamId::new("missing").unwrap()).unwrap_err();
        assert!(matches!(err, ContentError::NotFound { kind: "exam", .. }));
        let err = repo.cards(&DeckId::new("missing").unwrap()).unwrap_err();
        assert!(matches!(err, ContentError::NotFound { kind: "deck", .. }));
    }

    #[test]
    fn content_bundle_shares_one_catalog() {
        let content = Content::from_repository(InMemoryRepository::new(Catalog {
            exams: vec![exam("cardiology-mcq")],
            ..Catalog::default()
        }));
        assert_eq!(content.exams.list_exams().len(), 1);
        assert!(content.flashcards.list_decks().is_empty());
    }
}
