//! Serialized shapes of the fixture documents.
//!
//! Records mirror the JSON layout and convert into validated domain values via
//! `into_domain`, so fixture syntax never leaks into `study-core`.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc, Weekday};
use serde::Deserialize;
use thiserror::Error;

use study_core::model::{
    Achievement, AnatomySystem, BlockStatus, ClinicalReferences, DailyActivity, DailyStats,
    DayPlan, Deadline, DeadlineKind, DeckId, Difficulty, ExamCategory, ExamId, Flashcard,
    FlashcardDeck, LabPanel, LabValue, Medication, Priority, ProcedureLog, ProcedureRole,
    Question, ReferenceEntry, ReferenceRange, ScoreRecord, Structure, StudyBlock,
    SubjectProgress, SystemId,
};

/// Why a single record could not become a domain value.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RecordError {
    #[error(transparent)]
    Domain(#[from] study_core::Error),

    #[error("invalid {field}: {value:?}")]
    Format { field: &'static str, value: String },
}

trait IntoRecordResult<T> {
    fn domain(self) -> Result<T, RecordError>;
}

impl<T, E: Into<study_core::Error>> IntoRecordResult<T> for Result<T, E> {
    fn domain(self) -> Result<T, RecordError> {
        self.map_err(|e| RecordError::Domain(e.into()))
    }
}

//
// ─── EXAMS ─────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub struct ExamsDocument {
    pub exams: Vec<ExamRecord>,
    #[serde(default)]
    pub scores: Vec<ScoreRecordRow>,
}

#[derive(Debug, Deserialize)]
pub struct ExamRecord {
    pub id: String,
    pub name: String,
    pub question_count: u32,
    pub duration_minutes: u32,
    pub difficulty: Difficulty,
    pub questions: Vec<QuestionRecord>,
}

impl ExamRecord {
    /// # Errors
    ///
    /// Returns `RecordError` if the exam or any of its questions is invalid.
    pub fn into_domain(self) -> Result<(ExamCategory, Vec<Question>), RecordError> {
        let id = ExamId::new(self.id).domain()?;
        let exam = ExamCategory::new(
            id,
            self.name,
            self.question_count,
            self.duration_minutes,
            self.difficulty,
        )
        .domain()?;
        let questions = self
            .questions
            .into_iter()
            .map(QuestionRecord::into_domain)
            .collect::<Result<Vec<_>, _>>()?;
        Ok((exam, questions))
    }
}

#[derive(Debug, Deserialize)]
pub struct QuestionRecord {
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_option: usize,
    #[serde(default)]
    pub explanation: String,
}

impl QuestionRecord {
    /// # Errors
    ///
    /// Returns `RecordError` if the question violates its invariants.
    pub fn into_domain(self) -> Result<Question, RecordError> {
        Question::new(
            self.prompt,
            self.options,
            self.correct_option,
            self.explanation,
        )
        .domain()
    }
}

#[derive(Debug, Deserialize)]
pub struct ScoreRecordRow {
    pub exam_id: String,
    pub score: u32,
    pub total: u32,
    pub taken_on: NaiveDate,
}

impl ScoreRecordRow {
    /// # Errors
    ///
    /// Returns `RecordError` for a malformed exam id or impossible score.
    pub fn into_domain(self) -> Result<ScoreRecord, RecordError> {
        let exam_id = ExamId::new(self.exam_id).domain()?;
        ScoreRecord::new(exam_id, self.score, self.total, self.taken_on).domain()
    }
}

//
// ─── FLASHCARDS ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub struct FlashcardsDocument {
    pub decks: Vec<DeckRecord>,
}

#[derive(Debug, Deserialize)]
pub struct DeckRecord {
    pub id: String,
    pub name: String,
    pub card_count: u32,
    pub mastered: u32,
    #[serde(default)]
    pub cards: Vec<FlashcardRecord>,
}

#[derive(Debug, Deserialize)]
pub struct FlashcardRecord {
    pub question: String,
    pub answer: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub category: String,
}

impl DeckRecord {
    /// # Errors
    ///
    /// Returns `RecordError` if the deck or any card is invalid.
    pub fn into_domain(self) -> Result<(FlashcardDeck, Vec<Flashcard>), RecordError> {
        let id = DeckId::new(self.id).domain()?;
        let deck = FlashcardDeck::new(id, self.name, self.card_count, self.mastered).domain()?;
        let cards = self
            .cards
            .into_iter()
            .map(|card| {
                Flashcard::new(card.question, card.answer, card.difficulty, card.category).domain()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok((deck, cards))
    }
}

//
// ─── ANATOMY ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub struct AnatomyDocument {
    pub systems: Vec<SystemRecord>,
}

#[derive(Debug, Deserialize)]
pub struct SystemRecord {
    pub id: String,
    pub name: String,
    pub structures: Vec<StructureRecord>,
}

#[derive(Debug, Deserialize)]
pub struct StructureRecord {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl SystemRecord {
    /// # Errors
    ///
    /// Returns `RecordError` if the system is invalid.
    pub fn into_domain(self) -> Result<AnatomySystem, RecordError> {
        let id = SystemId::new(self.id).domain()?;
        let structures = self
            .structures
            .into_iter()
            .map(|s| Structure {
                name: s.name,
                description: s.description,
            })
            .collect();
        AnatomySystem::new(id, self.name, structures).domain()
    }
}

//
// ─── HOSPITAL ──────────────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub struct HospitalDocument {
    pub lab_panels: Vec<LabPanelRecord>,
    pub medications: Vec<MedicationRecord>,
    #[serde(default)]
    pub procedures: Vec<ProcedureRecord>,
    #[serde(default)]
    pub references: ReferencesRecord,
}

#[derive(Debug, Deserialize)]
pub struct LabPanelRecord {
    pub test: String,
    pub values: Vec<LabValueRecord>,
}

#[derive(Debug, Deserialize)]
pub struct LabValueRecord {
    pub parameter: String,
    pub value: f64,
    pub low: f64,
    pub high: f64,
    #[serde(default)]
    pub unit: String,
}

impl LabPanelRecord {
    /// # Errors
    ///
    /// Returns `RecordError` if the panel or one of its values is invalid.
    pub fn into_domain(self) -> Result<LabPanel, RecordError> {
        let values = self
            .values
            .into_iter()
            .map(|v| {
                let range = ReferenceRange::new(v.low, v.high).domain()?;
                LabValue::new(v.parameter, v.value, range, v.unit).domain()
            })
            .collect::<Result<Vec<_>, _>>()?;
        LabPanel::new(self.test, values).domain()
    }
}

#[derive(Debug, Deserialize)]
pub struct MedicationRecord {
    pub name: String,
    pub dosage: String,
    #[serde(default)]
    pub indication: String,
    #[serde(default)]
    pub interactions: Vec<String>,
    #[serde(default)]
    pub contraindications: Vec<String>,
}

impl MedicationRecord {
    /// # Errors
    ///
    /// Returns `RecordError` if the medication is invalid.
    pub fn into_domain(self) -> Result<Medication, RecordError> {
        Medication::new(
            self.name,
            self.dosage,
            self.indication,
            self.interactions,
            self.contraindications,
        )
        .domain()
    }
}

#[derive(Debug, Deserialize)]
pub struct ProcedureRecord {
    pub date: NaiveDate,
    pub procedure: String,
    pub role: ProcedureRole,
    #[serde(default)]
    pub supervisor: String,
}

impl ProcedureRecord {
    #[must_use]
    pub fn into_domain(self) -> ProcedureLog {
        ProcedureLog {
            date: self.date,
            procedure: self.procedure,
            role: self.role,
            supervisor: self.supervisor,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ReferencesRecord {
    #[serde(default)]
    pub vital_signs: Vec<VitalSignRecord>,
    #[serde(default)]
    pub note_template: Vec<NoteSectionRecord>,
    #[serde(default)]
    pub abbreviations: Vec<AbbreviationRecord>,
}

#[derive(Debug, Deserialize)]
pub struct VitalSignRecord {
    pub name: String,
    pub normal: String,
}

#[derive(Debug, Deserialize)]
pub struct NoteSectionRecord {
    pub heading: String,
    pub prompt: String,
}

#[derive(Debug, Deserialize)]
pub struct AbbreviationRecord {
    pub short: String,
    pub meaning: String,
}

impl ReferencesRecord {
    /// # Errors
    ///
    /// Returns `RecordError` if any entry has a blank side.
    pub fn into_domain(self) -> Result<ClinicalReferences, RecordError> {
        let entry = |term: String, detail: String| ReferenceEntry::new(term, detail).domain();
        Ok(ClinicalReferences {
            vital_signs: self
                .vital_signs
                .into_iter()
                .map(|v| entry(v.name, v.normal))
                .collect::<Result<_, _>>()?,
            note_template: self
                .note_template
                .into_iter()
                .map(|n| entry(n.heading, n.prompt))
                .collect::<Result<_, _>>()?,
            abbreviations: self
                .abbreviations
                .into_iter()
                .map(|a| entry(a.short, a.meaning))
                .collect::<Result<_, _>>()?,
        })
    }
}

//
// ─── SCHEDULE ──────────────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub struct ScheduleDocument {
    pub daily_plan: Vec<StudyBlockRecord>,
    pub week: Vec<DayPlanRecord>,
    #[serde(default)]
    pub deadlines: Vec<DeadlineRecord>,
}

#[derive(Debug, Deserialize)]
pub struct StudyBlockRecord {
    pub start: String,
    pub end: String,
    pub subject: String,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub activity: String,
    pub status: BlockStatus,
    pub priority: Priority,
}

impl StudyBlockRecord {
    /// # Errors
    ///
    /// Returns `RecordError::Format` for times not written as `HH:MM`, or a
    /// domain error for an invalid block.
    pub fn into_domain(self) -> Result<StudyBlock, RecordError> {
        let start = parse_time(&self.start, "block start")?;
        let end = parse_time(&self.end, "block end")?;
        StudyBlock::new(
            start,
            end,
            self.subject,
            self.topic,
            self.activity,
            self.status,
            self.priority,
        )
        .domain()
    }
}

fn parse_time(raw: &str, field: &'static str) -> Result<NaiveTime, RecordError> {
    NaiveTime::parse_from_str(raw.trim(), "%H:%M").map_err(|_| RecordError::Format {
        field,
        value: raw.to_owned(),
    })
}

#[derive(Debug, Deserialize)]
pub struct DayPlanRecord {
    pub date: NaiveDate,
    pub sessions: u32,
    pub hours: f32,
    pub completed: u32,
}

impl DayPlanRecord {
    /// # Errors
    ///
    /// Returns `RecordError` if more sessions are completed than planned.
    pub fn into_domain(self) -> Result<DayPlan, RecordError> {
        DayPlan::new(self.date, self.sessions, self.hours, self.completed).domain()
    }
}

#[derive(Debug, Deserialize)]
pub struct DeadlineRecord {
    pub title: String,
    pub date: NaiveDate,
    pub priority: Priority,
    pub kind: DeadlineKind,
}

impl DeadlineRecord {
    #[must_use]
    pub fn into_domain(self) -> Deadline {
        Deadline {
            title: self.title,
            date: self.date,
            priority: self.priority,
            kind: self.kind,
        }
    }
}

//
// ─── PROGRESS ──────────────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub struct ProgressDocument {
    #[serde(default)]
    pub today: DailyStatsRecord,
    pub subjects: Vec<SubjectRecord>,
    #[serde(default)]
    pub weekly_activity: Vec<ActivityRecord>,
    #[serde(default)]
    pub achievements: Vec<AchievementRecord>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DailyStatsRecord {
    pub streak_days: u32,
    pub cards_reviewed: u32,
    pub practice_questions: u32,
    pub study_minutes: u32,
}

impl DailyStatsRecord {
    #[must_use]
    pub fn into_domain(self) -> DailyStats {
        DailyStats {
            streak_days: self.streak_days,
            cards_reviewed: self.cards_reviewed,
            practice_questions: self.practice_questions,
            study_minutes: self.study_minutes,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SubjectRecord {
    pub subject: String,
    pub completed: u32,
    pub total: u32,
    pub hours: u32,
    pub last_studied: DateTime<Utc>,
    #[serde(default)]
    pub next_milestone: String,
    pub difficulty: Difficulty,
}

impl SubjectRecord {
    /// # Errors
    ///
    /// Returns `RecordError` if the subject progress is inconsistent.
    pub fn into_domain(self) -> Result<SubjectProgress, RecordError> {
        SubjectProgress::new(
            self.subject,
            self.completed,
            self.total,
            self.hours,
            self.last_studied,
            self.next_milestone,
            self.difficulty,
        )
        .domain()
    }
}

#[derive(Debug, Deserialize)]
pub struct ActivityRecord {
    pub day: String,
    pub hours: f32,
    pub cards: u32,
    pub exams: u32,
}

impl ActivityRecord {
    /// # Errors
    ///
    /// Returns `RecordError::Format` if `day` is not a weekday name.
    pub fn into_domain(self) -> Result<DailyActivity, RecordError> {
        let day = self
            .day
            .trim()
            .parse::<Weekday>()
            .map_err(|_| RecordError::Format {
                field: "activity day",
                value: self.day.clone(),
            })?;
        Ok(DailyActivity {
            day,
            hours: self.hours,
            cards: self.cards,
            exams: self.exams,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct AchievementRecord {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub earned: bool,
}

impl AchievementRecord {
    #[must_use]
    pub fn into_domain(self) -> Achievement {
        Achievement {
            name: self.name,
            description: self.description,
            earned: self.earned,
        }
    }
}
