use std::collections::HashSet;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::records::{
    AnatomyDocument, ExamsDocument, FlashcardsDocument, HospitalDocument, ProgressDocument,
    RecordError, ScheduleDocument,
};
use crate::repository::{Catalog, ContentError, DeckEntry, ExamEntry};

pub const EXAMS_FILE: &str = "exams.json";
pub const FLASHCARDS_FILE: &str = "flashcards.json";
pub const ANATOMY_FILE: &str = "anatomy.json";
pub const HOSPITAL_FILE: &str = "hospital.json";
pub const SCHEDULE_FILE: &str = "schedule.json";
pub const PROGRESS_FILE: &str = "progress.json";

/// Raw text of the six content documents.
#[derive(Debug, Clone)]
pub struct Sources {
    pub exams: String,
    pub flashcards: String,
    pub anatomy: String,
    pub hospital: String,
    pub schedule: String,
    pub progress: String,
}

impl Sources {
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            exams: include_str!("../fixtures/exams.json").to_owned(),
            flashcards: include_str!("../fixtures/flashcards.json").to_owned(),
            anatomy: include_str!("../fixtures/anatomy.json").to_owned(),
            hospital: include_str!("../fixtures/hospital.json").to_owned(),
            schedule: include_str!("../fixtures/schedule.json").to_owned(),
            progress: include_str!("../fixtures/progress.json").to_owned(),
        }
    }

    /// # Errors
    ///
    /// Returns `ContentError::Io` naming the first file that cannot be read.
    pub fn read_dir(dir: &Path) -> Result<Self, ContentError> {
        let read = |name: &str| {
            let path = dir.join(name);
            std::fs::read_to_string(&path).map_err(|source| ContentError::Io { path, source })
        };
        Ok(Self {
            exams: read(EXAMS_FILE)?,
            flashcards: read(FLASHCARDS_FILE)?,
            anatomy: read(ANATOMY_FILE)?,
            hospital: read(HOSPITAL_FILE)?,
            schedule: read(SCHEDULE_FILE)?,
            progress: read(PROGRESS_FILE)?,
        })
    }
}

/// # Errors
///
/// Returns `ContentError` if the bundled documents fail validation.
pub fn load_embedded() -> Result<Catalog, ContentError> {
    debug!("loading embedded study content");
    build_catalog(&Sources::embedded())
}

/// # Errors
///
/// Returns `ContentError` if a document is missing, malformed, or invalid.
pub fn load_dir(dir: &Path) -> Result<Catalog, ContentError> {
    debug!(dir = %dir.display(), "loading study content from directory");
    build_catalog(&Sources::read_dir(dir)?)
}

/// Parse and validate every document into one catalog.
///
/// # Errors
///
/// Returns the first parse, record, or cross-reference failure.
pub fn build_catalog(sources: &Sources) -> Result<Catalog, ContentError> {
    let mut catalog = Catalog::default();

    load_exams(&mut catalog, &sources.exams)?;
    load_flashcards(&mut catalog, &sources.flashcards)?;
    load_anatomy(&mut catalog, &sources.anatomy)?;
    load_hospital(&mut catalog, &sources.hospital)?;
    load_schedule(&mut catalog, &sources.schedule)?;
    load_progress(&mut catalog, &sources.progress)?;

    info!(
        exams = catalog.exams.len(),
        decks = catalog.decks.len(),
        systems = catalog.systems.len(),
        lab_panels = catalog.lab_panels.len(),
        deadlines = catalog.deadlines.len(),
        "study content loaded"
    );
    Ok(catalog)
}

fn parse<T: DeserializeOwned>(file: &'static str, raw: &str) -> Result<T, ContentError> {
    serde_json::from_str(raw).map_err(|source| ContentError::Parse { file, source })
}

fn invalid(file: &'static str) -> impl Fn(RecordError) -> ContentError {
    move |source| ContentError::Invalid { file, source }
}

fn ensure_unique<'a>(
    seen: &mut HashSet<&'a str>,
    kind: &'static str,
    id: &'a str,
    file: &'static str,
) -> Result<(), ContentError> {
    if seen.insert(id) {
        Ok(())
    } else {
        Err(ContentError::DuplicateId {
            kind,
            id: id.to_owned(),
            file,
        })
    }
}

fn load_exams(catalog: &mut Catalog, raw: &str) -> Result<(), ContentError> {
    let doc: ExamsDocument = parse(EXAMS_FILE, raw)?;
    for record in doc.exams {
        let (exam, questions) = record.into_domain().map_err(invalid(EXAMS_FILE))?;
        if questions.is_empty() {
            return Err(ContentError::NoQuestions(exam.id().clone()));
        }
        catalog.exams.push(ExamEntry { exam, questions });
    }
    let mut seen = HashSet::new();
    for entry in &catalog.exams {
        ensure_unique(&mut seen, "exam", entry.exam.id().as_str(), EXAMS_FILE)?;
    }

    for row in doc.scores {
        let score = row.into_domain().map_err(invalid(EXAMS_FILE))?;
        if !seen.contains(score.exam_id().as_str()) {
            return Err(ContentError::DanglingExam(score.exam_id().clone()));
        }
        catalog.scores.push(score);
    }
    debug!(
        exams = catalog.exams.len(),
        scores = catalog.scores.len(),
        "exams loaded"
    );
    Ok(())
}

fn load_flashcards(catalog: &mut Catalog, raw: &str) -> Result<(), ContentError> {
    let doc: FlashcardsDocument = parse(FLASHCARDS_FILE, raw)?;
    for record in doc.decks {
        let (deck, cards) = record.into_domain().map_err(invalid(FLASHCARDS_FILE))?;
        catalog.decks.push(DeckEntry { deck, cards });
    }
    let mut seen = HashSet::new();
    for entry in &catalog.decks {
        ensure_unique(&mut seen, "deck", entry.deck.id().as_str(), FLASHCARDS_FILE)?;
    }
    Ok(())
}

fn load_anatomy(catalog: &mut Catalog, raw: &str) -> Result<(), ContentError> {
    let doc: AnatomyDocument = parse(ANATOMY_FILE, raw)?;
    catalog.systems = doc
        .systems
        .into_iter()
        .map(|s| s.into_domain().map_err(invalid(ANATOMY_FILE)))
        .collect::<Result<_, _>>()?;
    let mut seen = HashSet::new();
    for system in &catalog.systems {
        ensure_unique(&mut seen, "anatomy system", system.id().as_str(), ANATOMY_FILE)?;
    }
    Ok(())
}

fn load_hospital(catalog: &mut Catalog, raw: &str) -> Result<(), ContentError> {
    let doc: HospitalDocument = parse(HOSPITAL_FILE, raw)?;
    catalog.lab_panels = doc
        .lab_panels
        .into_iter()
        .map(|p| p.into_domain().map_err(invalid(HOSPITAL_FILE)))
        .collect::<Result<_, _>>()?;
    catalog.medications = doc
        .medications
        .into_iter()
        .map(|m| m.into_domain().map_err(invalid(HOSPITAL_FILE)))
        .collect::<Result<_, _>>()?;
    catalog.procedures = doc.procedures.into_iter().map(|p| p.into_domain()).collect();
    catalog.references = doc
        .references
        .into_domain()
        .map_err(invalid(HOSPITAL_FILE))?;
    Ok(())
}

fn load_schedule(catalog: &mut Catalog, raw: &str) -> Result<(), ContentError> {
    let doc: ScheduleDocument = parse(SCHEDULE_FILE, raw)?;
    catalog.daily_plan = doc
        .daily_plan
        .into_iter()
        .map(|b| b.into_domain().map_err(invalid(SCHEDULE_FILE)))
        .collect::<Result<_, _>>()?;
    catalog.week = doc
        .week
        .into_iter()
        .map(|d| d.into_domain().map_err(invalid(SCHEDULE_FILE)))
        .collect::<Result<_, _>>()?;
    catalog.deadlines = doc.deadlines.into_iter().map(|d| d.into_domain()).collect();
    Ok(())
}

fn load_progress(catalog: &mut Catalog, raw: &str) -> Result<(), ContentError> {
    let doc: ProgressDocument = parse(PROGRESS_FILE, raw)?;
    catalog.daily_stats = doc.today.into_domain();
    catalog.subjects = doc
        .subjects
        .into_iter()
        .map(|s| s.into_domain().map_err(invalid(PROGRESS_FILE)))
        .collect::<Result<_, _>>()?;
    catalog.weekly_activity = doc
        .weekly_activity
        .into_iter()
        .map(|a| a.into_domain().map_err(invalid(PROGRESS_FILE)))
        .collect::<Result<_, _>>()?;
    catalog.achievements = doc
        .achievements
        .into_iter()
        .map(|a| a.into_domain())
        .collect();
    Ok(())
}
