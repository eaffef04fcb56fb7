use std::fs;

use content::fixtures::{self, Sources};
use content::{Content, ContentError, RecordError};
use study_core::model::{ExamId, LabStatus, SystemId};

#[test]
fn embedded_content_loads() {
    let content = Content::embedded().expect("bundled content is valid");

    let exams = content.exams.list_exams();
    assert_eq!(exams.len(), 4);
    for exam in &exams {
        let questions = content.exams.questions(exam.id()).unwrap();
        assert!(!questions.is_empty(), "{} has questions", exam.id());
    }
    assert_eq!(content.exams.score_history().len(), 4);
    assert_eq!(content.flashcards.list_decks().len(), 3);
    assert_eq!(content.anatomy.systems().len(), 4);
    assert_eq!(content.progress.daily_stats().streak_days, 12);
}

#[test]
fn embedded_lab_values_flag_low_hemoglobin() {
    let content = Content::embedded().unwrap();
    let cbc = content
        .hospital
        .lab_panels()
        .into_iter()
        .next()
        .expect("first panel");
    let hemoglobin = cbc
        .values()
        .iter()
        .find(|v| v.parameter() == "Hemoglobin")
        .expect("hemoglobin listed");
    assert_eq!(hemoglobin.status(), LabStatus::Low);
}

#[test]
fn embedded_hospital_references_load() {
    let content = Content::embedded().unwrap();
    let references = content.hospital.references();
    assert_eq!(references.vital_signs.len(), 5);
    assert_eq!(references.vital_signs[0].term(), "Heart Rate");
    assert_eq!(references.vital_signs[0].detail(), "60-100 bpm");
    assert_eq!(references.note_template.len(), 4);
    assert!(references.note_template[0].term().starts_with('S'));
    assert_eq!(references.expand("PRN"), Some("As needed"));
    assert_eq!(references.expand("HEENT"), Some("Head, Eyes, Ears, Nose, Throat"));
}

#[test]
fn blank_abbreviation_is_rejected() {
    let mut sources = Sources::embedded();
    sources.hospital = sources
        .hospital
        .replace("\"meaning\": \"As needed\"", "\"meaning\": \" \"");

    let err = fixtures::build_catalog(&sources).unwrap_err();
    assert!(matches!(
        err,
        ContentError::Invalid {
            file: "hospital.json",
            source: RecordError::Domain(_),
        }
    ));
}

#[test]
fn hospital_references_are_optional() {
    let mut sources = Sources::embedded();
    let start = sources.hospital.find(",\n  \"references\"").unwrap();
    sources.hospital.truncate(start);
    sources.hospital.push_str("\n}\n");

    let catalog = fixtures::build_catalog(&sources).unwrap();
    assert!(catalog.references.is_empty());
    assert_eq!(catalog.medications.len(), 3);
}

#[test]
fn anatomy_lookup_by_id() {
    let content = Content::embedded().unwrap();
    let id = SystemId::new("respiratory").unwrap();
    let system = content.anatomy.get_system(&id).unwrap();
    assert_eq!(system.id(), &id);
    assert!(content
        .anatomy
        .get_system(&SystemId::new("skeletal").unwrap())
        .is_err());
}

#[test]
fn score_for_unknown_exam_is_rejected() {
    let mut sources = Sources::embedded();
    sources.exams = sources
        .exams
        .replace("\"exam_id\": \"cardiology-mcq\"", "\"exam_id\": \"dermatology\"");

    let err = fixtures::build_catalog(&sources).unwrap_err();
    match err {
        ContentError::DanglingExam(id) => assert_eq!(id, ExamId::new("dermatology").unwrap()),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn question_with_bad_answer_index_is_rejected() {
    let mut sources = Sources::embedded();
    sources.exams = r#"{
        "exams": [{
            "id": "broken",
            "name": "Broken",
            "question_count": 5,
            "duration_minutes": 10,
            "difficulty": "easy",
            "questions": [{
                "prompt": "Pick one",
                "options": ["a", "b"],
                "correct_option": 7
            }]
        }]
    }"#
    .to_owned();

    let err = fixtures::build_catalog(&sources).unwrap_err();
    assert!(matches!(
        err,
        ContentError::Invalid {
            file: "exams.json",
            source: RecordError::Domain(_),
        }
    ));
}

#[test]
fn exam_without_questions_is_rejected() {
    let mut sources = Sources::embedded();
    sources.exams = r#"{
        "exams": [{
            "id": "empty",
            "name": "Empty",
            "question_count": 5,
            "duration_minutes": 10,
            "difficulty": "easy",
            "questions": []
        }]
    }"#
    .to_owned();

    let err = fixtures::build_catalog(&sources).unwrap_err();
    assert!(matches!(err, ContentError::NoQuestions(_)));
}

#[test]
fn duplicate_deck_ids_are_rejected() {
    let mut sources = Sources::embedded();
    sources.flashcards = sources
        .flashcards
        .replace("\"id\": \"anatomy\"", "\"id\": \"cardiology\"");

    let err = fixtures::build_catalog(&sources).unwrap_err();
    assert!(matches!(err, ContentError::DuplicateId { kind: "deck", .. }));
}

#[test]
fn malformed_json_names_the_file() {
    let mut sources = Sources::embedded();
    sources.schedule = "{ not json".to_owned();

    let err = fixtures::build_catalog(&sources).unwrap_err();
    assert!(matches!(err, ContentError::Parse { file: "schedule.json", .. }));
    assert!(err.to_string().starts_with("malformed schedule.json"));
}

#[test]
fn loads_from_directory() {
    let dir = tempfile::tempdir().unwrap();
    let sources = Sources::embedded();
    fs::write(dir.path().join(fixtures::EXAMS_FILE), &sources.exams).unwrap();
    fs::write(dir.path().join(fixtures::FLASHCARDS_FILE), &sources.flashcards).unwrap();
    fs::write(dir.path().join(fixtures::ANATOMY_FILE), &sources.anatomy).unwrap();
    fs::write(dir.path().join(fixtures::HOSPITAL_FILE), &sources.hospital).unwrap();
    fs::write(dir.path().join(fixtures::SCHEDULE_FILE), &sources.schedule).unwrap();
    fs::write(dir.path().join(fixtures::PROGRESS_FILE), &sources.progress).unwrap();

    let content = Content::from_dir(dir.path()).unwrap();
    assert_eq!(content.exams.list_exams().len(), 4);
    assert_eq!(content.schedule.deadlines().len(), 4);
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let err = Content::from_dir(dir.path()).unwrap_err();
    match err {
        ContentError::Io { path, .. } => assert!(path.ends_with("exams.json")),
        other => panic!("unexpected error: {other}"),
    }
}
