use services::{AppServices, ExamServiceError};
use study_core::model::{Advance, ExamId, ExamState, ScoreBand};
use study_core::time::{fixed_clock, fixed_now};

fn services() -> AppServices {
    AppServices::embedded(fixed_clock()).expect("bundled content loads")
}

#[test]
fn catalogue_carries_best_scores() {
    let items = services().exams().list_exams().unwrap();
    assert_eq!(items.len(), 4);

    let cardiology = items
        .iter()
        .find(|i| i.exam.id().as_str() == "cardiology-mcq")
        .unwrap();
    assert_eq!(cardiology.exam.question_count(), 25);
    assert_eq!(cardiology.exam.duration_minutes(), 45);
    assert_eq!(cardiology.sample_questions, 3);
    assert_eq!(cardiology.best_score.as_ref().map(|s| s.score()), Some(85));
}

#[test]
fn recent_scores_are_newest_first() {
    let scores = services().exams().recent_scores();
    let ids: Vec<_> = scores.iter().map(|s| s.exam_id().as_str().to_owned()).collect();
    assert_eq!(
        ids,
        vec![
            "cardiology-mcq",
            "anatomy-osce",
            "pharmacology-quiz",
            "clinical-skills"
        ]
    );
}

#[test]
fn cardiology_run_scores_two_of_three() {
    let exams = services().exams();
    let mut run = exams
        .start_exam(&ExamId::new("cardiology-mcq").unwrap())
        .unwrap();
    assert_eq!(run.started_at(), fixed_now());

    for (i, answer) in [0, 1, 0].into_iter().enumerate() {
        assert!(matches!(run.submit(), Err(ExamServiceError::NoAnswer)));
        run.select(answer).unwrap();
        let step = run.submit().unwrap();
        if i < 2 {
            assert_eq!(step, Advance::InProgress);
        } else {
            assert_eq!(step, Advance::Complete);
        }
    }

    assert_eq!(run.state(), ExamState::Complete);
    let result = run.result().unwrap();
    assert_eq!((result.score.correct(), result.score.total()), (2, 3));
    assert_eq!(result.percentage, 67);
    assert_eq!(result.band, ScoreBand::Failing);
    assert!(!result.reviews[2].is_correct);
    assert!(!result.reviews[2].explanation.is_empty());

    let retake = run.restart();
    assert_eq!(retake.state(), ExamState::InProgress);
    assert_eq!(retake.session().answered_count(), 0);
}

#[test]
fn out_of_range_selection_is_rejected() {
    let mut run = services()
        .exams()
        .start_exam(&ExamId::new("anatomy-osce").unwrap())
        .unwrap();
    assert!(matches!(run.select(5), Err(ExamServiceError::Session(_))));
    assert_eq!(run.selected(), None);
}

#[test]
fn unknown_exam_is_not_found() {
    let err = services()
        .exams()
        .start_exam(&ExamId::new("dermatology").unwrap())
        .unwrap_err();
    assert!(matches!(err, ExamServiceError::Content(_)));
}
