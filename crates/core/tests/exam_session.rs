use proptest::prelude::*;
use study_core::model::{Advance, ExamSession, ExamSessionError, ExamState, Question};

fn question(correct: usize, options: usize) -> Question {
    let options = (0..options).map(|i| format!("choice {i}")).collect();
    Question::new("prompt", options, correct, "").unwrap()
}

/// Question sets of 1..8 questions, each with 2..6 options.
fn question_set() -> impl Strategy<Value = Vec<Question>> {
    prop::collection::vec(
        (2_usize..6).prop_flat_map(|len| (0..len, Just(len))),
        1..8,
    )
    .prop_map(|specs| {
        specs
            .into_iter()
            .map(|(correct, len)| question(correct, len))
            .collect()
    })
}

proptest! {
    #[test]
    fn start_is_fresh(questions in question_set()) {
        let session = ExamSession::start(questions).unwrap();
        prop_assert_eq!(session.current_index(), 0);
        prop_assert_eq!(session.answered_count(), 0);
        prop_assert_eq!(session.state(), ExamState::InProgress);
    }

    #[test]
    fn record_then_read_returns_answer(questions in question_set(), pick in any::<prop::sample::Index>()) {
        let mut session = ExamSession::start(questions).unwrap();
        let option = pick.index(session.current_question().option_count());
        session.record_answer(option).unwrap();
        prop_assert_eq!(session.current_answer(), Some(option));

        let other = (option + 1) % session.current_question().option_count();
        session.record_answer(other).unwrap();
        prop_assert_eq!(session.current_answer(), Some(other));
        prop_assert_eq!(session.answered_count(), 1);
    }

    #[test]
    fn advance_completes_exactly_once(questions in question_set()) {
        let len = questions.len();
        let mut session = ExamSession::start(questions).unwrap();
        let mut completions = 0;
        for _ in 0..len + 2 {
            let before = session.is_complete();
            if session.advance() == Advance::Complete && !before {
                completions += 1;
            }
            prop_assert!(session.current_index() < len);
        }
        prop_assert_eq!(completions, 1);
        prop_assert_eq!(session.current_index(), len - 1);
    }

    #[test]
    fn all_correct_scores_full_marks(questions in question_set()) {
        let mut session = ExamSession::start(questions).unwrap();
        loop {
            let correct = session.current_question().correct_option();
            session.record_answer(correct).unwrap();
            if session.advance() == Advance::Complete {
                break;
            }
        }
        let score = session.score();
        prop_assert_eq!(score.correct(), score.total());
        prop_assert_eq!(score.percentage(), 100);
    }

    #[test]
    fn no_answers_score_zero(questions in question_set()) {
        let mut session = ExamSession::start(questions).unwrap();
        while session.advance() == Advance::InProgress {}
        prop_assert_eq!(session.score().correct(), 0);
    }

    #[test]
    fn out_of_range_never_mutates(questions in question_set(), extra in 0_usize..10) {
        let mut session = ExamSession::start(questions).unwrap();
        let len = session.current_question().option_count();
        let before = session.clone();
        let err = session.record_answer(len + extra).unwrap_err();
        prop_assert_eq!(err, ExamSessionError::OutOfRange { index: len + extra, len });
        prop_assert_eq!(session, before);
    }
}

#[test]
fn three_question_scenario_scores_two_of_three() {
    let mut session =
        ExamSession::start(vec![question(0, 4), question(1, 4), question(1, 4)]).unwrap();
    for answer in [0, 1, 0] {
        session.record_answer(answer).unwrap();
        session.advance();
    }
    assert!(session.is_complete());
    let score = session.score();
    assert_eq!((score.correct(), score.total()), (2, 3));
    assert_eq!(score.percentage(), 67);
}

#[test]
fn answer_five_on_four_options_is_out_of_range() {
    let mut session = ExamSession::start(vec![question(0, 4)]).unwrap();
    assert_eq!(
        session.record_answer(5).unwrap_err(),
        ExamSessionError::OutOfRange { index: 5, len: 4 }
    );
    assert_eq!(session.answers().count(), 0);
}
