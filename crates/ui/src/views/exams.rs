use std::fmt::Write as _;

use comfy_table::{Cell, CellAlignment};

use services::{ExamListItem, ExamResult};
use study_core::model::{ExamCategory, ScoreRecord, option_label};

use crate::views::table::{align_column, band_cell, dim_cell, new_table, progress_bar};
use crate::vm::{ExamVm, format_short_date};

/// Exam catalogue plus recent results.
#[must_use]
pub fn render_catalogue(items: &[ExamListItem], recent: &[ScoreRecord]) -> String {
    let mut table = new_table(&["Id", "Exam", "Length", "Sample", "Difficulty", "Best"]);
    align_column(&mut table, 3, CellAlignment::Right);
    for item in items {
        let best = match &item.best_score {
            Some(score) => band_cell(score.percentage()),
            None => dim_cell("-"),
        };
        table.add_row(vec![
            Cell::new(item.exam.id()),
            Cell::new(item.exam.name()),
            Cell::new(exam_length(&item.exam)),
            Cell::new(item.sample_questions),
            Cell::new(item.exam.difficulty()),
            best,
        ]);
    }

    let mut out = format!("Practice Exams\n{table}\n");
    if !recent.is_empty() {
        let mut scores = new_table(&["Exam", "Score", "Date"]);
        for record in recent {
            let name = items
                .iter()
                .find(|i| i.exam.id() == record.exam_id())
                .map_or_else(|| record.exam_id().to_string(), |i| i.exam.name().to_owned());
            scores.add_row(vec![
                Cell::new(name),
                band_cell(record.percentage()),
                Cell::new(format_short_date(record.taken_on())),
            ]);
        }
        let _ = write!(out, "\nRecent scores\n{scores}\n");
    }
    out
}

/// "25 questions • 45 min"
fn exam_length(exam: &ExamCategory) -> String {
    format!(
        "{} questions \u{2022} {} min",
        exam.question_count(),
        exam.duration_minutes()
    )
}

/// The current question with lettered options; `>` marks the selection.
#[must_use]
pub fn render_question(vm: &ExamVm) -> String {
    let (Some(run), Some(question)) = (vm.run(), vm.current_question()) else {
        return "No exam in progress.\n".to_owned();
    };
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} | {}",
        run.exam().name(),
        vm.position_label().unwrap_or_default()
    );
    let _ = writeln!(out, "{}\n", progress_bar(run.session().progress_percent(), 30));
    let _ = writeln!(out, "{}\n", question.prompt());
    for (index, option) in question.options().iter().enumerate() {
        let marker = if vm.selected() == Some(index) { '>' } else { ' ' };
        let label = option_label(index).unwrap_or('?');
        let _ = writeln!(out, "{marker} {label}. {option}");
    }
    let action = if vm.can_submit() {
        format!("[Enter] {}", vm.submit_label())
    } else {
        "Select an answer to continue.".to_owned()
    };
    let _ = writeln!(out, "\n{action}");
    out
}

#[must_use]
pub fn render_result(exam_name: &str, result: &ExamResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{exam_name} complete");
    let _ = writeln!(
        out,
        "Score: {}/{} ({}%) {}\n",
        result.score.correct(),
        result.score.total(),
        result.percentage,
        result.band
    );
    let mut table = new_table(&["#", "Question", "Your answer", "Correct answer", ""]);
    for review in &result.reviews {
        let mark = if review.is_correct { "ok" } else { "x" };
        table.add_row(vec![
            Cell::new(review.number),
            Cell::new(&review.prompt),
            match &review.selected {
                Some(answer) => Cell::new(answer),
                None => dim_cell("(none)"),
            },
            Cell::new(&review.correct),
            Cell::new(mark),
        ]);
    }
    let _ = writeln!(out, "{table}");
    for review in result.reviews.iter().filter(|r| !r.is_correct) {
        if !review.explanation.is_empty() {
            let _ = writeln!(out, "{}. {}", review.number, review.explanation);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use services::AppServices;
    use study_core::model::ExamId;
    use study_core::time::fixed_clock;

    fn services() -> AppServices {
        AppServices::embedded(fixed_clock()).unwrap()
    }

    #[test]
    fn catalogue_shows_best_scores() {
        let exams = services().exams();
        let text = render_catalogue(&exams.list_exams().unwrap(), &exams.recent_scores());
        assert!(text.contains("cardiology-mcq"));
        assert!(text.contains("Cardiology MCQ"));
        assert!(text.contains("85%"));
        assert!(text.contains("Recent scores"));
    }

    #[test]
    fn catalogue_shows_full_exam_length() {
        let exams = services().exams();
        let text = render_catalogue(&exams.list_exams().unwrap(), &[]);
        assert!(text.contains("25 questions \u{2022} 45 min"));
        assert!(text.contains("15 questions \u{2022} 30 min"));
        assert!(text.contains("12 questions \u{2022} 40 min"));
        assert!(!text.contains("Recent scores"));
    }

    #[test]
    fn question_marks_selection_and_action() {
        let services = services();
        let mut vm = ExamVm::new();
        vm.start(&services.exams(), &ExamId::new("cardiology-mcq").unwrap())
            .unwrap();
        let text = render_question(&vm);
        assert!(text.contains("Question 1 of 3"));
        assert!(text.contains("  A. "));
        assert!(text.contains("Select an answer to continue."));

        vm.select(1).unwrap();
        let text = render_question(&vm);
        assert!(text.contains("> B. "));
        assert!(text.contains("[Enter] Next Question"));
    }

    #[test]
    fn result_lists_missed_explanations() {
        let services = services();
        let mut vm = ExamVm::new();
        vm.start(&services.exams(), &ExamId::new("cardiology-mcq").unwrap())
            .unwrap();
        for option in [0, 1, 0] {
            vm.select(option).unwrap();
            vm.submit().unwrap();
        }
        let result = vm.result().unwrap();
        let text = render_result("Cardiology MCQ", &result);
        assert!(text.contains("Score: 2/3 (67%) Needs work"));
        assert!(text.contains("3. "));
    }
}
