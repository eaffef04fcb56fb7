use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use comfy_table::{Cell, CellAlignment};

use services::Dashboard;

use crate::views::table::{align_column, new_table, progress_bar, urgency_cell};
use crate::vm::{format_ago, format_days_left, format_minutes, format_short_date};

#[must_use]
pub fn render_dashboard(dashboard: &Dashboard, now: DateTime<Utc>) -> String {
    let stats = dashboard.today;
    let mut out = String::from("Welcome back! Ready to continue your medical studies?\n\n");
    let _ = writeln!(out, "Study streak:        {} days", stats.streak_days);
    let _ = writeln!(out, "Cards reviewed:      {}", stats.cards_reviewed);
    let _ = writeln!(out, "Practice questions:  {}", stats.practice_questions);
    let _ = writeln!(
        out,
        "Study time:          {}",
        format_minutes(stats.study_minutes)
    );

    out.push_str("\nRecent subjects\n");
    let mut subjects = new_table(&["Subject", "Progress", "Last studied"]);
    for subject in &dashboard.recent_subjects {
        subjects.add_row(vec![
            Cell::new(subject.subject()),
            Cell::new(progress_bar(subject.percent(), 20)),
            Cell::new(format_ago(subject.last_studied(), now)),
        ]);
    }
    let _ = writeln!(out, "{subjects}");

    out.push_str("\nUpcoming exams\n");
    if dashboard.upcoming_exams.is_empty() {
        out.push_str("Nothing scheduled.\n");
        return out;
    }
    let mut exams = new_table(&["Exam", "Type", "Date", "Due"]);
    align_column(&mut exams, 3, CellAlignment::Right);
    for upcoming in &dashboard.upcoming_exams {
        exams.add_row(vec![
            Cell::new(&upcoming.deadline.title),
            Cell::new(upcoming.deadline.kind),
            Cell::new(format_short_date(upcoming.deadline.date)),
            urgency_cell(format_days_left(upcoming.days_left), upcoming.urgency),
        ]);
    }
    let _ = writeln!(out, "{exams}");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use services::AppServices;
    use study_core::time::{fixed_clock, fixed_now};

    #[test]
    fn renders_stats_and_upcoming_exams() {
        let services = AppServices::embedded(fixed_clock()).unwrap();
        let text = render_dashboard(&services.dashboard().dashboard(), fixed_now());
        assert!(text.contains("Study streak:        12 days"));
        assert!(text.contains("2h 15m"));
        assert!(text.contains("Cardiology"));
        assert!(text.contains("2 hours ago"));
        assert!(text.contains("OSCE Practice Session"));
        assert!(text.contains("4 days left"));
        assert!(!text.contains("Pharmacology Assignment"));
    }
}
