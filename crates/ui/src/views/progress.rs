use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use comfy_table::{Cell, CellAlignment};

use services::WeeklyTotals;
use study_core::model::{Achievement, DailyActivity, SubjectProgress};

use crate::views::table::{align_column, dim_cell, new_table, progress_bar};
use crate::vm::format_ago;

#[derive(Debug, Clone, Copy)]
pub struct ProgressData<'a> {
    pub overall_percent: u8,
    pub total_hours: u32,
    pub subjects: &'a [SubjectProgress],
    pub weekly: &'a [DailyActivity],
    pub weekly_totals: WeeklyTotals,
    pub achievements: &'a [Achievement],
    /// `(earned, total)`
    pub achievement_counts: (usize, usize),
}

#[must_use]
pub fn render_progress(data: ProgressData<'_>, now: DateTime<Utc>) -> String {
    let mut out = String::from("Learning Progress\n");
    let _ = writeln!(
        out,
        "Overall mastery {}   Total study time {}h",
        progress_bar(data.overall_percent, 20),
        data.total_hours
    );

    let mut subjects = new_table(&["Subject", "Topics", "Progress", "Hours", "Last studied", "Next"]);
    align_column(&mut subjects, 1, CellAlignment::Right);
    align_column(&mut subjects, 3, CellAlignment::Right);
    for subject in data.subjects {
        subjects.add_row(vec![
            Cell::new(subject.subject()),
            Cell::new(format!("{}/{}", subject.completed(), subject.total())),
            Cell::new(progress_bar(subject.percent(), 20)),
            Cell::new(subject.hours()),
            Cell::new(format_ago(subject.last_studied(), now)),
            Cell::new(subject.next_milestone()),
        ]);
    }
    let _ = write!(out, "\n{subjects}\n");

    let mut weekly = new_table(&["Day", "Hours", "Cards", "Exams"]);
    for day in data.weekly {
        weekly.add_row(vec![
            Cell::new(day.day),
            Cell::new(format!("{:.1}", day.hours)),
            Cell::new(day.cards),
            Cell::new(day.exams),
        ]);
    }
    let totals = data.weekly_totals;
    weekly.add_row(vec![
        Cell::new("Total"),
        Cell::new(format!("{:.1}", totals.hours)),
        Cell::new(totals.cards),
        Cell::new(totals.exams),
    ]);
    let _ = write!(out, "\nThis week\n{weekly}\n");

    let (earned, total) = data.achievement_counts;
    let _ = writeln!(out, "\nAchievements ({earned}/{total})");
    let mut achievements = new_table(&["", "Achievement", "Description"]);
    for achievement in data.achievements {
        let mark = if achievement.earned {
            Cell::new("*")
        } else {
            dim_cell(" ")
        };
        achievements.add_row(vec![
            mark,
            Cell::new(&achievement.name),
            Cell::new(&achievement.description),
        ]);
    }
    let _ = writeln!(out, "{achievements}");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use services::AppServices;
    use study_core::time::{fixed_clock, fixed_now};

    #[test]
    fn renders_subjects_week_and_achievements() {
        let services = AppServices::embedded(fixed_clock()).unwrap();
        let progress = services.progress();
        let subjects = progress.subjects();
        let weekly = progress.weekly_activity();
        let achievements = progress.achievements();
        let data = ProgressData {
            overall_percent: progress.overall_percent(),
            total_hours: progress.total_hours(),
            subjects: &subjects,
            weekly: &weekly,
            weekly_totals: progress.weekly_totals(),
            achievements: &achievements,
            achievement_counts: progress.achievement_counts(),
        };
        let text = render_progress(data, fixed_now());
        assert!(text.contains("85/120"));
        assert!(text.contains("Mon"));
        assert!(text.contains("Achievements (2/4)"));
        assert!(text.contains("Study Streak Master"));
    }
}
