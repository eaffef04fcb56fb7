use std::fmt::Write as _;

use chrono::{Datelike, NaiveDate};
use comfy_table::Cell;

use services::{DayProgress, MonthDay, UpcomingDeadline, WeekOverview};
use study_core::model::StudyBlock;

use crate::views::table::{new_table, progress_bar, urgency_cell};
use crate::vm::{
    ScheduleView, ScheduleVm, format_day, format_days_left, format_short_date, format_time_range,
};

#[derive(Debug, Clone, Copy)]
pub struct ScheduleData<'a> {
    pub today: NaiveDate,
    pub blocks: &'a [StudyBlock],
    pub progress: DayProgress,
    pub week: &'a WeekOverview,
    pub month: &'a [MonthDay],
    pub deadlines: &'a [UpcomingDeadline],
}

#[must_use]
pub fn render_schedule(vm: &ScheduleVm, data: ScheduleData<'_>) -> String {
    let mut out = format!("Study Schedule  <{}>\n", vm.view());
    let _ = writeln!(out, "\nToday's Schedule  {}", format_day(data.today));

    let mut blocks = new_table(&["Time", "Subject", "Topic", "Activity", "Status", "Priority"]);
    for block in data.blocks {
        blocks.add_row(vec![
            Cell::new(format_time_range(block.start(), block.end())),
            Cell::new(block.subject()),
            Cell::new(block.topic()),
            Cell::new(block.activity()),
            Cell::new(block.status()),
            Cell::new(block.priority()),
        ]);
    }
    let _ = writeln!(out, "{blocks}");
    let _ = writeln!(
        out,
        "Sessions {}/{} {}",
        data.progress.completed,
        data.progress.total,
        progress_bar(data.progress.percent(), 20)
    );

    match vm.view() {
        ScheduleView::Week => render_week(&mut out, data.week),
        ScheduleView::Month => render_month(&mut out, data.month),
    }

    out.push_str("\nUpcoming Deadlines\n");
    let mut deadlines = new_table(&["Deadline", "Type", "Date", "Priority", "Due"]);
    for upcoming in data.deadlines {
        deadlines.add_row(vec![
            Cell::new(&upcoming.deadline.title),
            Cell::new(upcoming.deadline.kind),
            Cell::new(format_short_date(upcoming.deadline.date)),
            Cell::new(upcoming.deadline.priority),
            urgency_cell(format_days_left(upcoming.days_left), upcoming.urgency),
        ]);
    }
    let _ = writeln!(out, "{deadlines}");
    out
}

fn render_week(out: &mut String, week: &WeekOverview) {
    let mut table = new_table(&["", "Day", "Sessions", "Hours", "Completed"]);
    for day in &week.days {
        let marker = if day.date() == week.today { ">" } else { "" };
        table.add_row(vec![
            Cell::new(marker),
            Cell::new(day.date().format("%a %-d")),
            Cell::new(day.sessions()),
            Cell::new(format!("{:.1}h", day.hours())),
            Cell::new(day.completed()),
        ]);
    }
    let _ = write!(
        out,
        "\nThis Week Overview\n{table}\n{}/{} sessions completed, {:.1}h planned\n",
        week.completed_sessions, week.total_sessions, week.planned_hours
    );
}

/// Monday-first calendar grid; `[d]` marks today, `d*` a planned day, `d!` a deadline.
fn render_month(out: &mut String, month: &[MonthDay]) {
    let Some(first) = month.first() else {
        return;
    };
    let _ = writeln!(out, "\n{}", first.date.format("%B %Y"));
    let mut table = new_table(&["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
    let lead = first.date.weekday().num_days_from_monday() as usize;
    let mut row: Vec<Cell> = (0..lead).map(|_| Cell::new("")).collect();
    for day in month {
        let mut label = day.date.day().to_string();
        if day.sessions.is_some() {
            label.push('*');
        }
        if !day.deadlines.is_empty() {
            label.push('!');
        }
        if day.is_today {
            label = format!("[{label}]");
        }
        row.push(Cell::new(label));
        if row.len() == 7 {
            table.add_row(std::mem::take(&mut row));
        }
    }
    if !row.is_empty() {
        table.add_row(row);
    }
    let _ = writeln!(out, "{table}");
    for day in month.iter().filter(|d| !d.deadlines.is_empty()) {
        let _ = writeln!(
            out,
            "  {}: {}",
            format_short_date(day.date),
            day.deadlines.join(", ")
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use services::AppServices;
    use study_core::time::fixed_clock;

    fn render(view: ScheduleView) -> String {
        let services = AppServices::embedded(fixed_clock()).unwrap();
        let schedule = services.schedule();
        let blocks = schedule.today_blocks();
        let week = schedule.week_overview();
        let month = schedule.month_overview();
        let deadlines = schedule.upcoming_deadlines();
        let data = ScheduleData {
            today: schedule.today(),
            blocks: &blocks,
            progress: schedule.day_progress(),
            week: &week,
            month: &month,
            deadlines: &deadlines,
        };
        render_schedule(&ScheduleVm::new(view), data)
    }

    #[test]
    fn week_view() {
        let text = render(ScheduleView::Week);
        assert!(text.contains("<Week View>"));
        assert!(text.contains("Thursday, July 18"));
        assert!(text.contains("09:00 - 10:30"));
        assert!(text.contains("This Week Overview"));
        assert!(text.contains("Cardiology Final Exam"));
        assert!(text.contains("7 days left"));
    }

    #[test]
    fn month_view() {
        let text = render(ScheduleView::Month);
        assert!(text.contains("<Month View>"));
        assert!(text.contains("July 2024"));
        assert!(text.contains("[18*]"));
        assert!(text.contains("25!"));
        assert!(!text.contains("This Week Overview"));
    }
}
