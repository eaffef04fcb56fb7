use std::sync::Arc;

use chrono::{Datelike, NaiveDate};

use content::ScheduleRepository;
use study_core::model::{
    BlockStatus, DayPlan, Deadline, DeadlineUrgency, StudyBlock, percent_of,
};

use crate::Clock;

/// A deadline with its countdown relative to the clock's today.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingDeadline {
    pub deadline: Deadline,
    pub days_left: i64,
    pub urgency: DeadlineUrgency,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeekOverview {
    pub days: Vec<DayPlan>,
    pub today: NaiveDate,
    pub total_sessions: u32,
    pub completed_sessions: u32,
    pub planned_hours: f32,
}

/// Completed versus planned blocks for today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayProgress {
    pub completed: usize,
    pub total: usize,
    pub completed_minutes: i64,
    pub planned_minutes: i64,
}

impl DayProgress {
    #[must_use]
    pub fn percent(&self) -> u8 {
        percent_of(self.completed as u64, self.total as u64)
    }
}

/// One cell of the month calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthDay {
    pub date: NaiveDate,
    pub sessions: Option<u32>,
    pub deadlines: Vec<String>,
    pub is_today: bool,
}

#[derive(Clone)]
pub struct ScheduleService {
    clock: Clock,
    schedule: Arc<dyn ScheduleRepository>,
}

impl ScheduleService {
    #[must_use]
    pub fn new(clock: Clock, schedule: Arc<dyn ScheduleRepository>) -> Self {
        Self { clock, schedule }
    }

    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Today's study blocks ordered by start time.
    #[must_use]
    pub fn today_blocks(&self) -> Vec<StudyBlock> {
        let mut blocks = self.schedule.daily_plan();
        blocks.sort_by_key(StudyBlock::start);
        blocks
    }

    #[must_use]
    pub fn day_progress(&self) -> DayProgress {
        let blocks = self.schedule.daily_plan();
        let done = || blocks.iter().filter(|b| b.status() == BlockStatus::Completed);
        DayProgress {
            completed: done().count(),
            total: blocks.len(),
            completed_minutes: done().map(StudyBlock::duration_minutes).sum(),
            planned_minutes: blocks.iter().map(StudyBlock::duration_minutes).sum(),
        }
    }

    #[must_use]
    pub fn week_overview(&self) -> WeekOverview {
        let mut days = self.schedule.week();
        days.sort_by_key(DayPlan::date);
        WeekOverview {
            total_sessions: days.iter().map(DayPlan::sessions).sum(),
            completed_sessions: days.iter().map(DayPlan::completed).sum(),
            planned_hours: days.iter().map(DayPlan::hours).sum(),
            today: self.clock.today(),
            days,
        }
    }

    /// Calendar for the month containing today.
    #[must_use]
    pub fn month_overview(&self) -> Vec<MonthDay> {
        let today = self.clock.today();
        let week = self.schedule.week();
        let deadlines = self.schedule.deadlines();
        let Some(first) = today.with_day(1) else {
            return Vec::new();
        };
        first
            .iter_days()
            .take_while(|d| d.month() == first.month())
            .map(|date| MonthDay {
                date,
                sessions: week.iter().find(|p| p.date() == date).map(DayPlan::sessions),
                deadlines: deadlines
                    .iter()
                    .filter(|d| d.date == date)
                    .map(|d| d.title.clone())
                    .collect(),
                is_today: date == today,
            })
            .collect()
    }

    /// Deadlines from today on, soonest first.
    #[must_use]
    pub fn upcoming_deadlines(&self) -> Vec<UpcomingDeadline> {
        let today = self.clock.today();
        let mut upcoming: Vec<_> = self
            .schedule
            .deadlines()
            .into_iter()
            .filter_map(|deadline| {
                let days_left = deadline.days_left(today);
                (days_left >= 0).then(|| UpcomingDeadline {
                    urgency: DeadlineUrgency::from_days_left(days_left),
                    days_left,
                    deadline,
                })
            })
            .collect();
        upcoming.sort_by(|a, b| {
            a.deadline
                .date
                .cmp(&b.deadline.date)
                .then(a.deadline.priority.cmp(&b.deadline.priority))
        });
        upcoming
    }
}
