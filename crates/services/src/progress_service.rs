use std::sync::Arc;

use content::ProgressRepository;
use study_core::model::{Achievement, DailyActivity, DailyStats, SubjectProgress, percent_of};

/// Sums over the weekly activity chart.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WeeklyTotals {
    pub hours: f32,
    pub cards: u32,
    pub exams: u32,
}

#[derive(Clone)]
pub struct ProgressService {
    progress: Arc<dyn ProgressRepository>,
}

impl ProgressService {
    #[must_use]
    pub fn new(progress: Arc<dyn ProgressRepository>) -> Self {
        Self { progress }
    }

    #[must_use]
    pub fn subjects(&self) -> Vec<SubjectProgress> {
        self.progress.subjects()
    }

    #[must_use]
    pub fn weekly_activity(&self) -> Vec<DailyActivity> {
        self.progress.weekly_activity()
    }

    #[must_use]
    pub fn weekly_totals(&self) -> WeeklyTotals {
        self.progress
            .weekly_activity()
            .iter()
            .fold(WeeklyTotals::default(), |acc, day| WeeklyTotals {
                hours: acc.hours + day.hours,
                cards: acc.cards + day.cards,
                exams: acc.exams + day.exams,
            })
    }

    #[must_use]
    pub fn achievements(&self) -> Vec<Achievement> {
        self.progress.achievements()
    }

    /// `(earned, total)` achievement counts.
    #[must_use]
    pub fn achievement_counts(&self) -> (usize, usize) {
        let all = self.progress.achievements();
        (all.iter().filter(|a| a.earned).count(), all.len())
    }

    /// Completed topics over all topics, across every subject.
    #[must_use]
    pub fn overall_percent(&self) -> u8 {
        let (completed, total) = self
            .progress
            .subjects()
            .iter()
            .fold((0u64, 0u64), |(c, t), s| {
                (c + u64::from(s.completed()), t + u64::from(s.total()))
            });
        percent_of(completed, total)
    }

    #[must_use]
    pub fn total_hours(&self) -> u32 {
        self.progress.subjects().iter().map(SubjectProgress::hours).sum()
    }

    #[must_use]
    pub fn daily_stats(&self) -> DailyStats {
        self.progress.daily_stats()
    }
}
