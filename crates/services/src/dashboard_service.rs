use std::sync::Arc;

use content::{ProgressRepository, ScheduleRepository};
use study_core::model::{DailyStats, SubjectProgress};

use crate::Clock;
use crate::schedule_service::{ScheduleService, UpcomingDeadline};

const RECENT_SUBJECTS: usize = 4;
const UPCOMING_EXAMS: usize = 3;

/// Everything the landing screen shows.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub today: DailyStats,
    pub recent_subjects: Vec<SubjectProgress>,
    pub upcoming_exams: Vec<UpcomingDeadline>,
}

#[derive(Clone)]
pub struct DashboardService {
    progress: Arc<dyn ProgressRepository>,
    schedule: ScheduleService,
}

impl DashboardService {
    #[must_use]
    pub fn new(
        clock: Clock,
        progress: Arc<dyn ProgressRepository>,
        schedule: Arc<dyn ScheduleRepository>,
    ) -> Self {
        Self {
            progress,
            schedule: ScheduleService::new(clock, schedule),
        }
    }

    #[must_use]
    pub fn dashboard(&self) -> Dashboard {
        let mut recent_subjects = self.progress.subjects();
        recent_subjects.sort_by(|a, b| b.last_studied().cmp(&a.last_studied()));
        recent_subjects.truncate(RECENT_SUBJECTS);

        let upcoming_exams = self
            .schedule
            .upcoming_deadlines()
            .into_iter()
            .filter(|u| u.deadline.kind.is_assessment())
            .take(UPCOMING_EXAMS)
            .collect();

        Dashboard {
            today: self.progress.daily_stats(),
            recent_subjects,
            upcoming_exams,
        }
    }
}
