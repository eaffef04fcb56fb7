use std::path::Path;
use std::sync::Arc;

use content::Content;
use tracing::info;

use crate::Clock;
use crate::anatomy_service::AnatomyService;
use crate::dashboard_service::DashboardService;
use crate::error::AppServicesError;
use crate::exams::ExamService;
use crate::flashcard_service::FlashcardService;
use crate::hospital_service::HospitalService;
use crate::progress_service::ProgressService;
use crate::schedule_service::ScheduleService;

/// Assembles app-facing services over one content bundle and clock.
#[derive(Clone)]
pub struct AppServices {
    clock: Clock,
    exams: Arc<ExamService>,
    flashcards: Arc<FlashcardService>,
    anatomy: Arc<AnatomyService>,
    hospital: Arc<HospitalService>,
    schedule: Arc<ScheduleService>,
    progress: Arc<ProgressService>,
    dashboard: Arc<DashboardService>,
}

impl AppServices {
    #[must_use]
    pub fn new(content: &Content, clock: Clock) -> Self {
        Self {
            clock,
            exams: Arc::new(ExamService::new(clock, Arc::clone(&content.exams))),
            flashcards: Arc::new(FlashcardService::new(Arc::clone(&content.flashcards))),
            anatomy: Arc::new(AnatomyService::new(Arc::clone(&content.anatomy))),
            hospital: Arc::new(HospitalService::new(Arc::clone(&content.hospital))),
            schedule: Arc::new(ScheduleService::new(clock, Arc::clone(&content.schedule))),
            progress: Arc::new(ProgressService::new(Arc::clone(&content.progress))),
            dashboard: Arc::new(DashboardService::new(
                clock,
                Arc::clone(&content.progress),
                Arc::clone(&content.schedule),
            )),
        }
    }

    /// Build services over the bundled content.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the bundled content fails validation.
    pub fn embedded(clock: Clock) -> Result<Self, AppServicesError> {
        let content = Content::embedded()?;
        info!(source = "embedded", "content ready");
        Ok(Self::new(&content, clock))
    }

    /// Build services over content read from `dir`.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the directory content cannot be loaded.
    pub fn from_dir(dir: &Path, clock: Clock) -> Result<Self, AppServicesError> {
        let content = Content::from_dir(dir)?;
        info!(source = %dir.display(), "content ready");
        Ok(Self::new(&content, clock))
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn exams(&self) -> Arc<ExamService> {
        Arc::clone(&self.exams)
    }

    #[must_use]
    pub fn flashcards(&self) -> Arc<FlashcardService> {
        Arc::clone(&self.flashcards)
    }

    #[must_use]
    pub fn anatomy(&self) -> Arc<AnatomyService> {
        Arc::clone(&self.anatomy)
    }

    #[must_use]
    pub fn hospital(&self) -> Arc<HospitalService> {
        Arc::clone(&self.hospital)
    }

    #[must_use]
    pub fn schedule(&self) -> Arc<ScheduleService> {
        Arc::clone(&self.schedule)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn dashboard(&self) -> Arc<DashboardService> {
        Arc::clone(&self.dashboard)
    }
}
