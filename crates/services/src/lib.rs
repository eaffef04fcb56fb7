#![forbid(unsafe_code)]

pub mod anatomy_service;
pub mod app_services;
pub mod dashboard_service;
pub mod error;
pub mod exams;
pub mod flashcard_service;
pub mod hospital_service;
pub mod progress_service;
pub mod schedule_service;

pub use study_core::Clock;

pub use anatomy_service::{AnatomyService, AnatomyViewer};
pub use app_services::AppServices;
pub use dashboard_service::{Dashboard, DashboardService};
pub use error::{
    AnatomyServiceError, AppServicesError, ExamServiceError, FlashcardServiceError,
    HospitalServiceError,
};
pub use exams::{ExamListItem, ExamResult, ExamRun, ExamService, QuestionReview};
pub use flashcard_service::{FlashcardService, FlashcardSession};
pub use hospital_service::{AbnormalLab, HospitalService, InteractionCheck};
pub use progress_service::{ProgressService, WeeklyTotals};
pub use schedule_service::{
    DayProgress, MonthDay, ScheduleService, UpcomingDeadline, WeekOverview,
};
