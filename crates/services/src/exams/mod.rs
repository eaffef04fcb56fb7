mod run;
mod service;

pub use crate::error::ExamServiceError;
pub use run::{ExamResult, ExamRun, QuestionReview};
pub use service::{ExamListItem, ExamService};
