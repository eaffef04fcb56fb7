mod exam_vm;
mod flashcard_vm;
mod hospital_vm;
mod schedule_vm;
mod time_fmt;

pub use exam_vm::{ExamOutcome, ExamVm};
pub use flashcard_vm::{CardFace, FlashcardIntent, FlashcardVm};
pub use hospital_vm::HospitalVm;
pub use schedule_vm::{ScheduleView, ScheduleVm};
pub use time_fmt::{
    format_ago, format_day, format_days_left, format_minutes, format_short_date,
    format_time_range,
};
